use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::{ErrorKind, ProductError};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match self.kind() {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "ValidationError"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ErrorKind::Storage => (StatusCode::INTERNAL_SERVER_ERROR, "StorageError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
