use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Body for requests poem rejects before a handler runs (bad JSON, missing
/// fields, unparsable path or query values).
pub fn malformed_request(err: &poem::Error) -> Json<ErrorResponse> {
    tracing::debug!("Rejected malformed request: {}", err);
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "request.malformed".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_malformed_request_as_validation_error() {
        let err = poem::Error::from_string("missing field `price`", StatusCode::BAD_REQUEST);

        let Json(body) = malformed_request(&err);

        assert_eq!(body.name, "ValidationError");
        assert_eq!(body.message, "request.malformed");
    }
}
