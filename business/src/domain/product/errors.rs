use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.invalid_page")]
    InvalidPage,
    #[error("product.invalid_page_size")]
    InvalidPageSize,
    #[error("product.not_found")]
    NotFound,
    #[error("{0}")]
    Repository(#[source] RepositoryError),
}

/// Stable error taxonomy exposed to the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Storage,
}

impl ProductError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::NameEmpty
            | ProductError::PriceInvalid
            | ProductError::InvalidPage
            | ProductError::InvalidPageSize
            | ProductError::Repository(RepositoryError::InvalidData) => ErrorKind::Validation,
            ProductError::NotFound | ProductError::Repository(RepositoryError::NotFound) => {
                ErrorKind::NotFound
            }
            ProductError::Repository(RepositoryError::DatabaseError) => ErrorKind::Storage,
        }
    }
}

impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
