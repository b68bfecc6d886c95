use thiserror::Error;

use crate::forms::FormError;
use crate::repository::RepositoryError;

/// Error type shared by service layer functions.
///
/// The variants mirror the HTTP taxonomy: validation failures become 400,
/// missing entities 404, anything touching the store or the filesystem 500
/// with the underlying message exposed.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Upload(String),
    #[error("{0}")]
    Repository(#[from] RepositoryError),
}

impl From<FormError> for ServiceError {
    fn from(value: FormError) -> Self {
        Self::Validation(value.to_string())
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
