use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Could not check a connection out of the pool.
    #[error("database connection error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// Any Diesel query or transaction failure.
    #[error("{0}")]
    Database(#[from] diesel::result::Error),
    /// A stored value could not be converted into its domain type.
    #[error("invalid stored value: {0}")]
    Conversion(String),
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(value: TypeConstraintError) -> Self {
        Self::Conversion(value.to_string())
    }
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
