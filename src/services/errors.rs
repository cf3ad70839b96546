use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures surfaced by the service layer to the HTTP boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request cannot be served as sent; `error_key` is the
    /// machine-readable reason reported to the caller.
    #[error("{message}")]
    BadRequest {
        message: String,
        error_key: &'static str,
    },

    #[error("Entity not found")]
    NotFound,

    #[error("Invalid value: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl ServiceError {
    pub fn bad_request(message: impl Into<String>, error_key: &'static str) -> Self {
        Self::BadRequest {
            message: message.into(),
            error_key,
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
