use thiserror::Error;

use crate::domain::search::SearchError;
use crate::repository::errors::RepositoryError;

/// Failures of the search pipeline.
///
/// The display string is what goes on the wire; [`ServiceError::Internal`]
/// keeps the repository detail as its source for logging only.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("wrong AccessToken")]
    Unauthorized,

    #[error(transparent)]
    InvalidRequest(#[from] SearchError),

    #[error("users not found")]
    NotFound,

    #[error("Internal server error")]
    Internal(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
