use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}
