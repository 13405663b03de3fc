use sqlx::Error as SqlxError;
use thiserror::Error;

/// Any failure coming out of the persistence layer. The display form is the
/// driver's own message, which is what callers get back verbatim.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Sqlx(#[from] SqlxError),

    #[error("{0}")]
    Custom(String),
}
