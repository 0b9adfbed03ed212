use crate::errors::{repository::RepositoryError, upload::UploadError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    Upload(#[from] UploadError),

    #[error("{0}")]
    Validation(String),
}
