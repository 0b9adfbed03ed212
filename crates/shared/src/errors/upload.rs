use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The image host answered with a non-success status. Holds its message untouched.
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid upload response: {0}")]
    InvalidResponse(String),
}
