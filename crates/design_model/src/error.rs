//! Error types for design model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesignModelError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid image payload: {0}")]
    InvalidImagePayload(String),

    #[error("Node decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DesignModelError>;
