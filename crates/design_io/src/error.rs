//! Error types for import and export operations

use thiserror::Error;

/// Failure reported by the host's node repository.
///
/// The message is the host's own and is surfaced to the user unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RepositoryError {
    pub message: String,
}

impl RepositoryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DesignIoError {
    #[error("No valid design data found")]
    NoDesignData,

    #[error("No nodes were created")]
    NoNodesCreated,

    #[error("No exportable layers found on the current page")]
    NoExportableLayers,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DesignIoError>;
