use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Unknown lane: {0}")]
    UnknownLane(String),

    #[error("Invalid card ID: {0:?}")]
    InvalidCardId(String),

    #[error("Duplicate card ID: {0}")]
    DuplicateCardId(String),

    #[error("Invalid drop zone: {0}")]
    InvalidDropZone(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
