use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TodoError {
    /// The name failed the length check. The payload is the user-facing message.
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid priority {0}: must be between 1 and 5")]
    InvalidPriority(u8),

    #[error("Invalid deadline: {0}")]
    InvalidDeadline(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
