use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("session {0} not found")]
    SessionNotFound(String),

    #[error("internal lock poisoned")]
    LockPoisoned,

    #[error("storage backend error: {0}")]
    Storage(String),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
