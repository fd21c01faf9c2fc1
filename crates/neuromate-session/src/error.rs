use neuromate_instruments::error::InstrumentError;
use thiserror::Error;
use uuid::Uuid;

/// Every variant leaves the session untouched; callers may retry.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("screening not complete for session {0}")]
    ScreeningNotComplete(Uuid),

    #[error("screening already complete for session {0}")]
    AlreadyComplete(Uuid),

    #[error(transparent)]
    InvalidAnswerFormat(#[from] InstrumentError),
}
