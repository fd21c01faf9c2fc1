use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("unknown demographic field: {0:?}")]
    UnknownField(String),
}
