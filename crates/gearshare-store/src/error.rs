use thiserror::Error;

/// Errors produced by the state layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A mutation targeted an entity that does not exist.
    #[error("Record not found")]
    NotFound,

    /// A message or request transition that the state machine forbids.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
