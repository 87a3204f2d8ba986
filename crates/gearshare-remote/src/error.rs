use thiserror::Error;

/// Errors produced at the backend boundary.
#[derive(Error, Debug, Clone)]
pub enum RemoteError {
    /// The backend rejected the call.  Callers surface this to the user and
    /// never retry automatically.
    #[error("Remote call failed: {0}")]
    Rejected(String),
}
