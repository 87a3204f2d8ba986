use thiserror::Error;

use gearshare_remote::RemoteError;
use gearshare_shared::ItemId;
use gearshare_store::StoreError;

/// Errors surfaced by the application controller.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The backend rejected the call; local state was left untouched and a
    /// notification was shown.
    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    /// A local state error (missing entity, illegal transition).
    #[error("State error: {0}")]
    Store(#[from] StoreError),

    /// Pre-flight validation failed.  No remote call was dispatched and no
    /// notification shown; the control simply does not proceed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Another mutation on the same item is still in flight.
    #[error("Operation already in flight for item {0}")]
    Busy(ItemId),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
