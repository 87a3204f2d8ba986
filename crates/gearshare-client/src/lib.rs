//! # gearshare-client
//!
//! The GearShare application controller.
//!
//! [`GearShare`] owns the whole application state and is the only mutation
//! path into it.  Every mutating command is apply-after-confirm: the remote
//! call is dispatched first and local state changes only once it succeeds,
//! so the owned-items and availability collections are updated together or
//! not at all.  Failures surface through the single-slot [`Notifier`].

pub mod commands;
pub mod engine;
pub mod notify;
pub mod state;

mod error;

use tracing_subscriber::{fmt, EnvFilter};

pub use engine::GearShare;
pub use error::{EngineError, Result};
pub use notify::Notifier;

/// Install the global tracing subscriber.  `RUST_LOG` wins when set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("gearshare_client=debug,gearshare_remote=info,gearshare_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
