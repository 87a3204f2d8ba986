//! # gearshare-store
//!
//! In-memory canonical state for the GearShare client.
//!
//! The crate owns the two top-level collections — the user's own gear and
//! the community availability list — behind the [`Inventory`] type, which is
//! the only writer allowed to touch them.  The availability entry for an
//! owned item is a derived view of the canonical record, never an
//! independent copy of truth.  [`Mailbox`] holds the message inbox and its
//! unread counter, and [`search`] is the pure projection that turns the
//! availability list into the visible subset.

pub mod inventory;
pub mod mailbox;
pub mod models;
pub mod search;

mod error;

pub use error::{Result, StoreError};
pub use inventory::Inventory;
pub use mailbox::Mailbox;
pub use models::*;
