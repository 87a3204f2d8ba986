//! # gearshare-shared
//!
//! Identifier newtypes, domain enums, and constants shared by every
//! GearShare crate.

pub mod constants;
pub mod placeholder;
pub mod types;

pub use types::{Condition, ItemId, MessageId, Privacy, UserRef};
