//! Command implementations, grouped by feature area.  Each module extends
//! [`crate::GearShare`] with the operations the UI layer invokes.

pub mod borrowing;
pub mod items;
pub mod location;
pub mod messaging;
