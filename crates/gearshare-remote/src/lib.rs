//! # gearshare-remote
//!
//! The asynchronous backend boundary.
//!
//! [`RemoteApi`] is the contract a real backend integration must satisfy;
//! [`MockRemote`] is the fixture-backed stand-in that simulates network
//! latency over deterministic seed data and can be told to fail for tests.

pub mod api;
pub mod fixtures;
pub mod mock;

mod error;

pub use api::RemoteApi;
pub use error::RemoteError;
pub use mock::MockRemote;
