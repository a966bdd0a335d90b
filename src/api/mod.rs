//! The collaborator API client seam.
//!
//! The settings flows never talk to the network themselves; they call through
//! the [`UserApi`] trait and let the application shell supply the real client.
//!
//! # Testing
//!
//! See the [`mock`] module for a queued-expectation mock of the client.

pub mod client;
pub mod mock;

pub use client::*;
pub use mock::MockUserApi;
