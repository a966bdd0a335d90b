//! The profile-update flow: form state, validation and submission.

pub mod error;
pub mod flow;
pub mod form;

pub use error::*;
pub use flow::*;
pub use form::*;
