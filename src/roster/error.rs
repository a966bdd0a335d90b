//! Error types for the roster flows.

use thiserror::Error;

/// Errors that can occur while managing a roster.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RosterError {
    /// The signed-in user is not a manager.
    #[error("only managers may manage the {0} list")]
    NotPermitted(&'static str),

    /// `confirm_remove` was called with no removal armed.
    #[error("no removal is pending confirmation")]
    NotArmed,
}
