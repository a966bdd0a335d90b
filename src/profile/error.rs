//! Error types for the profile flow.

use crate::api::ApiError;
use thiserror::Error;

/// Errors that can occur during a profile update.
///
/// The validation variants double as the user-facing inline messages (their
/// `Display` text is shown verbatim). `UpdateFailed` keeps the underlying
/// [`ApiError`] as its source for diagnostics, but displays only the generic
/// text; the flow never discloses the cause to the user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    /// The new password does not meet the minimum length.
    #[error("new password must be at least 8 characters")]
    PasswordTooShort,

    /// The new password and its confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// A password change was requested without the current password.
    #[error("current password is required")]
    CurrentPasswordRequired,

    /// A submission is already in flight; at most one runs at a time.
    #[error("an update is already in progress")]
    UpdateInFlight,

    /// The update call failed, for any remote reason.
    #[error("failed to update profile")]
    UpdateFailed(#[source] ApiError),
}

impl From<ApiError> for ProfileError {
    fn from(e: ApiError) -> Self {
        ProfileError::UpdateFailed(e)
    }
}
