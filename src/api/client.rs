use crate::model::UserUpdate;
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the API client.
///
/// The seam keeps the distinction between a server-side rejection and a
/// transport failure; the profile flow deliberately collapses both into one
/// generic user-facing message and logs the detail instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The server rejected the request (e.g. wrong current password).
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The request never completed (connection refused, timeout, etc.).
    #[error("transport error: {0}")]
    Transport(String),
}

/// The collaborator API client consumed by the profile flow.
///
/// The real implementation lives with the application shell; this crate only
/// depends on the contract. Server-side rejection and transport failure both
/// surface as `Err` so the flow has a single failure path.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Applies `payload` to the user record behind `user_id`.
    async fn update_user(&self, user_id: &str, payload: &UserUpdate) -> Result<(), ApiError>;
}
