use serde::{Deserialize, Serialize};

/// Access level of the signed-in user.
///
/// Only managers may manage the location and staff rosters; the
/// [`RosterFlow`](crate::roster::RosterFlow) enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Staff,
}

/// The authenticated user as seen by the settings screens.
///
/// This record is owned by the surrounding session context and is read-only
/// here: the profile flow reads `id`/`name`/`username` and signals
/// [`SettingsEvent::UserUpdated`](crate::model::SettingsEvent::UserUpdated)
/// after a successful update rather than mutating it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub role: Role,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        username: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            username: username.into(),
            role,
        }
    }
}

/// Payload for the user-update endpoint.
///
/// Password fields are present only when a validated new password was
/// supplied; `new_password` is never set without `current_password`.
/// The wire format uses camelCase keys to match the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl UserUpdate {
    /// A payload that changes the display name only.
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_password: None,
            new_password: None,
        }
    }
}
