/// Notifications fired at the owning context.
///
/// The settings flows never mutate parent-owned state (the user record, the
/// location and staff lists) directly. Instead they emit one of these events
/// on the session's channel and let the owner react (refetch the session
/// user, persist the roster change). Emission is fire-and-forget:
/// a dropped receiver is logged and otherwise ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    /// The user record changed on the server; the owner should refresh it.
    UserUpdated,
    /// A manager submitted a new location name (already trimmed, non-empty).
    LocationAdded { name: String },
    /// A manager confirmed removal of the location with this id.
    LocationRemoved { id: String },
    /// A manager submitted a new staff name (already trimmed, non-empty).
    StaffAdded { name: String },
    /// A manager confirmed removal of the staff member with this id.
    StaffRemoved { id: String },
}
