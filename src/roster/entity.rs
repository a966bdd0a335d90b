//! Trait tying roster entity types to the events their flow emits.
//!
//! Locations and staff share identical management behaviour, so the flow is
//! written once as [`RosterFlow<T>`](crate::roster::RosterFlow) and the
//! entity type supplies the event constructors through this trait.

use crate::model::{Location, SettingsEvent, Staff};

/// Contract a list entity implements to be managed by a
/// [`RosterFlow`](crate::roster::RosterFlow).
pub trait RosterEntity: Clone + Send + Sync + 'static {
    /// Label used in logs and error messages (e.g. "location").
    const LABEL: &'static str;

    /// The event announcing that a new entry was submitted.
    fn added(name: String) -> SettingsEvent;

    /// The event announcing that the entry with `id` was removed.
    fn removed(id: String) -> SettingsEvent;
}

impl RosterEntity for Location {
    const LABEL: &'static str = "location";

    fn added(name: String) -> SettingsEvent {
        SettingsEvent::LocationAdded { name }
    }

    fn removed(id: String) -> SettingsEvent {
        SettingsEvent::LocationRemoved { id }
    }
}

impl RosterEntity for Staff {
    const LABEL: &'static str = "staff";

    fn added(name: String) -> SettingsEvent {
        SettingsEvent::StaffAdded { name }
    }

    fn removed(id: String) -> SettingsEvent {
        SettingsEvent::StaffRemoved { id }
    }
}
