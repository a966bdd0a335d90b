use crate::api::UserApi;
use crate::model::{Location, SettingsEvent, Staff, User};
use crate::profile::{ProfileError, ProfileFlow};
use crate::roster::RosterFlow;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Wires the settings flows to one user, one API client and one event
/// channel.
///
/// The session is the library-side rendition of the settings screen: it owns
/// the three flow state machines and read-only snapshots of the parent's
/// location and staff lists. Everything that must outlive the screen (the
/// user record, the lists, persistence) stays with the owner, which consumes
/// the [`SettingsEvent`] receiver returned by [`SettingsSession::new`].
///
/// # Example
///
/// ```ignore
/// let api = Arc::new(HttpUserApi::new(base_url));
/// let (mut session, mut events) = SettingsSession::new(user, locations, staff, api);
///
/// session.profile.edit(FieldEdit::Name("Taro".into()));
/// session.submit_profile().await?;
///
/// match events.recv().await {
///     Some(SettingsEvent::UserUpdated) => refresh_session_user().await,
///     _ => {}
/// }
/// ```
pub struct SettingsSession {
    /// The profile-update flow for the signed-in user.
    pub profile: ProfileFlow,

    /// Management flow for the location list.
    pub locations: RosterFlow<Location>,

    /// Management flow for the staff list.
    pub staff: RosterFlow<Staff>,

    location_list: Vec<Location>,
    staff_list: Vec<Staff>,
    api: Arc<dyn UserApi>,
}

impl SettingsSession {
    /// Creates the session and the event receiver the owner listens on.
    pub fn new(
        user: User,
        locations: Vec<Location>,
        staff: Vec<Staff>,
        api: Arc<dyn UserApi>,
    ) -> (Self, mpsc::UnboundedReceiver<SettingsEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        info!(user_id = %user.id, role = ?user.role, "settings session opened");

        let session = Self {
            profile: ProfileFlow::with_notifier(user.clone(), events.clone()),
            locations: RosterFlow::new(user.role, events.clone()),
            staff: RosterFlow::new(user.role, events),
            location_list: locations,
            staff_list: staff,
            api,
        };
        (session, receiver)
    }

    /// Submits the profile form through the session's API client.
    pub async fn submit_profile(&mut self) -> Result<(), ProfileError> {
        self.profile.submit(self.api.as_ref()).await
    }

    /// The parent-owned location list, as last snapshotted.
    pub fn location_list(&self) -> &[Location] {
        &self.location_list
    }

    /// The parent-owned staff list, as last snapshotted.
    pub fn staff_list(&self) -> &[Staff] {
        &self.staff_list
    }

    /// Replaces the location snapshot after the owner applied a change.
    pub fn set_location_list(&mut self, locations: Vec<Location>) {
        self.location_list = locations;
    }

    /// Replaces the staff snapshot after the owner applied a change.
    pub fn set_staff_list(&mut self, staff: Vec<Staff>) {
        self.staff_list = staff;
    }
}
