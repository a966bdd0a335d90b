//! The validate-then-submit state machine for profile updates.
//!
//! A submission runs in two phases so the in-flight guard is testable
//! without a network:
//!
//! 1. [`ProfileFlow::begin_submit`] clears the previous message, validates
//!    the form, derives the [`UserUpdate`] payload and hands back a
//!    [`SubmitTicket`] carrying the request token.
//! 2. [`ProfileFlow::complete_submit`] applies the call's outcome, keyed by
//!    that token. A completion whose token no longer matches is discarded
//!    without touching form or message state.
//!
//! [`ProfileFlow::submit`] drives both phases around the actual
//! [`UserApi::update_user`] call and is what callers normally use.

use crate::api::{ApiError, UserApi};
use crate::model::{SettingsEvent, User, UserUpdate};
use crate::profile::error::ProfileError;
use crate::profile::form::{FieldEdit, FormMessage, ProfileForm};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Minimum length of a new password, in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Proof of a started submission, consumed by [`ProfileFlow::complete_submit`].
///
/// Carries the derived payload and the target user id so the caller can issue
/// the API call; the token ties the completion back to this attempt.
#[derive(Debug)]
pub struct SubmitTicket {
    token: u64,
    pub user_id: String,
    pub payload: UserUpdate,
}

/// State of the profile edit screen: the form record, the transient
/// feedback message and the in-flight submission token.
///
/// At most one submission is in flight at a time; `begin_submit` refuses
/// while a token is outstanding.
pub struct ProfileFlow {
    user: User,
    form: ProfileForm,
    message: Option<FormMessage>,
    in_flight: Option<u64>,
    next_token: u64,
    notify: Option<mpsc::UnboundedSender<SettingsEvent>>,
}

impl ProfileFlow {
    /// Creates a flow with no owner notification channel.
    pub fn new(user: User) -> Self {
        let form = ProfileForm::for_user(&user);
        Self {
            user,
            form,
            message: None,
            in_flight: None,
            next_token: 0,
            notify: None,
        }
    }

    /// Creates a flow that emits [`SettingsEvent::UserUpdated`] after each
    /// successful submission.
    pub fn with_notifier(user: User, notify: mpsc::UnboundedSender<SettingsEvent>) -> Self {
        let mut flow = Self::new(user);
        flow.notify = Some(notify);
        flow
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    /// True while a submission is awaiting its result. The submit control
    /// should be disabled while this holds.
    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Applies a single keyed edit to the form.
    pub fn edit(&mut self, edit: FieldEdit) {
        self.form = self.form.apply(edit);
    }

    /// Derives the update payload from the form, or the validation error
    /// that rejects it.
    ///
    /// The password checks run only when a new password was typed; with an
    /// empty new password the payload carries the name alone and any text
    /// left in the other password fields is ignored.
    fn build_payload(form: &ProfileForm) -> Result<UserUpdate, ProfileError> {
        if !form.wants_password_change() {
            return Ok(UserUpdate::name_only(form.name.clone()));
        }
        if form.new_password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ProfileError::PasswordTooShort);
        }
        if form.new_password != form.confirm_password {
            return Err(ProfileError::PasswordMismatch);
        }
        if form.current_password.is_empty() {
            return Err(ProfileError::CurrentPasswordRequired);
        }
        Ok(UserUpdate {
            name: form.name.clone(),
            current_password: Some(form.current_password.clone()),
            new_password: Some(form.new_password.clone()),
        })
    }

    /// Starts a submission attempt.
    ///
    /// Refuses if one is already in flight (the previous message is left in
    /// place). Otherwise the message is cleared, the form validated, and on
    /// success a ticket with a fresh token is returned; the flow is "saving"
    /// until that ticket is completed. Validation failures set the inline
    /// error message and never reach the network.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, ProfileError> {
        if self.in_flight.is_some() {
            debug!("submit refused, update already in flight");
            return Err(ProfileError::UpdateInFlight);
        }
        self.message = None;

        let payload = match Self::build_payload(&self.form) {
            Ok(payload) => payload,
            Err(e) => {
                debug!(error = %e, "validation rejected submission");
                self.message = Some(FormMessage::error(e.to_string()));
                return Err(e);
            }
        };

        self.next_token += 1;
        let token = self.next_token;
        self.in_flight = Some(token);
        Ok(SubmitTicket {
            token,
            user_id: self.user.id.clone(),
            payload,
        })
    }

    /// Applies the outcome of the API call for `ticket`.
    ///
    /// A stale completion (token mismatch) is discarded so a late response
    /// can never overwrite the state of a newer attempt.
    pub fn complete_submit(&mut self, ticket: SubmitTicket, result: Result<(), ApiError>) {
        if self.in_flight != Some(ticket.token) {
            debug!(token = ticket.token, "discarding stale submit completion");
            return;
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                info!(user_id = %ticket.user_id, "profile updated");
                self.form = self.form.clear_sensitive();
                self.message = Some(FormMessage::success("profile updated"));
                if let Some(notify) = &self.notify {
                    if notify.send(SettingsEvent::UserUpdated).is_err() {
                        debug!("owner dropped the event channel");
                    }
                }
            }
            Err(e) => {
                // Logged for diagnostics only; the user sees the generic text.
                warn!(user_id = %ticket.user_id, error = %e, "update_user failed");
                self.message = Some(FormMessage::error(
                    ProfileError::UpdateFailed(e).to_string(),
                ));
            }
        }
    }

    /// Validates and submits the form in one step.
    #[instrument(skip(self, api), fields(user_id = %self.user.id))]
    pub async fn submit(&mut self, api: &dyn UserApi) -> Result<(), ProfileError> {
        let ticket = self.begin_submit()?;
        debug!(
            changes_password = ticket.payload.new_password.is_some(),
            "Sending update_user"
        );
        let result = api.update_user(&ticket.user_id, &ticket.payload).await;
        let outcome = result.clone().map_err(ProfileError::from);
        self.complete_submit(ticket, result);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn flow() -> ProfileFlow {
        ProfileFlow::new(User::new("user_1", "Taro", "taro", Role::Staff))
    }

    fn error_text(flow: &ProfileFlow) -> &str {
        &flow.message().expect("expected a message").text
    }

    #[test]
    fn test_empty_new_password_builds_name_only_payload() {
        let mut flow = flow();
        // Stray text in the current-password field is ignored when no new
        // password was typed.
        flow.edit(FieldEdit::CurrentPassword("oldpw".into()));

        let ticket = flow.begin_submit().unwrap();
        assert_eq!(ticket.user_id, "user_1");
        assert_eq!(ticket.payload, UserUpdate::name_only("Taro"));
        assert!(flow.is_saving());
    }

    #[test]
    fn test_short_password_rejected_before_other_checks() {
        let mut flow = flow();
        // Both too short and unconfirmed; the length check wins.
        flow.edit(FieldEdit::NewPassword("short1".into()));

        let err = flow.begin_submit().unwrap_err();
        assert_eq!(err, ProfileError::PasswordTooShort);
        assert_eq!(error_text(&flow), "new password must be at least 8 characters");
        assert!(!flow.is_saving());
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        let mut flow = flow();
        flow.edit(FieldEdit::NewPassword("newpassword1".into()));
        flow.edit(FieldEdit::ConfirmPassword("newpassword2".into()));
        flow.edit(FieldEdit::CurrentPassword("oldpw".into()));

        let err = flow.begin_submit().unwrap_err();
        assert_eq!(err, ProfileError::PasswordMismatch);
        assert_eq!(error_text(&flow), "passwords do not match");
        assert!(!flow.is_saving());
    }

    #[test]
    fn test_missing_current_password_rejected() {
        let mut flow = flow();
        flow.edit(FieldEdit::NewPassword("newpassword1".into()));
        flow.edit(FieldEdit::ConfirmPassword("newpassword1".into()));

        let err = flow.begin_submit().unwrap_err();
        assert_eq!(err, ProfileError::CurrentPasswordRequired);
        assert_eq!(error_text(&flow), "current password is required");
        assert!(!flow.is_saving());
    }

    #[test]
    fn test_valid_password_change_includes_both_passwords() {
        let mut flow = flow();
        flow.edit(FieldEdit::CurrentPassword("oldpw".into()));
        flow.edit(FieldEdit::NewPassword("newpassword1".into()));
        flow.edit(FieldEdit::ConfirmPassword("newpassword1".into()));

        let ticket = flow.begin_submit().unwrap();
        assert_eq!(ticket.payload.current_password.as_deref(), Some("oldpw"));
        assert_eq!(
            ticket.payload.new_password.as_deref(),
            Some("newpassword1")
        );
    }

    #[test]
    fn test_second_submission_refused_while_in_flight() {
        let mut flow = flow();
        let _ticket = flow.begin_submit().unwrap();

        let err = flow.begin_submit().unwrap_err();
        assert_eq!(err, ProfileError::UpdateInFlight);
        // The refused attempt neither clears the message nor issues a ticket.
        assert!(flow.message().is_none());
        assert!(flow.is_saving());
    }

    #[test]
    fn test_successful_completion_clears_sensitive_fields() {
        let mut flow = flow();
        flow.edit(FieldEdit::Name("Jiro".into()));
        flow.edit(FieldEdit::CurrentPassword("oldpw".into()));
        flow.edit(FieldEdit::NewPassword("newpassword1".into()));
        flow.edit(FieldEdit::ConfirmPassword("newpassword1".into()));

        let ticket = flow.begin_submit().unwrap();
        flow.complete_submit(ticket, Ok(()));

        assert!(!flow.is_saving());
        let message = flow.message().unwrap();
        assert_eq!(message.kind, crate::profile::MessageKind::Success);
        assert_eq!(flow.form().name, "Jiro");
        assert_eq!(flow.form().username, "taro");
        assert_eq!(flow.form().current_password, "");
        assert_eq!(flow.form().new_password, "");
        assert_eq!(flow.form().confirm_password, "");
    }

    #[test]
    fn test_failed_completion_keeps_fields_and_shows_generic_message() {
        let mut flow = flow();
        flow.edit(FieldEdit::CurrentPassword("oldpw".into()));
        flow.edit(FieldEdit::NewPassword("newpassword1".into()));
        flow.edit(FieldEdit::ConfirmPassword("newpassword1".into()));

        let ticket = flow.begin_submit().unwrap();
        flow.complete_submit(
            ticket,
            Err(ApiError::Rejected("wrong current password".into())),
        );

        assert!(!flow.is_saving());
        // The cause is not disclosed in the message.
        assert_eq!(error_text(&flow), "failed to update profile");
        assert_eq!(flow.form().current_password, "oldpw");
        assert_eq!(flow.form().new_password, "newpassword1");
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut flow = flow();
        let _live = flow.begin_submit().unwrap();

        let stale = SubmitTicket {
            token: 0,
            user_id: "user_1".into(),
            payload: UserUpdate::name_only("Taro"),
        };
        flow.complete_submit(stale, Ok(()));

        // The live attempt is still pending and no message was produced.
        assert!(flow.is_saving());
        assert!(flow.message().is_none());
    }

    #[test]
    fn test_success_notifies_owner() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut flow =
            ProfileFlow::with_notifier(User::new("user_1", "Taro", "taro", Role::Staff), tx);

        let ticket = flow.begin_submit().unwrap();
        flow.complete_submit(ticket, Ok(()));

        assert_eq!(rx.try_recv().unwrap(), SettingsEvent::UserUpdated);
    }

    #[test]
    fn test_failure_does_not_notify_owner() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut flow =
            ProfileFlow::with_notifier(User::new("user_1", "Taro", "taro", Role::Staff), tx);

        let ticket = flow.begin_submit().unwrap();
        flow.complete_submit(ticket, Err(ApiError::Transport("connection reset".into())));

        assert!(rx.try_recv().is_err());
    }
}
