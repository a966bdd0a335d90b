//! Add/remove management for a parent-owned list.
//!
//! Holds no list data itself: adds and removals are announced as
//! [`SettingsEvent`]s and the parent applies them. Removal goes through an
//! explicit two-step machine (armed, then confirmed or cancelled) instead of
//! a blocking yes/no prompt, which keeps it testable.

use crate::model::{Role, SettingsEvent};
use crate::roster::entity::RosterEntity;
use crate::roster::error::RosterError;
use std::marker::PhantomData;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The two-step removal confirmation state.
#[derive(Debug, Clone, PartialEq)]
pub enum RemovalState {
    /// No removal pending.
    Idle,
    /// A removal awaits confirmation for this entry.
    Armed { id: String },
}

/// Management state for one roster (locations or staff): the add-input
/// buffer and the pending-removal state.
///
/// Every operation is gated on [`Role::Manager`].
pub struct RosterFlow<T: RosterEntity> {
    role: Role,
    input: String,
    removal: RemovalState,
    events: mpsc::UnboundedSender<SettingsEvent>,
    _entity: PhantomData<T>,
}

impl<T: RosterEntity> RosterFlow<T> {
    pub fn new(role: Role, events: mpsc::UnboundedSender<SettingsEvent>) -> Self {
        Self {
            role,
            input: String::new(),
            removal: RemovalState::Idle,
            events,
            _entity: PhantomData,
        }
    }

    /// Current contents of the add-input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the add-input field (one call per keystroke).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn removal(&self) -> &RemovalState {
        &self.removal
    }

    /// Submits the add-input field.
    ///
    /// The name is trimmed; whitespace-only input is silently ignored with
    /// the buffer left as typed. A non-empty trim emits the Added event and
    /// clears the buffer.
    pub fn submit_add(&mut self) -> Result<(), RosterError> {
        self.require_manager()?;

        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            debug!(entity = T::LABEL, "ignoring empty add input");
            return Ok(());
        }

        info!(entity = T::LABEL, name = trimmed, "add submitted");
        self.emit(T::added(trimmed.to_string()));
        self.input.clear();
        Ok(())
    }

    /// Arms removal of the entry with `id`, awaiting confirmation.
    ///
    /// Arming while already armed re-arms on the new id.
    pub fn request_remove(&mut self, id: impl Into<String>) -> Result<(), RosterError> {
        self.require_manager()?;
        let id = id.into();
        debug!(entity = T::LABEL, %id, "removal armed");
        self.removal = RemovalState::Armed { id };
        Ok(())
    }

    /// Confirms the armed removal, emitting the Removed event.
    pub fn confirm_remove(&mut self) -> Result<(), RosterError> {
        self.require_manager()?;
        match std::mem::replace(&mut self.removal, RemovalState::Idle) {
            RemovalState::Armed { id } => {
                info!(entity = T::LABEL, %id, "removal confirmed");
                self.emit(T::removed(id));
                Ok(())
            }
            RemovalState::Idle => Err(RosterError::NotArmed),
        }
    }

    /// Cancels any armed removal. Declining is always allowed and emits
    /// nothing.
    pub fn cancel_remove(&mut self) {
        if let RemovalState::Armed { id } = &self.removal {
            debug!(entity = T::LABEL, %id, "removal cancelled");
        }
        self.removal = RemovalState::Idle;
    }

    fn require_manager(&self) -> Result<(), RosterError> {
        if self.role == Role::Manager {
            Ok(())
        } else {
            Err(RosterError::NotPermitted(T::LABEL))
        }
    }

    fn emit(&self, event: SettingsEvent) {
        if self.events.send(event).is_err() {
            debug!(entity = T::LABEL, "owner dropped the event channel");
        }
    }
}
