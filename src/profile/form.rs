//! The profile form record and its transition function.
//!
//! The form is an immutable record: every edit goes through
//! [`ProfileForm::apply`], which returns a fresh record with exactly one
//! field replaced. Keyed edits make the transition testable in isolation and
//! rule out accidental partial updates.

use crate::model::User;

/// Severity of a [`FormMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient feedback shown next to the form.
///
/// Overwritten on every submission attempt and cleared at the start of each.
#[derive(Debug, Clone, PartialEq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// A single keyed edit to the profile form.
///
/// There is no variant for `username`: it is read-only by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    CurrentPassword(String),
    NewPassword(String),
    ConfirmPassword(String),
}

/// Mutable state of the profile edit screen.
///
/// Initialised from the authenticated user; the sensitive fields are reset
/// after a successful submission and the whole record is dropped with the
/// flow.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub username: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    /// Seeds the form from the user's current name and username.
    pub fn for_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            current_password: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),
        }
    }

    /// Returns a new record with the edited field replaced.
    #[must_use]
    pub fn apply(&self, edit: FieldEdit) -> Self {
        let mut next = self.clone();
        match edit {
            FieldEdit::Name(value) => next.name = value,
            FieldEdit::CurrentPassword(value) => next.current_password = value,
            FieldEdit::NewPassword(value) => next.new_password = value,
            FieldEdit::ConfirmPassword(value) => next.confirm_password = value,
        }
        next
    }

    /// Returns a new record with the three password fields emptied.
    ///
    /// Name and username are retained.
    #[must_use]
    pub fn clear_sensitive(&self) -> Self {
        Self {
            name: self.name.clone(),
            username: self.username.clone(),
            current_password: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),
        }
    }

    /// Whether the user typed a new password at all.
    pub fn wants_password_change(&self) -> bool {
        !self.new_password.is_empty()
    }
}
