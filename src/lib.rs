//! # Settings Console
//!
//! > **UI-free flow state machines for a reservation admin tool's settings screens.**
//!
//! This crate models the settings screens (profile edit, location management,
//! staff management) of a reservation/payment administration tool as plain
//! state machines, with rendering, routing and the API server left to the
//! application shell.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Flows, not widgets
//! Each screen's behaviour lives in a flow struct that owns its form state and
//! exposes explicit transitions. The shell renders whatever the flow says and
//! forwards interactions back as method calls. This keeps every rule (password
//! validation, the in-flight guard, removal confirmation) testable without a
//! UI toolkit.
//!
//! ### Explicit state transitions
//! The profile form is an immutable record advanced by a keyed reducer
//! ([`profile::ProfileForm::apply`]). Submission is split into
//! `begin_submit` / `complete_submit` around the API call, with a request
//! token so a stale response can never clobber a newer attempt.
//!
//! ### Events, not callbacks
//! Parent-owned state (the user record, the location and staff lists) is
//! never mutated here. Flows announce changes as [`model::SettingsEvent`]s on
//! the session's channel and the owner applies them.
//!
//! ### Mocking: testing without pain
//! The only I/O seam is the [`api::UserApi`] trait. [`api::MockUserApi`]
//! queues responses and records calls, so every scenario down to a failing
//! update is deterministic. See the [`api::mock`] module.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - pure data: [`model::User`], [`model::Location`],
//!   [`model::Staff`], the [`model::UserUpdate`] wire payload and
//!   [`model::SettingsEvent`].
//! - [`api`] - the collaborator client seam: [`api::UserApi`],
//!   [`api::ApiError`] and the mock.
//! - [`profile`] - the validate-then-submit flow for changing the user's
//!   display name and/or password.
//! - [`roster`] - the generic add/remove flow over [`roster::RosterEntity`],
//!   instantiated for locations and staff, manager-gated, with two-step
//!   removal confirmation.
//! - [`lifecycle`] - [`lifecycle::SettingsSession`] wiring plus
//!   [`lifecycle::setup_tracing`].
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use settings_console::api::MockUserApi;
//! use settings_console::lifecycle::SettingsSession;
//! use settings_console::profile::FieldEdit;
//!
//! let api = std::sync::Arc::new(MockUserApi::new());
//! api.expect_update().return_ok();
//!
//! let (mut session, mut events) = SettingsSession::new(user, locations, staff, api);
//! session.profile.edit(FieldEdit::Name("Taro".into()));
//! session.submit_profile().await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod api;
pub mod lifecycle;
pub mod model;
pub mod profile;
pub mod roster;
