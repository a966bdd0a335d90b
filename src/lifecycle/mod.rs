//! Session orchestration and observability setup.
//!
//! [`SettingsSession`] is the "wiring" layer: it creates the event channel,
//! hands each flow its sender, and exposes the API client to the profile
//! flow. [`tracing::setup_tracing`] initialises structured logging.

pub mod session;
pub mod tracing;

pub use session::SettingsSession;
pub use self::tracing::setup_tracing;
