//! # Observability & Tracing
//!
//! Structured logging for the settings flows, built on the `tracing` crate.
//!
//! Flow entry points are instrumented with spans carrying the user id; log
//! lines add structured fields (`entity`, `user_id`, `error`) rather than
//! interpolated text, so they filter cleanly in aggregators. Validation
//! failures log at `debug`, remote failures at `warn` with the underlying
//! [`ApiError`](crate::api::ApiError); password contents are never logged.
//!
//! The log level comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo test
//! RUST_LOG=settings_console=debug cargo test
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Structured fields carry the context instead
        .compact()
        .init();
}
