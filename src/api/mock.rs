//! # Mock API Client
//!
//! Utilities for testing flows in isolation.
//!
//! [`MockUserApi`] stands in for the real API client: responses are queued up
//! front with [`MockUserApi::expect_update`], every call is recorded for
//! inspection, and [`MockUserApi::verify`] asserts nothing queued went unused.
//!
//! # Example
//! ```ignore
//! let api = MockUserApi::new();
//! api.expect_update().return_ok();
//!
//! flow.submit(&api).await?;
//!
//! let calls = api.calls();
//! assert_eq!(calls[0].0, "user_1");
//! api.verify();
//! ```

use crate::api::{ApiError, UserApi};
use crate::model::UserUpdate;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A mock [`UserApi`] with queued responses and call recording.
#[derive(Clone, Default)]
pub struct MockUserApi {
    responses: Arc<Mutex<VecDeque<Result<(), ApiError>>>>,
    calls: Arc<Mutex<Vec<(String, UserUpdate)>>>,
}

impl MockUserApi {
    /// Creates a mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an expectation for the next `update_user` call.
    pub fn expect_update(&self) -> UpdateExpectationBuilder {
        UpdateExpectationBuilder {
            responses: self.responses.clone(),
        }
    }

    /// Every `(user_id, payload)` pair received so far, in call order.
    pub fn calls(&self) -> Vec<(String, UserUpdate)> {
        self.calls.lock().unwrap().clone()
    }

    /// Panics if queued responses were never consumed.
    pub fn verify(&self) {
        let responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                responses.len()
            );
        }
    }
}

#[async_trait]
impl UserApi for MockUserApi {
    async fn update_user(&self, user_id: &str, payload: &UserUpdate) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push((user_id.to_string(), payload.clone()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected update_user call for {}", user_id))
    }
}

/// Builder for `update_user` expectations.
pub struct UpdateExpectationBuilder {
    responses: Arc<Mutex<VecDeque<Result<(), ApiError>>>>,
}

impl UpdateExpectationBuilder {
    /// Sets the expectation to succeed.
    pub fn return_ok(self) {
        self.responses.lock().unwrap().push_back(Ok(()));
    }

    /// Sets the expectation to fail with `error`.
    pub fn return_err(self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls_in_order() {
        let api = MockUserApi::new();
        api.expect_update().return_ok();
        api.expect_update()
            .return_err(ApiError::Rejected("wrong current password".into()));

        let first = UserUpdate::name_only("Taro");
        let second = UserUpdate {
            name: "Taro".into(),
            current_password: Some("oldpw".into()),
            new_password: Some("newpassword1".into()),
        };

        assert!(api.update_user("user_1", &first).await.is_ok());
        assert!(api.update_user("user_1", &second).await.is_err());

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1, first);
        assert_eq!(calls[1].1, second);
        api.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_panics_on_unused_expectation() {
        let api = MockUserApi::new();
        api.expect_update().return_ok();
        api.verify();
    }
}
