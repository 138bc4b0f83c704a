//! Random user API client
//!
//! Fetches customer profiles for the "community" cards from randomuser.me.

use std::sync::Arc;

use serde::Deserialize;

use super::{or_empty, User};
use crate::gateway::{FetchError, Gateway, HttpTransport, Transport};

/// Base URL for the random-user API
pub const RANDOM_USER_BASE_URL: &str = "https://randomuser.me/api/";

/// Envelope returned by the API
#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    results: Vec<User>,
}

/// Client for the random-user API
#[derive(Debug)]
pub struct UsersClient<T: Transport = HttpTransport> {
    gateway: Arc<Gateway<T>>,
    base_url: String,
}

impl<T: Transport> UsersClient<T> {
    pub fn new(gateway: Arc<Gateway<T>>) -> Self {
        Self::with_base_url(gateway, RANDOM_USER_BASE_URL)
    }

    pub fn with_base_url(gateway: Arc<Gateway<T>>, base_url: impl Into<String>) -> Self {
        Self {
            gateway,
            base_url: base_url.into(),
        }
    }

    fn users_url(&self, count: u32) -> String {
        format!("{}?results={}", self.base_url, count)
    }

    /// Fetches `count` random users
    pub async fn try_users(&self, count: u32) -> Result<Vec<User>, FetchError> {
        let response: RandomUserResponse = self.gateway.get_json(&self.users_url(count)).await?;
        Ok(response.results)
    }

    /// Fetches `count` random users, or an empty list on failure
    pub async fn users(&self, count: u32) -> Vec<User> {
        or_empty(self.try_users(count).await, "users")
    }
}
