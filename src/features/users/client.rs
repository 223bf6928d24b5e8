//! Client side of the user API. `UserDirectory` is the capability the form
//! controller is constructed with, so tests can substitute a scripted double;
//! `HttpUserDirectory` is the real implementation over the shared HTTP helpers.

use crate::{
    app_lib::{AppError, api, config::AppConfig},
    features::users::types::UserRecord,
};
use async_trait::async_trait;

/// Path for both the list and create endpoints.
const USERS_PATH: &str = "/users";

/// Remote user store exposed by the API.
#[async_trait(?Send)]
pub trait UserDirectory {
    /// Fetches all users in server order.
    async fn list(&self) -> Result<Vec<UserRecord>, AppError>;

    /// Creates a new user. Any 2xx response counts as success.
    async fn create(&self, user: &UserRecord) -> Result<(), AppError>;
}

/// `UserDirectory` over the HTTP API at the configured base URL.
pub struct HttpUserDirectory {
    config: AppConfig,
}

impl HttpUserDirectory {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl UserDirectory for HttpUserDirectory {
    async fn list(&self) -> Result<Vec<UserRecord>, AppError> {
        api::get_json(&self.config.api_base_url, USERS_PATH).await
    }

    async fn create(&self, user: &UserRecord) -> Result<(), AppError> {
        api::post_json(&self.config.api_base_url, USERS_PATH, user).await
    }
}
