// ABOUTME: Identity provider client for fetching user info with a bearer token
// ABOUTME: Any non-success status, transport failure, or malformed body is a sign-in failure

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use tracing::{debug, error};

use super::types::UserInfo;
use crate::error::{AuthError, AuthResult};
use taskpad_core::constants::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_USERINFO_URL};

/// Source of identity fields for an access token
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn fetch_user_info(&self, access_token: &str) -> AuthResult<UserInfo>;
}

/// Identity provider reached over HTTP
pub struct HttpIdentityProvider {
    client: Client,
    userinfo_url: String,
}

impl HttpIdentityProvider {
    pub fn new(userinfo_url: impl Into<String>, timeout: Duration) -> AuthResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            userinfo_url: userinfo_url.into(),
        })
    }

    /// Provider for the Google user-info endpoint
    pub fn google() -> AuthResult<Self> {
        Self::new(
            DEFAULT_USERINFO_URL,
            Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        )
    }

    pub fn userinfo_url(&self) -> &str {
        &self.userinfo_url
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn fetch_user_info(&self, access_token: &str) -> AuthResult<UserInfo> {
        debug!("Fetching user info from {}", self.userinfo_url);

        let response = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AuthError::Network(format!("User info request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            // Only the status is logged; the body may echo credentials
            error!("User info request failed with status {}", status);
            return Err(AuthError::Provider(format!(
                "User info request failed with status {}",
                status
            )));
        }

        let info: UserInfo = response.json().await.map_err(|e| {
            AuthError::Provider(format!("Failed to parse user info response: {}", e))
        })?;

        debug!("Fetched user info for {}", info.email);
        Ok(info)
    }
}
