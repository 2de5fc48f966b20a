// ABOUTME: Key-value storage layer for the mirrored session
// ABOUTME: Reads and writes the userToken and userInfo keys as a unit

use std::sync::Arc;

use tracing::{debug, warn};

use super::types::{Session, UserInfo};
use crate::error::AuthResult;
use taskpad_storage::KeyValueStore;

/// Key holding the opaque bearer token
pub const USER_TOKEN_KEY: &str = "userToken";

/// Key holding the JSON-encoded identity fields
pub const USER_INFO_KEY: &str = "userInfo";

/// Session persistence over a key-value store
pub struct SessionStorage {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Write identity fields, then the token.
    ///
    /// If the token write fails, the previous identity fields are put back so
    /// the stored keys never pair one user's identity with another's token.
    pub async fn store_session(&self, session: &Session) -> AuthResult<()> {
        debug!("Storing session for {}", session.email);

        let info = serde_json::to_string(&session.user_info())?;
        let previous_info = self.store.get(USER_INFO_KEY).await?;
        self.store.set(USER_INFO_KEY, &info).await?;

        if let Err(e) = self.store.set(USER_TOKEN_KEY, &session.access_token).await {
            warn!("Failed to store token, rolling back user info: {}", e);
            self.rollback_info(previous_info.as_deref()).await;
            return Err(e.into());
        }

        Ok(())
    }

    async fn rollback_info(&self, previous: Option<&str>) {
        let restored = match previous {
            Some(info) => self.store.set(USER_INFO_KEY, info).await,
            None => self.store.remove(USER_INFO_KEY).await,
        };

        if let Err(e) = restored {
            // Leave at most one key behind so the session reads as absent
            warn!("Failed to roll back user info, dropping stored session: {}", e);
            if let Err(e) = self.store.remove(USER_TOKEN_KEY).await {
                warn!("Failed to remove stored token: {}", e);
            }
        }
    }

    /// The stored session, or `None` unless both keys are present
    pub async fn load_session(&self) -> AuthResult<Option<Session>> {
        let info = self.store.get(USER_INFO_KEY).await?;
        let token = self.store.get(USER_TOKEN_KEY).await?;

        match (info, token) {
            (Some(info), Some(token)) => {
                let info: UserInfo = serde_json::from_str(&info)?;
                debug!("Found stored session for {}", info.email);
                Ok(Some(Session::new(info, token)))
            }
            (None, None) => {
                debug!("No stored session");
                Ok(None)
            }
            (info, _) => {
                warn!(
                    "Ignoring partial stored session (user info present: {})",
                    info.is_some()
                );
                Ok(None)
            }
        }
    }

    /// Remove both keys.
    ///
    /// Both removals are attempted; the first failure, if any, is returned.
    pub async fn clear(&self) -> AuthResult<()> {
        let token_result = self.store.remove(USER_TOKEN_KEY).await;
        let info_result = self.store.remove(USER_INFO_KEY).await;

        token_result?;
        info_result?;
        debug!("Cleared stored session");
        Ok(())
    }
}
