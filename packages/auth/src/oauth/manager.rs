// ABOUTME: Session mirror orchestrating sign-in, restore, and sign-out
// ABOUTME: Keeps the in-memory session and its key-value mirror in step

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::{
    error::{AuthError, AuthResult},
    oauth::{
        flow::{AuthorizationFlow, SignInOutcome},
        provider::IdentityProvider,
        storage::SessionStorage,
        types::Session,
    },
};
use taskpad_storage::KeyValueStore;

/// Bridge between one-shot sign-in results and durable local storage.
///
/// The in-memory session is either fully present or absent. It is only
/// replaced after the identity fetch and both storage writes succeed.
pub struct SessionMirror {
    storage: SessionStorage,
    provider: Arc<dyn IdentityProvider>,
    current: RwLock<Option<Session>>,
}

impl SessionMirror {
    pub fn new(store: Arc<dyn KeyValueStore>, provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            storage: SessionStorage::new(store),
            provider,
            current: RwLock::new(None),
        }
    }

    /// The in-memory session, if signed in
    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Run an authorization flow and complete sign-in on success.
    ///
    /// A cancelled flow returns `Ok(None)` and changes nothing.
    pub async fn sign_in(&self, flow: &dyn AuthorizationFlow) -> AuthResult<Option<Session>> {
        match flow.authorize().await {
            SignInOutcome::Success { access_token } => {
                self.complete_sign_in(&access_token).await.map(Some)
            }
            SignInOutcome::Cancelled => {
                info!("Sign-in cancelled");
                Ok(None)
            }
            SignInOutcome::Failed(reason) => {
                error!("Sign-in failed: {}", reason);
                Err(AuthError::OAuthFailed(reason))
            }
        }
    }

    /// Fetch identity for `access_token`, mirror it to storage, and make it current.
    ///
    /// Not retried. On failure memory keeps its previous state and storage
    /// holds either the previous session or none.
    pub async fn complete_sign_in(&self, access_token: &str) -> AuthResult<Session> {
        let user_info = self.provider.fetch_user_info(access_token).await.map_err(|e| {
            error!("Failed to fetch user info: {}", e);
            e
        })?;

        let session = Session::new(user_info, access_token);
        self.storage.store_session(&session).await?;
        *self.current.write().await = Some(session.clone());

        info!("Signed in as {}", session.email);
        Ok(session)
    }

    /// Rehydrate the in-memory session from storage.
    ///
    /// Absence is not an error. The stored token is not validated.
    pub async fn restore_session(&self) -> AuthResult<Option<Session>> {
        let session = self.storage.load_session().await?;
        if let Some(session) = &session {
            info!("Restored session for {}", session.email);
        }
        *self.current.write().await = session.clone();
        Ok(session)
    }

    /// Clear stored keys and in-memory state.
    ///
    /// The in-memory session is cleared even when a storage removal fails.
    pub async fn sign_out(&self) -> AuthResult<()> {
        let result = self.storage.clear().await;
        *self.current.write().await = None;

        match &result {
            Ok(()) => info!("Signed out"),
            Err(e) => error!("Failed to clear stored session: {}", e),
        }
        result
    }
}
