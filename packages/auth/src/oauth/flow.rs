// ABOUTME: Authorization flow seam for one-shot sign-in
// ABOUTME: A flow completes once with a bearer token, a cancellation, or a failure

use async_trait::async_trait;

use taskpad_core::constants::TASKPAD_ACCESS_TOKEN;

/// Result of a single authorization attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    Success { access_token: String },
    Cancelled,
    Failed(String),
}

/// Something that can obtain a bearer token from the identity provider.
///
/// Redirect handling and token exchange live behind this trait.
#[async_trait]
pub trait AuthorizationFlow: Send + Sync {
    async fn authorize(&self) -> SignInOutcome;
}

/// Flow that completes with a token obtained out of band
#[derive(Debug, Clone, Default)]
pub struct TokenFlow {
    token: Option<String>,
}

impl TokenFlow {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Token from `TASKPAD_ACCESS_TOKEN`, if set
    pub fn from_env() -> Self {
        Self::new(std::env::var(TASKPAD_ACCESS_TOKEN).ok())
    }
}

#[async_trait]
impl AuthorizationFlow for TokenFlow {
    async fn authorize(&self) -> SignInOutcome {
        match self.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => SignInOutcome::Success {
                access_token: token.to_string(),
            },
            _ => SignInOutcome::Cancelled,
        }
    }
}
