// ABOUTME: Taskpad authentication library mirroring sign-in sessions
// ABOUTME: Fetches identity from the provider and keeps it in local key-value storage

pub mod error;
pub mod oauth;

// Re-export main types
pub use error::{AuthError, AuthResult};
pub use oauth::{
    AuthorizationFlow, HttpIdentityProvider, IdentityProvider, Session, SessionMirror,
    SessionStorage, SignInOutcome, TokenFlow, UserInfo,
};
