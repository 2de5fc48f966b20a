// ABOUTME: Session module bridging one-shot sign-in results to local storage
// ABOUTME: Includes the authorization flow seam, identity provider, and session mirror

pub mod flow;
pub mod manager;
pub mod provider;
pub mod storage;
pub mod types;

pub use flow::{AuthorizationFlow, SignInOutcome, TokenFlow};
pub use manager::SessionMirror;
pub use provider::{HttpIdentityProvider, IdentityProvider};
pub use storage::SessionStorage;
pub use types::{Session, UserInfo};
