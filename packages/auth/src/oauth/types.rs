// ABOUTME: Core type definitions for signed-in sessions
// ABOUTME: Includes the provider user-info payload and the mirrored session

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity fields returned by the provider's user-info endpoint.
///
/// Also the JSON shape stored under the `userInfo` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub picture: String,
}

/// A signed-in session: identity plus the bearer token it was fetched with
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub picture_url: String,
    pub access_token: String,
}

impl Session {
    pub fn new(info: UserInfo, access_token: impl Into<String>) -> Self {
        Self {
            name: info.name,
            email: info.email,
            picture_url: info.picture,
            access_token: access_token.into(),
        }
    }

    /// Identity fields in the stored `userInfo` shape
    pub fn user_info(&self) -> UserInfo {
        UserInfo {
            name: self.name.clone(),
            email: self.email.clone(),
            picture: self.picture_url.clone(),
        }
    }
}

// Keeps the token out of logs
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("picture_url", &self.picture_url)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
