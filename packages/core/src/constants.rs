// ABOUTME: Path and environment variable constants
// ABOUTME: Centralized definitions of the Taskpad data directory layout and env var names

use std::env;
use std::path::PathBuf;

// Environment variables
pub const TASKPAD_DATA_DIR: &str = "TASKPAD_DATA_DIR";
pub const TASKPAD_DATABASE_PATH: &str = "TASKPAD_DATABASE_PATH";
pub const TASKPAD_USERINFO_URL: &str = "TASKPAD_USERINFO_URL";
pub const TASKPAD_HTTP_TIMEOUT_SECS: &str = "TASKPAD_HTTP_TIMEOUT_SECS";
pub const TASKPAD_ACCESS_TOKEN: &str = "TASKPAD_ACCESS_TOKEN";

// System Environment Variables
pub const HOME: &str = "HOME";

/// File name of the task database inside the data directory
pub const DATABASE_FILE_NAME: &str = "tasks.db";

/// File name of the key-value session mirror inside the data directory
pub const SESSION_FILE_NAME: &str = "session.json";

/// Default user-info endpoint of the identity provider
pub const DEFAULT_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// Default timeout for identity provider requests
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Get the path to the Taskpad directory (~/.taskpad)
///
/// Returns `None` when no home directory can be determined.
pub fn taskpad_dir() -> Option<PathBuf> {
    // HOME first so tests can redirect it
    if let Ok(home) = env::var(HOME) {
        Some(PathBuf::from(home).join(".taskpad"))
    } else {
        dirs::home_dir().map(|home| home.join(".taskpad"))
    }
}

/// Path of the task database inside `data_dir`
pub fn database_file(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join(DATABASE_FILE_NAME)
}

/// Path of the session mirror inside `data_dir`
pub fn session_file(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}
