// ABOUTME: Environment-driven configuration for Taskpad
// ABOUTME: Resolves data paths, the identity provider endpoint, and HTTP timeouts

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::constants::{
    self, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_USERINFO_URL, TASKPAD_DATABASE_PATH,
    TASKPAD_DATA_DIR, TASKPAD_HTTP_TIMEOUT_SECS, TASKPAD_USERINFO_URL,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine home directory; set TASKPAD_DATA_DIR")]
    NoDataDir,
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(#[from] ParseIntError),
    #[error("Timeout must be greater than zero")]
    ZeroTimeout,
    #[error("Invalid user-info URL: {0}")]
    InvalidUserInfoUrl(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub database_path: PathBuf,
    pub session_path: PathBuf,
    pub userinfo_url: String,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = match env::var(TASKPAD_DATA_DIR) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => constants::taskpad_dir().ok_or(ConfigError::NoDataDir)?,
        };

        let database_path = env::var(TASKPAD_DATABASE_PATH)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| constants::database_file(&data_dir));

        let session_path = constants::session_file(&data_dir);

        let userinfo_url =
            env::var(TASKPAD_USERINFO_URL).unwrap_or_else(|_| DEFAULT_USERINFO_URL.to_string());
        if !(userinfo_url.starts_with("https://") || userinfo_url.starts_with("http://")) {
            return Err(ConfigError::InvalidUserInfoUrl(userinfo_url));
        }

        let timeout_secs = match env::var(TASKPAD_HTTP_TIMEOUT_SECS) {
            Ok(raw) => raw.trim().parse::<u64>()?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Config {
            data_dir,
            database_path,
            session_path,
            userinfo_url,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
