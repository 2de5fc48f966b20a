// ABOUTME: Application context constructed once at startup
// ABOUTME: Owns the shared task store and session mirror handed to every command

use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use taskpad_auth::{HttpIdentityProvider, SessionMirror};
use taskpad_core::Config;
use taskpad_storage::FileKeyValueStore;
use taskpad_tasks::TaskStore;

/// Shared state for command handlers
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub tasks: Arc<TaskStore>,
    pub session: Arc<SessionMirror>,
}

impl AppContext {
    /// Build the context from environment configuration
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::from_env().context("Invalid configuration")?;
        Self::from_config(config)
    }

    /// Build the context, creating the data directory if needed.
    ///
    /// The database itself is not opened here; the task store opens it on
    /// first use.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.data_dir).with_context(|| {
            format!(
                "Failed to create data directory {}",
                config.data_dir.display()
            )
        })?;
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }

        debug!("Using database {}", config.database_path.display());

        let tasks = Arc::new(TaskStore::new(&config.database_path));
        let provider = HttpIdentityProvider::new(config.userinfo_url.clone(), config.http_timeout)
            .context("Failed to build identity provider client")?;
        let session = Arc::new(SessionMirror::new(
            Arc::new(FileKeyValueStore::new(&config.session_path)),
            Arc::new(provider),
        ));

        Ok(Self {
            config,
            tasks,
            session,
        })
    }
}
