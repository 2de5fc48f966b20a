// ABOUTME: Key-value storage abstraction for small string values
// ABOUTME: Used to mirror the signed-in session across process restarts

mod file;
mod memory;

use async_trait::async_trait;

use crate::StorageResult;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

/// Durable string-to-string storage.
///
/// Each call is independent; there is no multi-key transaction.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key was never set or was removed
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a value. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
