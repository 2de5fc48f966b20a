// ABOUTME: Data layer shared by Taskpad packages
// ABOUTME: Storage error type plus key-value backends for the session mirror

pub mod error;
pub mod kv;

pub use error::{StorageError, StorageResult};
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
