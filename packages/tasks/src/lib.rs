// ABOUTME: Task management over a single SQLite table
// ABOUTME: Provides the lazily-opened task store and the task record types

pub mod storage;
pub mod types;

pub use storage::*;
pub use types::*;
