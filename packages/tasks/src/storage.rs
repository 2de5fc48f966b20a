// ABOUTME: Task storage layer using SQLite
// ABOUTME: Lazily opens one shared pool and issues single-statement CRUD against the tasks table

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use super::types::{Task, TaskStatus};
use taskpad_storage::{StorageError, StorageResult};

const CREATE_TASKS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        status TEXT DEFAULT 'pending'
    )
"#;

type PendingOpen = Shared<BoxFuture<'static, Result<SqlitePool, Arc<sqlx::Error>>>>;

enum ConnectionState {
    Closed,
    Opening(PendingOpen),
    Open(SqlitePool),
}

/// Data-access object for the `tasks` table.
///
/// Construct one per process and share it (`Arc<TaskStore>`). The database is
/// not touched until the first operation; concurrent first callers all await
/// the same open attempt, and a failed attempt can be retried.
pub struct TaskStore {
    options: SqliteConnectOptions,
    state: Mutex<ConnectionState>,
    attempts: AtomicUsize,
}

impl TaskStore {
    /// Store backed by the database file at `path`, created on first open
    pub fn new(path: impl AsRef<Path>) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);
        Self::with_options(options)
    }

    pub fn with_options(options: SqliteConnectOptions) -> Self {
        Self {
            options,
            state: Mutex::new(ConnectionState::Closed),
            attempts: AtomicUsize::new(0),
        }
    }

    /// Number of underlying open attempts made so far
    pub fn connection_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn lock_state(&self) -> MutexGuard<'_, ConnectionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the shared pool, opening the database on first use.
    ///
    /// Idempotent. While an open is in flight every caller awaits that same
    /// attempt and receives its result; on failure the in-flight marker is
    /// cleared so the next call starts a fresh attempt.
    pub async fn open(&self) -> StorageResult<SqlitePool> {
        let pending = {
            let mut state = self.lock_state();
            match &*state {
                ConnectionState::Open(pool) => return Ok(pool.clone()),
                ConnectionState::Opening(pending) => pending.clone(),
                ConnectionState::Closed => {
                    self.attempts.fetch_add(1, Ordering::SeqCst);
                    let pending = connect(self.options.clone()).boxed().shared();
                    *state = ConnectionState::Opening(pending.clone());
                    pending
                }
            }
        };

        let result = pending.clone().await;

        let mut state = self.lock_state();
        // Only the attempt we awaited may settle the state
        let settles = matches!(
            &*state,
            ConnectionState::Opening(current) if current.ptr_eq(&pending)
        );
        if settles {
            *state = match &result {
                Ok(pool) => ConnectionState::Open(pool.clone()),
                Err(e) => {
                    warn!("Task database open failed: {}", e);
                    ConnectionState::Closed
                }
            };
        }

        result.map_err(StorageError::Open)
    }

    /// Insert a pending task and return its id
    pub async fn add_task(&self, title: &str, description: Option<&str>) -> StorageResult<i64> {
        let pool = self.open().await?;
        debug!("Inserting task");

        let result = sqlx::query("INSERT INTO tasks (title, description, status) VALUES (?, ?, ?)")
            .bind(title)
            .bind(description)
            .bind(TaskStatus::Pending)
            .execute(&pool)
            .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted task: {}", id);
        Ok(id)
    }

    /// Every task, in rowid order
    pub async fn get_tasks(&self) -> StorageResult<Vec<Task>> {
        let pool = self.open().await?;
        debug!("Fetching all tasks");

        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status FROM tasks ORDER BY id",
        )
        .fetch_all(&pool)
        .await?;

        Ok(tasks)
    }

    /// The task with `id`, or `None` when no such row exists
    pub async fn get_task_by_id(&self, id: i64) -> StorageResult<Option<Task>> {
        let pool = self.open().await?;
        debug!("Fetching task: {}", id);

        let task = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status FROM tasks WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&pool)
        .await?;

        Ok(task)
    }

    /// Overwrite title, description and status of task `id`.
    ///
    /// A missing id is not an error; the returned count is 0 in that case.
    pub async fn update_task(
        &self,
        id: i64,
        title: &str,
        description: Option<&str>,
        status: TaskStatus,
    ) -> StorageResult<u64> {
        let pool = self.open().await?;
        debug!("Updating task: {}", id);

        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, description = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(status)
        .bind(id)
        .execute(&pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete task `id`. Returns 0 when nothing matched.
    pub async fn delete_task(&self, id: i64) -> StorageResult<u64> {
        let pool = self.open().await?;
        debug!("Deleting task: {}", id);

        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&pool)
            .await?;

        Ok(result.rows_affected())
    }
}

async fn connect(options: SqliteConnectOptions) -> Result<SqlitePool, Arc<sqlx::Error>> {
    debug!("Opening task database");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(Arc::new)?;

    sqlx::query(CREATE_TASKS_TABLE)
        .execute(&pool)
        .await
        .map_err(Arc::new)?;

    info!("Task database connection established");
    Ok(pool)
}
