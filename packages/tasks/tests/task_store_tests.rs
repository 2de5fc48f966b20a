// ABOUTME: Integration tests for the SQLite task store
// ABOUTME: Tests CRUD semantics, missing-id no-ops, and the lazy shared open guard

use std::sync::Arc;

use futures::future::join_all;
use tempfile::TempDir;

use taskpad_storage::StorageError;
use taskpad_tasks::{Task, TaskFilter, TaskStatus, TaskStore};

/// Helper to create a store over a fresh database file
fn setup_store() -> (TaskStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = TaskStore::new(temp_dir.path().join("tasks.db"));
    (store, temp_dir)
}

#[tokio::test]
async fn test_store_is_lazy() {
    let (store, temp_dir) = setup_store();

    assert_eq!(store.connection_attempts(), 0);
    assert!(!temp_dir.path().join("tasks.db").exists());

    store.open().await.unwrap();
    assert_eq!(store.connection_attempts(), 1);
    assert!(temp_dir.path().join("tasks.db").exists());
}

#[tokio::test]
async fn test_open_is_idempotent() {
    let (store, _temp_dir) = setup_store();

    store.open().await.unwrap();
    store.open().await.unwrap();
    store.get_tasks().await.unwrap();

    assert_eq!(store.connection_attempts(), 1);
}

#[tokio::test]
async fn test_concurrent_open_shares_one_attempt() {
    let (store, _temp_dir) = setup_store();

    let results = join_all((0..8).map(|_| store.open())).await;

    assert_eq!(store.connection_attempts(), 1);
    for result in results {
        let pool = result.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}

#[tokio::test]
async fn test_concurrent_open_across_tasks() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(TaskStore::new(temp_dir.path().join("tasks.db")));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move { store.add_task(&format!("task {}", i), None).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.connection_attempts(), 1);
    assert_eq!(store.get_tasks().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_failed_open_propagates_and_can_retry() {
    let temp_dir = TempDir::new().unwrap();
    let db_dir = temp_dir.path().join("not-yet-created");
    let store = TaskStore::new(db_dir.join("tasks.db"));

    // Every caller awaiting the failing attempt sees the failure
    let results = join_all((0..3).map(|_| store.open())).await;
    assert_eq!(store.connection_attempts(), 1);
    for result in results {
        assert!(matches!(result, Err(StorageError::Open(_))));
    }

    // Operations surface the same failure kind
    let result = store.get_tasks().await;
    assert!(matches!(result, Err(StorageError::Open(_))));
    assert_eq!(store.connection_attempts(), 2);

    // Once the directory exists a new attempt succeeds
    std::fs::create_dir_all(&db_dir).unwrap();
    store.open().await.unwrap();
    assert_eq!(store.connection_attempts(), 3);

    store.add_task("after retry", None).await.unwrap();
    assert_eq!(store.get_tasks().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_task_starts_pending() {
    let (store, _temp_dir) = setup_store();

    let before = store.get_tasks().await.unwrap().len();
    let id = store
        .add_task("Write report", Some("Quarterly numbers"))
        .await
        .unwrap();
    let tasks = store.get_tasks().await.unwrap();

    assert_eq!(tasks.len(), before + 1);
    assert_eq!(
        tasks.last().unwrap(),
        &Task {
            id,
            title: "Write report".to_string(),
            description: Some("Quarterly numbers".to_string()),
            status: TaskStatus::Pending,
        }
    );
}

#[tokio::test]
async fn test_add_task_without_description() {
    let (store, _temp_dir) = setup_store();

    let id = store.add_task("No details", None).await.unwrap();
    let task = store.get_task_by_id(id).await.unwrap().unwrap();

    assert_eq!(task.description, None);
    assert_eq!(task.status, TaskStatus::Pending);
}

#[tokio::test]
async fn test_get_tasks_in_insertion_order() {
    let (store, _temp_dir) = setup_store();

    let first = store.add_task("first", None).await.unwrap();
    let second = store.add_task("second", None).await.unwrap();
    let third = store.add_task("third", None).await.unwrap();

    let ids: Vec<i64> = store
        .get_tasks()
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[tokio::test]
async fn test_get_missing_task_is_none() {
    let (store, _temp_dir) = setup_store();

    store.add_task("exists", None).await.unwrap();

    assert_eq!(store.get_task_by_id(9999).await.unwrap(), None);
    assert_eq!(store.get_task_by_id(-1).await.unwrap(), None);
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let (store, _temp_dir) = setup_store();

    let id = store
        .add_task("Original", Some("Original description"))
        .await
        .unwrap();

    let affected = store
        .update_task(id, "Renamed", None, TaskStatus::Completed)
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let task = store.get_task_by_id(id).await.unwrap().unwrap();
    assert_eq!(task.title, "Renamed");
    // Full overwrite: the old description is not merged back in
    assert_eq!(task.description, None);
    assert_eq!(task.status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_update_missing_id_is_noop() {
    let (store, _temp_dir) = setup_store();

    store.add_task("keep me", Some("as is")).await.unwrap();
    let before = store.get_tasks().await.unwrap();

    let affected = store
        .update_task(4242, "ghost", Some("ghost"), TaskStatus::Completed)
        .await
        .unwrap();

    assert_eq!(affected, 0);
    assert_eq!(store.get_tasks().await.unwrap(), before);
}

#[tokio::test]
async fn test_delete_removes_exactly_one_row() {
    let (store, _temp_dir) = setup_store();

    let keep = store.add_task("keep", None).await.unwrap();
    let remove = store.add_task("remove", None).await.unwrap();

    let affected = store.delete_task(remove).await.unwrap();
    assert_eq!(affected, 1);

    assert_eq!(store.get_task_by_id(remove).await.unwrap(), None);
    let tasks = store.get_tasks().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, keep);
}

#[tokio::test]
async fn test_delete_missing_id_is_noop() {
    let (store, _temp_dir) = setup_store();

    store.add_task("keep", None).await.unwrap();
    let before = store.get_tasks().await.unwrap();

    assert_eq!(store.delete_task(777).await.unwrap(), 0);
    assert_eq!(store.get_tasks().await.unwrap(), before);
}

#[tokio::test]
async fn test_ids_are_never_reused() {
    let (store, _temp_dir) = setup_store();

    store.add_task("one", None).await.unwrap();
    let two = store.add_task("two", None).await.unwrap();
    store.delete_task(two).await.unwrap();

    let three = store.add_task("three", None).await.unwrap();
    assert!(three > two);
}

#[tokio::test]
async fn test_rows_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.db");

    let id = {
        let store = TaskStore::new(&path);
        store.add_task("persisted", Some("on disk")).await.unwrap()
    };

    let reopened = TaskStore::new(&path);
    let task = reopened.get_task_by_id(id).await.unwrap().unwrap();
    assert_eq!(task.title, "persisted");
    assert_eq!(task.description.as_deref(), Some("on disk"));
}

#[tokio::test]
async fn test_status_stored_as_lowercase_text() {
    let (store, _temp_dir) = setup_store();

    let id = store.add_task("check column", None).await.unwrap();
    store
        .update_task(id, "check column", None, TaskStatus::Completed)
        .await
        .unwrap();

    let pool = store.open().await.unwrap();
    let raw: String = sqlx::query_scalar("SELECT status FROM tasks WHERE id = ?")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(raw, "completed");
}

#[tokio::test]
async fn test_buy_milk_scenario() {
    let (store, _temp_dir) = setup_store();

    let id = store.add_task("Buy milk", Some("")).await.unwrap();

    let tasks = store.get_tasks().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Buy milk");
    assert_eq!(tasks[0].status, TaskStatus::Pending);

    // Toggle via full-row update, then reload
    let task = store.get_task_by_id(id).await.unwrap().unwrap();
    store
        .update_task(
            id,
            &task.title,
            task.description.as_deref(),
            task.status.toggled(),
        )
        .await
        .unwrap();

    let tasks = store.get_tasks().await.unwrap();
    assert_eq!(TaskFilter::Completed.apply(&tasks).len(), 1);
    assert_eq!(TaskFilter::Completed.apply(&tasks)[0].title, "Buy milk");
    assert!(TaskFilter::Pending.apply(&tasks).is_empty());

    store.delete_task(id).await.unwrap();
    assert!(store.get_tasks().await.unwrap().is_empty());
}
