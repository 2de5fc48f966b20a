use pretty_assertions::assert_eq;

use crate::output::{session_header, status_label, task_details, task_table, truncate};
use taskpad_auth::{Session, UserInfo};
use taskpad_tasks::{Task, TaskStatus};

fn create_task(id: i64, title: &str, description: Option<&str>, status: TaskStatus) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: description.map(str::to_string),
        status,
    }
}

#[test]
fn test_truncate_short_text_unchanged() {
    assert_eq!(truncate("Buy milk", 40), "Buy milk");
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_long_text() {
    assert_eq!(truncate("abcdefghij", 5), "abcd…");
    assert_eq!(truncate("ééééééé", 3), "éé…");
}

#[test]
fn test_status_labels() {
    assert_eq!(status_label(TaskStatus::Pending), "○ pending");
    assert_eq!(status_label(TaskStatus::Completed), "✓ completed");
}

#[test]
fn test_task_table_rows() {
    let tasks = vec![
        create_task(1, "Buy milk", Some(""), TaskStatus::Pending),
        create_task(2, "Call mom", Some("Sunday"), TaskStatus::Completed),
    ];
    let refs: Vec<&Task> = tasks.iter().collect();

    let table = task_table(&refs);
    assert_eq!(table.row_iter().count(), 2);

    let rendered = table.to_string();
    assert!(rendered.contains("Buy milk"));
    assert!(rendered.contains("Sunday"));
    assert!(rendered.contains("✓ completed"));
}

#[test]
fn test_task_details_without_description() {
    let task = create_task(7, "Water plants", None, TaskStatus::Pending);
    let details = task_details(&task);

    assert!(details.contains("ID:          7"));
    assert!(details.contains("Description: —"));
}

#[test]
fn test_session_header() {
    colored::control::set_override(false);

    assert_eq!(session_header(None), "Not signed in");

    let session = Session::new(
        UserInfo {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            picture: "https://example.com/a.png".to_string(),
        },
        "token",
    );
    assert_eq!(
        session_header(Some(&session)),
        "Signed in as Ada (ada@example.com)"
    );
}
