// ABOUTME: Terminal rendering for tasks and the session header
// ABOUTME: Builds comfy-table tables and colored one-line summaries

use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use taskpad_auth::Session;
use taskpad_tasks::{Task, TaskStatus};

/// Header line shown before every command
pub fn session_header(session: Option<&Session>) -> String {
    match session {
        Some(session) => format!(
            "{} {} ({})",
            "Signed in as".green(),
            session.name.bold(),
            session.email
        ),
        None => "Not signed in".dimmed().to_string(),
    }
}

pub fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "○ pending",
        TaskStatus::Completed => "✓ completed",
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn task_table(tasks: &[&Task]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["ID", "Title", "Status", "Description"]);

    for task in tasks {
        let description = match task.description.as_deref() {
            Some(d) if !d.is_empty() => truncate(d, 40),
            _ => "—".to_string(),
        };

        table.add_row(vec![
            task.id.to_string(),
            truncate(&task.title, 40),
            status_label(task.status).to_string(),
            description,
        ]);
    }

    table
}

/// Multi-line detail view of one task
pub fn task_details(task: &Task) -> String {
    let description = match task.description.as_deref() {
        Some(d) if !d.is_empty() => d,
        _ => "—",
    };
    format!(
        "ID:          {}\nTitle:       {}\nStatus:      {}\nDescription: {}",
        task.id,
        task.title,
        status_label(task.status),
        description
    )
}
