// ABOUTME: CLI commands for listing, creating, editing, and deleting tasks
// ABOUTME: Each mutation is followed by a reload from the store rather than local patching

use anyhow::{anyhow, bail};
use clap::Subcommand;
use colored::*;
use inquire::{Confirm, Text};

use taskpad_cli::output::{task_details, task_table};
use taskpad_cli::AppContext;
use taskpad_core::{validate_task_input, ValidationError};
use taskpad_tasks::{Task, TaskFilter, TaskStatus};

#[derive(Subcommand)]
pub enum TasksCommand {
    /// Add a new task
    Add {
        /// Task title (prompted for when omitted)
        title: Option<String>,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List tasks
    List {
        /// Which tasks to show (all, pending, completed)
        #[arg(short, long, default_value = "all")]
        status: TaskFilter,
    },
    /// Show one task
    Show {
        /// Task ID
        id: i64,
    },
    /// Edit a task; fields not given keep their current values
    Edit {
        /// Task ID
        id: i64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long, conflicts_with = "clear_description")]
        description: Option<String>,
        /// Remove the description
        #[arg(long)]
        clear_description: bool,
        /// New status (pending, completed)
        #[arg(short, long)]
        status: Option<TaskStatus>,
    },
    /// Flip a task between pending and completed
    Toggle {
        /// Task ID
        id: i64,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_tasks_command(ctx: &AppContext, command: TasksCommand) -> anyhow::Result<()> {
    match command {
        TasksCommand::Add { title, description } => add_task(ctx, title, description).await,
        TasksCommand::List { status } => list_tasks(ctx, status).await,
        TasksCommand::Show { id } => show_task(ctx, id).await,
        TasksCommand::Edit {
            id,
            title,
            description,
            clear_description,
            status,
        } => edit_task(ctx, id, title, description, clear_description, status).await,
        TasksCommand::Toggle { id } => toggle_task(ctx, id).await,
        TasksCommand::Delete { id, yes } => delete_task(ctx, id, yes).await,
    }
}

fn ensure_valid(title: &str, description: Option<&str>) -> anyhow::Result<()> {
    let errors = validate_task_input(title, description);
    if errors.is_empty() {
        return Ok(());
    }
    for ValidationError { field, message } in &errors {
        eprintln!("{} {}: {}", "✗".red().bold(), field, message);
    }
    bail!("Task input is invalid")
}

async fn add_task(
    ctx: &AppContext,
    title: Option<String>,
    description: Option<String>,
) -> anyhow::Result<()> {
    let title = match title {
        Some(t) => t,
        None => Text::new("Title:").prompt()?,
    };
    let description = description.filter(|d| !d.is_empty());

    ensure_valid(&title, description.as_deref())?;

    let id = ctx.tasks.add_task(&title, description.as_deref()).await?;
    println!("{} Added task {}", "✓".green().bold(), id.to_string().cyan());

    list_tasks(ctx, TaskFilter::All).await
}

async fn list_tasks(ctx: &AppContext, filter: TaskFilter) -> anyhow::Result<()> {
    let tasks = ctx.tasks.get_tasks().await?;
    let visible = filter.apply(&tasks);

    if visible.is_empty() {
        println!("{}", "No tasks found".yellow());
        if tasks.is_empty() {
            println!("{}", "Use 'taskpad add' to create your first task".dimmed());
        }
        return Ok(());
    }

    println!("{}", task_table(&visible));
    println!(
        "Showing {} of {} tasks",
        visible.len().to_string().cyan(),
        tasks.len()
    );
    Ok(())
}

async fn show_task(ctx: &AppContext, id: i64) -> anyhow::Result<()> {
    match ctx.tasks.get_task_by_id(id).await? {
        Some(task) => println!("{}", task_details(&task)),
        None => println!("{}", format!("Task {} not found", id).yellow()),
    }
    Ok(())
}

async fn load_task(ctx: &AppContext, id: i64) -> anyhow::Result<Task> {
    ctx.tasks
        .get_task_by_id(id)
        .await?
        .ok_or_else(|| anyhow!("Task {} not found", id))
}

async fn edit_task(
    ctx: &AppContext,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    clear_description: bool,
    status: Option<TaskStatus>,
) -> anyhow::Result<()> {
    // Prefill from the stored row, then overwrite the whole row
    let task = load_task(ctx, id).await?;
    let title = title.unwrap_or(task.title);
    let description = if clear_description {
        None
    } else {
        description.or(task.description)
    };
    let status = status.unwrap_or(task.status);

    ensure_valid(&title, description.as_deref())?;

    let affected = ctx
        .tasks
        .update_task(id, &title, description.as_deref(), status)
        .await?;
    report_write(id, affected, "Updated");

    show_task(ctx, id).await
}

async fn toggle_task(ctx: &AppContext, id: i64) -> anyhow::Result<()> {
    let task = load_task(ctx, id).await?;
    let affected = ctx
        .tasks
        .update_task(
            id,
            &task.title,
            task.description.as_deref(),
            task.status.toggled(),
        )
        .await?;
    report_write(id, affected, "Toggled");

    list_tasks(ctx, TaskFilter::All).await
}

async fn delete_task(ctx: &AppContext, id: i64, yes: bool) -> anyhow::Result<()> {
    if !yes {
        let confirmed = Confirm::new(&format!("Delete task {}?", id))
            .with_default(false)
            .prompt()?;
        if !confirmed {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let affected = ctx.tasks.delete_task(id).await?;
    report_write(id, affected, "Deleted");

    list_tasks(ctx, TaskFilter::All).await
}

/// Report an update/delete; zero rows means the task vanished in between
fn report_write(id: i64, affected: u64, verb: &str) {
    if affected == 0 {
        println!("{}", format!("Task {} not found; nothing changed", id).yellow());
    } else {
        println!("{} {} task {}", "✓".green().bold(), verb, id.to_string().cyan());
    }
}
