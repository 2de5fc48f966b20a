use clap::{Parser, Subcommand};
use colored::*;
use std::process;
use tracing::{error, warn};

mod cli;

use cli::auth::AuthCommands;
use cli::tasks::{self, TasksCommand};
use taskpad_cli::output::session_header;
use taskpad_cli::{logging, AppContext};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "Taskpad - local to-do list with optional sign-in")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Tasks(TasksCommand),
    /// Sign in, sign out, or show the current session
    #[command(subcommand)]
    Auth(AuthCommands),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        error!("Command failed: {:#}", e);
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    let ctx = AppContext::from_env()?;

    // Header reflects whatever session survived the last run
    let session = match ctx.session.restore_session().await {
        Ok(session) => session,
        Err(e) => {
            warn!("Could not restore session: {}", e);
            None
        }
    };
    println!("{}", session_header(session.as_ref()));
    println!();

    match command {
        Commands::Tasks(command) => tasks::handle_tasks_command(&ctx, command).await,
        Commands::Auth(command) => command.execute(&ctx).await,
    }
}
