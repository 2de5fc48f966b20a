// ABOUTME: CLI commands for signing in and out
// ABOUTME: Login completes with a token supplied out of band; the session is mirrored locally

use clap::Subcommand;
use colored::*;

use taskpad_auth::TokenFlow;
use taskpad_cli::AppContext;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Sign in with an access token from the identity provider
    Login {
        /// Access token (defaults to TASKPAD_ACCESS_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in identity
    Whoami,
}

impl AuthCommands {
    pub async fn execute(&self, ctx: &AppContext) -> anyhow::Result<()> {
        match self {
            AuthCommands::Login { token } => login_command(ctx, token.clone()).await,
            AuthCommands::Logout => logout_command(ctx).await,
            AuthCommands::Whoami => whoami_command(ctx).await,
        }
    }
}

async fn login_command(ctx: &AppContext, token: Option<String>) -> anyhow::Result<()> {
    let flow = match token {
        Some(token) => TokenFlow::new(Some(token)),
        None => TokenFlow::from_env(),
    };

    match ctx.session.sign_in(&flow).await? {
        Some(session) => println!(
            "{} Signed in as {} ({})",
            "✓".green().bold(),
            session.name.bold(),
            session.email
        ),
        None => println!(
            "{}",
            "Sign-in cancelled: pass --token or set TASKPAD_ACCESS_TOKEN".yellow()
        ),
    }
    Ok(())
}

async fn logout_command(ctx: &AppContext) -> anyhow::Result<()> {
    ctx.session.sign_out().await?;
    println!("{} Signed out", "✓".green().bold());
    Ok(())
}

async fn whoami_command(ctx: &AppContext) -> anyhow::Result<()> {
    match ctx.session.current().await {
        Some(session) => {
            println!("Name:    {}", session.name);
            println!("Email:   {}", session.email);
            println!("Picture: {}", session.picture_url);
        }
        None => println!("{}", "Not signed in".dimmed()),
    }
    Ok(())
}
