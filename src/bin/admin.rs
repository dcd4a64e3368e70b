//! CLI administration tool for linkcut.
//!
//! Lists and deletes links and checks the database without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links, newest first
//! cargo run --bin admin -- links list
//!
//! # Delete a link by id
//! cargo run --bin admin -- links delete 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_URL`) and `BASE_URL`.

use linkcut::application::services::{DeleteOutcome, LinkAdminService};
use linkcut::config;
use linkcut::domain::repositories::LinkRepository;
use linkcut::infrastructure::persistence::{SqliteLinkRepository, connect_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing linkcut.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Delete a link by id
    Delete {
        /// Link id as shown by `links list`
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and schema
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = connect_pool(
        &config.database_url,
        config.db_max_connections,
        Duration::from_secs(config.db_connect_timeout),
    )
    .await
    .context("Failed to connect to database")?;

    let repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    repository
        .initialize()
        .await
        .context("Failed to initialize database schema")?;

    let service = LinkAdminService::new(repository);
    let base_url = config.base_url.trim_end_matches('/');

    match cli.command {
        Commands::Links { action } => match action {
            LinkAction::List => list_links(&service, base_url).await?,
            LinkAction::Delete { id, yes } => delete_link(&service, id, yes).await?,
        },
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

/// Prints all links as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID     Short URL                           Full URL
///   ──────────────────────────────────────────────────────────────────────────
///   2      http://localhost:8000/Xy12Ab        https://b.com
///   1      http://localhost:8000/Qw34Er        https://a.com
/// ```
async fn list_links(service: &LinkAdminService, base_url: &str) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<35} {}",
        "ID".bright_white().bold(),
        "Short URL".bright_white().bold(),
        "Full URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        let short_url = format!("{}/{}", base_url, link.short_code);
        println!(
            "  {:<6} {:<35} {}",
            link.id,
            short_url.cyan(),
            link.full_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Deletes a link after confirmation.
async fn delete_link(service: &LinkAdminService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();
    println!("  ID: {}", id.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link? This cannot be undone")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let outcome = service
        .delete_link(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    match outcome {
        DeleteOutcome::Deleted => println!("{}", "✅ Link deleted".green().bold()),
        DeleteOutcome::NotFound => println!("{}", "⚠️  No link with this id".yellow()),
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &LinkAdminService) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            service
                .check_storage()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
