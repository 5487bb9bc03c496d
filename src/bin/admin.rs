//! CLI administration tool for dict-admin.
//!
//! Provides commands for managing API tokens, inspecting dictionary types,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new API token acting as user 1
//! cargo run --bin admin -- token create --name "Back office" --user-id 1
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke "Back office"
//!
//! # List dictionary types
//! cargo run --bin admin -- dict list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for `token create`): must match the server

use dict_admin::application::services::auth_service::hash_token;
use dict_admin::domain::entities::DictTypeFilter;
use dict_admin::domain::repositories::{DictTypeRepository, TokenRepository};
use dict_admin::infrastructure::persistence::{PgDictTypeRepository, PgTokenRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing dict-admin.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Inspect dictionary types
    Dict {
        #[command(subcommand)]
        action: DictAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token
    Create {
        /// Token name (e.g., "Back office", "Code generator")
        #[arg(short, long)]
        name: Option<String>,

        /// User ID recorded as creator/updater of changes made with this token
        #[arg(short, long)]
        user_id: Option<i64>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID to revoke
        name_or_id: String,
    },
}

#[derive(Subcommand)]
enum DictAction {
    /// List all non-deleted dictionary types
    List,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Dict { action } => handle_dict_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgTokenRepository::new(Arc::new(pool.clone())));

    match action {
        TokenAction::Create {
            name,
            user_id,
            token,
            yes,
        } => create_token(repo, name, user_id, token, yes).await?,
        TokenAction::List => list_tokens(repo).await?,
        TokenAction::Revoke { name_or_id } => revoke_token(repo, name_or_id).await?,
    }

    Ok(())
}

/// Creates a new API token with interactive prompts.
///
/// Only the HMAC-SHA256 hash (keyed by `TOKEN_SIGNING_SECRET`) is stored;
/// the raw token is shown once.
async fn create_token(
    repo: Arc<PgTokenRepository>,
    name: Option<String>,
    user_id: Option<i64>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    let signing_secret = std::env::var("TOKEN_SIGNING_SECRET")
        .ok()
        .filter(|s| !s.is_empty())
        .context("TOKEN_SIGNING_SECRET must be set to the value the server uses")?;

    println!("{}", "🔑 Create API Token".bright_blue().bold());
    println!();

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("Back office")
            .interact_text()?,
    };

    let user_id = match user_id {
        Some(id) => id,
        None => Input::new()
            .with_prompt("Acting user ID")
            .default(1_i64)
            .interact_text()?,
    };

    let token_value = match token {
        Some(t) => {
            println!("{}", "⚠️  Using provided token value".yellow());
            t
        }
        None => {
            println!("{}", "✨ Generated new token".green());
            generate_token()
        }
    };

    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!("  Name:    {}", token_name.cyan());
    println!("  User ID: {}", user_id.to_string().cyan());
    println!("  Token:   {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let token_hash = hash_token(&signing_secret, &token_value);

    repo.create_token(&token_name, user_id, &token_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:8000/api/v1/dict/type",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all API tokens with status indicators.
async fn list_tokens(repo: Arc<PgTokenRepository>) -> Result<()> {
    println!("{}", "📋 API Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<28} {:<8} {:<17} {:<17} {:<8}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "User".bright_white().bold(),
        "Created".bright_white().bold(),
        "Last used".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(88).bright_black());

    for token in &tokens {
        let status = if token.revoked_at.is_some() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };

        let last_used = token
            .last_used_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<4} {:<28} {:<8} {:<17} {:<17} {}",
            token.id.to_string().bright_black(),
            token.name.cyan(),
            token.user_id.to_string(),
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            last_used.bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token by name or ID with confirmation prompt.
///
/// Numeric input is looked up as an ID, anything else as an exact name.
async fn revoke_token(repo: Arc<PgTokenRepository>, name_or_id: String) -> Result<()> {
    println!("{}", "🔒 Revoke API Token".bright_blue().bold());
    println!();

    let token = match name_or_id.parse::<i64>() {
        Ok(id) => repo.find_by_id(id).await,
        Err(_) => repo.find_by_name(&name_or_id).await,
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    .context("Token not found")?;

    if token.revoked_at.is_some() {
        println!("{}", "⚠️  This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "✅ Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

async fn handle_dict_action(action: DictAction, pool: &PgPool) -> Result<()> {
    match action {
        DictAction::List => {
            let repo = PgDictTypeRepository::new(Arc::new(pool.clone()));

            println!("{}", "📚 Dictionary Types".bright_blue().bold());
            println!();

            let dict_types = repo
                .list_all(DictTypeFilter::default())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list dictionary types: {}", e))?;

            if dict_types.is_empty() {
                println!("{}", "  No dictionary types found".yellow());
                return Ok(());
            }

            println!(
                "  {:<5} {:<32} {:<32} {:<8}",
                "ID".bright_white().bold(),
                "Type".bright_white().bold(),
                "Name".bright_white().bold(),
                "Status".bright_white().bold()
            );
            println!("  {}", "─".repeat(80).bright_black());

            for dict_type in &dict_types {
                let status = if dict_type.is_enabled() {
                    "NORMAL".green()
                } else {
                    "DISABLED".red()
                };

                println!(
                    "  {:<5} {:<32} {:<32} {}",
                    dict_type.dict_id.to_string().bright_black(),
                    dict_type.dict_type.cyan(),
                    dict_type.dict_name,
                    status
                );
            }

            println!();
            println!(
                "  Total: {}",
                dict_types.len().to_string().bright_white().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Displays dictionary type and token counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (dict_types, disabled): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COUNT(*) FILTER (WHERE status = 1) \
         FROM sys_dict_type WHERE deleted_at IS NULL",
    )
    .fetch_one(pool)
    .await?;

    let deleted: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sys_dict_type WHERE deleted_at IS NOT NULL")
            .fetch_one(pool)
            .await?;

    let tokens_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM api_tokens WHERE revoked_at IS NULL")
            .fetch_one(pool)
            .await?;

    println!(
        "  Dictionary types: {} ({} disabled, {} deleted)",
        dict_types.to_string().bright_green().bold(),
        disabled.to_string().yellow(),
        deleted.to_string().bright_black()
    );
    println!(
        "  Active tokens:    {}",
        tokens_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

/// Generates a 48-character alphanumeric token.
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
