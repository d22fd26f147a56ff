//! CLI administration tool for dashboard-router.
//!
//! # Usage
//!
//! ```bash
//! # Generate an access token and the hash to put in ACCESS_TOKEN_HASHES
//! cargo run --bin admin -- token generate
//!
//! # Hash an existing token
//! cargo run --bin admin -- token generate --token "my-token" --hash-only
//!
//! # Show the declared route table
//! cargo run --bin admin -- routes list
//!
//! # Trace how a path resolves, with or without a session
//! cargo run --bin admin -- routes resolve /dashboard --authenticated
//!
//! # Same, as JSON for scripts
//! cargo run --bin admin -- routes resolve /accounts --json
//! ```
//!
//! # Environment Variables
//!
//! - `SESSION_SIGNING_SECRET` (required for `token generate`): HMAC key shared with the server

use dashboard_router::application::route_config::{LOGIN_PATH, dashboard_routes_with_guard};
use dashboard_router::application::services::session_service::{generate_token, hash_secret};
use dashboard_router::application::services::{AuthGuard, RouteTable, SessionService};
use dashboard_router::domain::entities::{Decision, NavigationRequest, RouteTarget};
use dashboard_router::domain::guard::Guard;
use dashboard_router::infrastructure::persistence::InMemorySessionRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing dashboard-router.
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
    /// Manage access tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Inspect the route table
    Routes {
        #[command(subcommand)]
        action: RoutesAction,
    },
}

/// Access token subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Generate an access token and its configured hash
    Generate {
        /// Custom token value (auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Print only the hash
        #[arg(long)]
        hash_only: bool,
    },
}

/// Route table subcommands.
#[derive(Subcommand)]
enum RoutesAction {
    /// List declared routes in match order
    List,

    /// Resolve a path, following redirects
    Resolve {
        /// Requested path, e.g. `/dashboard`
        path: String,

        /// Navigate with a live session
        #[arg(short, long)]
        authenticated: bool,

        /// Print the navigation as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token {
            action: TokenAction::Generate { token, hash_only },
        } => generate(token, hash_only)?,
        Commands::Routes { action } => match action {
            RoutesAction::List => list_routes()?,
            RoutesAction::Resolve {
                path,
                authenticated,
                json,
            } => resolve(&path, authenticated, json).await?,
        },
    }

    Ok(())
}

/// Prints a token and its HMAC under `SESSION_SIGNING_SECRET`.
///
/// The raw token goes to the operator; only the hash goes into
/// `ACCESS_TOKEN_HASHES`.
fn generate(token: Option<String>, hash_only: bool) -> Result<()> {
    let secret = std::env::var("SESSION_SIGNING_SECRET")
        .context("SESSION_SIGNING_SECRET must be set")?;
    if secret.is_empty() {
        anyhow::bail!("SESSION_SIGNING_SECRET must not be empty");
    }

    let token_value = token.unwrap_or_else(generate_token);
    let token_hash = hash_secret(&secret, &token_value);

    if hash_only {
        println!("{token_hash}");
        return Ok(());
    }

    println!("{}", "Access token".bright_blue().bold());
    println!();
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!("  Hash:  {}", token_hash.cyan());
    println!();
    println!(
        "{}",
        "Save the token now; the server only stores the hash."
            .red()
            .bold()
    );
    println!();
    println!("{}", "Add the hash to the server environment:".bright_white());
    println!("  {}={}", "ACCESS_TOKEN_HASHES".bright_cyan(), token_hash);
    println!();

    Ok(())
}

/// Builds the declared table backed by a throwaway session store.
///
/// Returns the table and, when `authenticated`, a live session id.
async fn simulated_table(authenticated: bool) -> Result<(RouteTable, Option<String>)> {
    let secret = generate_token();
    let access_token = generate_token();

    let sessions = Arc::new(SessionService::new(
        Arc::new(InMemorySessionRepository::new()),
        secret.clone(),
        [hash_secret(&secret, &access_token)],
        chrono::Duration::minutes(5),
    ));

    let session = if authenticated {
        let issued = sessions
            .login(&access_token)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to open session: {}", e))?;
        Some(issued.id)
    } else {
        None
    };

    let guard: Arc<dyn Guard> = Arc::new(AuthGuard::new(sessions, LOGIN_PATH));
    let table = dashboard_routes_with_guard(guard).context("Invalid route table")?;

    Ok((table, session))
}

/// Lists the declared routes.
///
/// # Output Format
///
/// ```text
///   #  Path          Target                 Guards
///   0  /             redirect -> /login     0
///   2  /dashboard    view dashboard         1
/// ```
fn list_routes() -> Result<()> {
    let secret = generate_token();
    let sessions = Arc::new(SessionService::new(
        Arc::new(InMemorySessionRepository::new()),
        secret,
        Vec::<String>::new(),
        chrono::Duration::minutes(5),
    ));
    let guard: Arc<dyn Guard> = Arc::new(AuthGuard::new(sessions, LOGIN_PATH));
    let table = dashboard_routes_with_guard(guard).context("Invalid route table")?;

    println!("{}", "Route table".bright_blue().bold());
    println!();
    println!(
        "  {:<3} {:<14} {:<24} {}",
        "#".bright_white().bold(),
        "Path".bright_white().bold(),
        "Target".bright_white().bold(),
        "Guards".bright_white().bold()
    );
    println!("  {}", "-".repeat(50).bright_black());

    for (index, entry) in table.entries().iter().enumerate() {
        let target = match entry.target() {
            RouteTarget::Redirect { to } => format!("redirect -> /{to}"),
            RouteTarget::View(view) => format!("view {view}"),
        };
        println!(
            "  {:<3} {:<14} {:<24} {}",
            index.to_string().bright_black(),
            format!("/{}", entry.path()).cyan(),
            target,
            entry.guards().len()
        );
    }

    println!();
    println!(
        "  Redirect limit: {}",
        table.redirect_limit().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Resolves `path` and prints the redirect chain and final decision.
///
/// # JSON Output
///
/// ```text
/// {"chain":["","login"],"decision":{"kind":"activate","target":"login"}}
/// ```
async fn resolve(path: &str, authenticated: bool, json: bool) -> Result<()> {
    let (table, session) = simulated_table(authenticated).await?;

    let request = NavigationRequest::new(path).with_session(session);
    let navigation = table
        .navigate(&request)
        .await
        .map_err(|e| anyhow::anyhow!("Navigation failed: {}", e))?;

    if json {
        println!(
            "{}",
            serde_json::to_string(&navigation).context("Failed to encode navigation")?
        );
        return Ok(());
    }

    let chain = navigation
        .chain
        .iter()
        .map(|p| format!("/{p}"))
        .collect::<Vec<_>>()
        .join(" -> ");

    println!("{}", "Navigation".bright_blue().bold());
    println!();
    println!(
        "  Session: {}",
        if authenticated {
            "authenticated".green()
        } else {
            "anonymous".yellow()
        }
    );
    println!("  Chain:   {}", chain.cyan());

    let outcome = match &navigation.decision {
        Decision::Activate(view) => format!("activate {view}").green(),
        Decision::Denied(fallback) => format!("denied, go to /{fallback}").red(),
        Decision::NotFound => "not found".yellow(),
        Decision::Redirect(to) => format!("redirect to /{to}").normal(),
    };
    println!("  Result:  {}", outcome.bold());
    println!();

    Ok(())
}
