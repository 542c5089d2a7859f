//! CLI administration tool for tunnel-resolver.
//!
//! Runs checks and lookups against the configured store without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check the configured store
//! cargo run --bin admin -- check
//!
//! # Resolve a query the same way the HTTP endpoint does
//! cargo run --bin admin -- lookup demo
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`tunnel_resolver::config`]. `RUST_LOG` and
//! `LOG_FORMAT` control diagnostics, which are written to stderr.

use tunnel_resolver::application::services::ResolverService;
use tunnel_resolver::config;
use tunnel_resolver::error::AppError;
use tunnel_resolver::logging::init_tracing;
use tunnel_resolver::server::connect_store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for inspecting tunnel-resolver stores.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the configured store connection
    Check,

    /// Resolve a query to its proxy URL
    Lookup {
        /// Full or partial tunnel name
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    // Logs go to stderr so stdout carries only command output
    init_tracing(&config, std::io::stderr)?;

    let store = connect_store(&config).await?;
    let service = ResolverService::new(store.repository.clone());

    let outcome = match cli.command {
        Commands::Check => handle_check(&service).await,
        Commands::Lookup { query } => handle_lookup(&service, &query).await,
    };

    store.close().await;
    outcome
}

async fn handle_check(service: &ResolverService) -> Result<()> {
    println!(
        "{}",
        format!("🔍 Checking {} store...", service.backend()).bright_blue()
    );

    if service.store_healthy().await {
        println!("{}", "✅ Store connection OK".green().bold());
        Ok(())
    } else {
        println!("{}", "❌ Store unreachable".red().bold());
        anyhow::bail!("{} store health check failed", service.backend())
    }
}

/// Prints the resolved URL or the classified failure.
async fn handle_lookup(service: &ResolverService, query: &str) -> Result<()> {
    match service.resolve(query).await {
        Ok(url) => {
            println!("  Query: {}", query.cyan());
            println!("  URL:   {}", url.bright_green().bold());
            Ok(())
        }
        Err(e) => {
            let label = match e {
                AppError::NotFound { .. } => "not found".yellow(),
                AppError::Unavailable { .. } => "maintenance".yellow(),
                AppError::Validation { .. } | AppError::Internal { .. } => "error".red(),
            };
            println!("  Query:  {}", query.cyan());
            println!("  Result: {} ({})", label.bold(), e.message());
            Err(e.into())
        }
    }
}
