//! Scale Genius practice statistics server.
//!
//! Records chord-quiz practice rounds and serves overall, per-key and
//! high-score statistics over HTTP.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use services::{AppServices, Clock};
use storage::repository::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod http;
mod seed;

/// Scale Genius practice statistics server
#[derive(Parser)]
#[command(name = "scale-genius")]
#[command(about = "Records practice sessions and serves aggregate statistics")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// SQLite database URL or path
    #[arg(
        long,
        global = true,
        env = "SCALE_DB_URL",
        default_value = "sqlite://scale_genius.sqlite3"
    )]
    db: String,

    /// Address the HTTP server listens on
    #[arg(long, global = true, env = "SCALE_BIND", default_value = "0.0.0.0:8001")]
    bind: SocketAddr,

    /// Comma-separated allowed CORS origins (`*` for any)
    #[arg(long, global = true, env = "CORS_ORIGINS", default_value = "*")]
    cors_origins: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API (default)
    Serve,

    /// Append synthetic practice sessions for local demos
    Seed {
        /// Number of sessions to append
        #[arg(short, long, default_value = "20")]
        sessions: u32,

        /// Timestamp of the first session (RFC 3339); defaults to now
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
}

async fn open_storage(raw_url: &str) -> Result<Storage> {
    let db_url = config::normalize_sqlite_url(raw_url);
    config::prepare_sqlite_file(&db_url)?;
    let storage = Storage::sqlite(&db_url)
        .await
        .with_context(|| format!("failed to open database {db_url}"))?;
    info!(db = %db_url, "database ready");
    Ok(storage)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let storage = open_storage(&cli.db).await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let services = AppServices::from_storage(&storage, Clock::system());
            let cors = config::cors_layer(&cli.cors_origins)?;
            let app = http::router(services.stats(), cors);

            let listener = tokio::net::TcpListener::bind(cli.bind)
                .await
                .with_context(|| format!("failed to bind {}", cli.bind))?;
            info!(addr = %cli.bind, "listening");
            http::serve(listener, app).await?;
        }
        Commands::Seed { sessions, now } => {
            let clock = now.map_or_else(Clock::system, Clock::fixed);
            seed::seed_sessions(storage.sessions, clock, sessions).await?;
            info!(sessions, "seeded practice sessions");
        }
    }

    Ok(())
}
