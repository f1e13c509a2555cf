//! `transport-service` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`    — bootstrap the database and start the API server.
//! - `init-db`  — create the database file and table, then exit.
//! - `validate` — validate a transport payload JSON file.

mod validate;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "transport-service",
    about = "CRUD API for transport records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct DbArgs {
    #[arg(long, env = "DATABASE_URL", default_value = db::pool::DEFAULT_DATABASE_URL)]
    database_url: String,
    #[arg(long, env = "MAX_CONNECTIONS", default_value_t = db::pool::DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,
}

impl DbArgs {
    fn config(&self) -> db::DbConfig {
        db::DbConfig::new(&self.database_url, self.max_connections)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = api::DEFAULT_BIND)]
        bind: String,
        /// Origin allowed to make credentialed cross-origin requests.
        #[arg(long, env = "ALLOWED_ORIGIN", default_value = api::DEFAULT_ALLOWED_ORIGIN)]
        allowed_origin: String,
        #[command(flatten)]
        db: DbArgs,
    },
    /// Create the database file and `transportes` table if missing.
    InitDb {
        #[command(flatten)]
        db: DbArgs,
    },
    /// Validate a transport payload JSON file.
    Validate {
        /// Path to the payload JSON file.
        path: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, allowed_origin, db: db_args } => {
            info!("Starting API server on {bind}");
            let pool = db::pool::create_pool(&db_args.config())
                .await
                .context("failed to connect to database")?;
            db::pool::ensure_schema(&pool)
                .await
                .context("failed to create schema")?;

            let config = api::ServerConfig { bind, allowed_origin };
            api::serve(&config, pool).await?;
        }
        Command::InitDb { db: db_args } => {
            let pool = db::pool::create_pool(&db_args.config())
                .await
                .context("failed to connect to database")?;
            db::pool::ensure_schema(&pool)
                .await
                .context("failed to create schema")?;
            info!("Database ready at {}", db_args.database_url);
        }
        Command::Validate { path } => {
            let outcome = validate::validate_file(&path)?;
            match &outcome {
                Ok(_) => println!("{}", validate::report(&outcome)),
                Err(_) => {
                    eprintln!("{}", validate::report(&outcome));
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
