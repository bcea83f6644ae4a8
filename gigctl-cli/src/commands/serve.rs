//! HTTP server command
//!
//! Opens the database, applies the schema, loads fixtures and serves the
//! users, orders and offers routes until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use gigctl_server::db::pool::DEFAULT_DATABASE_URL;
use gigctl_server::{create_pool, init_schema, run_server, seed_fixtures, Fixtures, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "GIGCTL_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Database URL (sqlite::memory: or sqlite://path/to/file.db)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Skip loading the bundled fixtures
    #[arg(long)]
    pub no_seed: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting gigctl server on {}", args.bind);

    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database at {}", args.database_url))?;

    init_schema(&pool)
        .await
        .context("Failed to create database schema")?;

    if args.no_seed {
        tracing::info!(reason = "--no-seed", "fixture seeding skipped");
    } else {
        let fixtures = Fixtures::embedded().context("Bundled fixtures are invalid")?;
        seed_fixtures(&pool, &fixtures)
            .await
            .context("Failed to load fixtures")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
