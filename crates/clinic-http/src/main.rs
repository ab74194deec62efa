//! Clinic HTTP server entry point: parse arguments, open the database,
//! serve the API. Everything else lives in the library crates.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use clinic_core::{ClinicService, Database};
use clinic_http::config::HttpConfig;
use clinic_http::{router, AppState};

#[derive(Parser, Debug)]
#[command(name = "clinic-http", about = "HTTP API for the clinic record service")]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// SQLite database file, created on first start
    #[arg(long, default_value = "clinic.db")]
    db_path: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = HttpConfig {
        host: args.host,
        port: args.port,
        db_path: args.db_path,
    };

    let db = Database::open(&config.db_path)
        .with_context(|| format!("opening database at {}", config.db_path.display()))?;
    let state = Arc::new(AppState::new(ClinicService::new(db)));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("binding {}", config.socket_addr()))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
