//! Quill command-line entry point: argument parsing, logging setup, and the
//! serve command that wires the SurrealDB store into the HTTP server.

pub mod cli;
pub mod logging;

use anyhow::{Context, Result};
use quill_config::QuillConfig;
use quill_web::AppState;

/// Open the configured store and serve until a shutdown signal arrives
pub async fn serve(config: &QuillConfig) -> Result<()> {
    let store = quill_surrealdb::open_note_store(&config.storage)
        .await
        .context("Failed to open note store")?;

    quill_web::start_server(&config.server, AppState::new(store))
        .await
        .context("Web server failed")?;

    tracing::info!("Closing database connection");
    Ok(())
}
