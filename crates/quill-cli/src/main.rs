use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use quill_cli::cli::{Cli, Commands};
use quill_cli::logging;
use quill_config::QuillConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = QuillConfig::resolve_path(cli.config.clone());
    let mut config = QuillConfig::load(config_path.clone())?;
    cli.apply_overrides(&mut config);

    let rust_log = std::env::var("RUST_LOG").ok();
    logging::init(logging::build_filter(
        rust_log.as_deref(),
        cli.level_override(),
        &config.logging.level,
    ));

    match &config_path {
        Some(path) => debug!("Loaded config from {}", path.display()),
        None => debug!("No config file found, using defaults and environment"),
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            info!("Starting quill v{}", env!("CARGO_PKG_VERSION"));
            quill_cli::serve(&config).await
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
