//! Command-line interface: argument types, command dispatch and output.

pub mod commands;
pub mod display;
pub mod output;
pub mod types;

use anyhow::Result;

pub use types::{Cli, Commands, OutputFormat};

use crate::domain::models::Envelope;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::LoggerImpl;
use commands::CommandContext;

/// Load configuration, install logging and run the selected command
pub async fn run(cli: Cli) -> Result<()> {
    ConfigLoader::load_env_file(cli.env_file.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(host) = cli.host {
        config.api.host = host;
        ConfigLoader::validate(&config)?;
    }

    let _logger = LoggerImpl::init(&config.logging)?;

    let ctx = CommandContext {
        config,
        format: cli.format,
    };

    match cli.command {
        Commands::Token(args) => commands::token::execute(args, &ctx).await,
        Commands::Balance(args) => commands::balance::execute(args, &ctx).await,
    }
}

/// Report an error that escaped the command as a failure envelope
///
/// The process still exits normally; callers read `success`.
pub fn handle_error(err: &anyhow::Error, format: OutputFormat) {
    let message = format!("{err:#}");
    tracing::error!(error = %message, "Command failed");
    output::output(&Envelope::failure(message), format);
}
