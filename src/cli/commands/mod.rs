//! CLI command implementations.

pub mod balance;
pub mod token;

use anyhow::{Context, Result};
use clap::Args;

use super::types::OutputFormat;
use crate::domain::models::Config;
use crate::infrastructure::kiwoom::{KiwoomClient, KiwoomClientConfig};

/// Shared state handed to every command
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

/// Optional positional credential pair; both or neither
#[derive(Args, Debug, Default)]
pub struct CredentialArgs {
    /// Application key (falls back to KIWOOM_APP_KEY)
    #[arg(value_name = "APP_KEY", requires = "secret_key")]
    pub app_key: Option<String>,

    /// Secret key (falls back to KIWOOM_APP_SECRET)
    #[arg(value_name = "SECRET_KEY")]
    pub secret_key: Option<String>,
}

pub(crate) fn build_client(config: &Config) -> Result<KiwoomClient> {
    KiwoomClient::new(KiwoomClientConfig {
        base_url: config.api.host.clone(),
        timeout_secs: config.api.timeout_secs,
    })
    .context("Failed to build HTTP client")
}
