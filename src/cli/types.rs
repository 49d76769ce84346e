//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::commands::balance::BalanceArgs;
use super::commands::token::TokenArgs;

#[derive(Parser, Debug)]
#[command(name = "kiwoom")]
#[command(about = "Kiwoom Securities REST API client", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// dotenv file with KIWOOM_APP_KEY / KIWOOM_APP_SECRET (defaults to the nearest .env)
    #[arg(long, global = true, env = "KIWOOM_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// YAML config file (defaults to .kiwoom/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the REST API host, e.g. https://mockapi.kiwoom.com
    #[arg(long, global = true)]
    pub host: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Issue an access token (connection check)
    Token(TokenArgs),

    /// Issue a token and fetch the account evaluation balance (kt00018)
    Balance(BalanceArgs),
}

/// How the result envelope is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON
    #[default]
    Json,
    /// Indented JSON
    Pretty,
    /// Human-readable summary
    Table,
}
