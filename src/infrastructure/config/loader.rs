use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project config file, relative to the working directory
pub const PROJECT_CONFIG: &str = ".kiwoom/config.yaml";

/// Optional local overrides, relative to the working directory
pub const LOCAL_CONFIG: &str = ".kiwoom/local.yaml";

/// Prefix of environment overrides (`KIWOOM_API__HOST`, `KIWOOM_APP_KEY`, ...)
pub const ENV_PREFIX: &str = "KIWOOM_";

/// Config keys read verbatim from `KIWOOM_APP_KEY` / `KIWOOM_APP_SECRET`
const CREDENTIAL_KEYS: [&str; 2] = ["app_key", "app_secret"];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API host: {0}. Must be an absolute http(s) URL")]
    InvalidHost(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Failed to load env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .kiwoom/config.yaml
    /// 3. .kiwoom/local.yaml (optional overrides)
    /// 4. Environment variables (KIWOOM_* prefix, `__` for nesting)
    pub fn load() -> Result<Config> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(PROJECT_CONFIG))
            .merge(Yaml::file(LOCAL_CONFIG));

        Self::extract(figment).context("Failed to extract configuration from figment")
    }

    /// Load configuration from a specific file, still honoring env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path));

        Self::extract(figment)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    fn extract(figment: Figment) -> Result<Config> {
        let mut figment =
            figment.merge(Env::prefixed(ENV_PREFIX).ignore(&CREDENTIAL_KEYS).split("__"));

        // Env would type-parse "0123" or "true"; credentials stay opaque strings
        for key in CREDENTIAL_KEYS {
            let var = format!("{ENV_PREFIX}{}", key.to_uppercase());
            if let Ok(value) = std::env::var(&var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        let config: Config = figment.extract()?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Read a dotenv file into the process environment
    ///
    /// With an explicit path the file must exist. Without one, the nearest
    /// `.env` in the working directory or its parents is used if present.
    /// Variables already set in the environment are never overridden.
    pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
        match path {
            Some(path) => {
                dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
                    path: path.to_path_buf(),
                    source,
                })?;
                Ok(Some(path.to_path_buf()))
            }
            None => Ok(dotenvy::dotenv().ok()),
        }
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        match reqwest::Url::parse(&config.api.host) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            _ => return Err(ConfigError::InvalidHost(config.api.host.clone())),
        }

        if config.api.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidTimeout(0));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
