//! Credentials resolution
//!
//! Positional arguments win when both are given; otherwise the pair comes
//! from configuration, which carries `KIWOOM_APP_KEY` / `KIWOOM_APP_SECRET`
//! (environment or `.env`).

use tracing::debug;

use crate::domain::error::CredentialError;
use crate::domain::models::{Config, Credentials};

/// Where a resolved credential pair came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Arguments,
    Environment,
}

/// Resolve the credential pair for one invocation
pub fn resolve(
    app_key: Option<&str>,
    secret_key: Option<&str>,
    config: &Config,
) -> Result<(Credentials, CredentialSource), CredentialError> {
    if let (Some(app_key), Some(secret_key)) = (app_key, secret_key) {
        debug!("Using credentials from command-line arguments");
        return Ok((
            Credentials::new(app_key, secret_key)?,
            CredentialSource::Arguments,
        ));
    }

    let app_key = config
        .app_key
        .as_deref()
        .ok_or(CredentialError::MissingAppKey)?;
    let secret_key = config
        .app_secret
        .as_deref()
        .ok_or(CredentialError::MissingSecretKey)?;

    debug!("Using credentials from environment configuration");
    Ok((
        Credentials::new(app_key, secret_key)?,
        CredentialSource::Environment,
    ))
}
