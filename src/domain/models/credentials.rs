use std::fmt;

use crate::domain::error::CredentialError;

/// Application key / secret key pair issued by the Kiwoom developer portal
///
/// Values are trimmed on construction and must be non-empty. The pair is
/// never persisted and its `Debug` output never shows the raw values.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    app_key: String,
    secret_key: String,
}

impl Credentials {
    /// Build a credential pair, trimming surrounding whitespace
    pub fn new(
        app_key: impl AsRef<str>,
        secret_key: impl AsRef<str>,
    ) -> Result<Self, CredentialError> {
        let app_key = app_key.as_ref().trim();
        let secret_key = secret_key.as_ref().trim();

        if app_key.is_empty() {
            return Err(CredentialError::MissingAppKey);
        }
        if secret_key.is_empty() {
            return Err(CredentialError::MissingSecretKey);
        }

        Ok(Self {
            app_key: app_key.to_string(),
            secret_key: secret_key.to_string(),
        })
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_key", &redact(&self.app_key))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Keep a short prefix of a key so logs can tell two keys apart
fn redact(value: &str) -> String {
    match value.char_indices().nth(4) {
        Some((idx, _)) => format!("{}...[REDACTED]", &value[..idx]),
        None => "[REDACTED]".to_string(),
    }
}
