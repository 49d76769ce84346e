use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which field of the token endpoint response carries the token
///
/// The connection check and the balance query were written against two
/// versions of the endpoint: one answers with `access_token`, the other with
/// `token`. Only the selected field is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenField {
    Token,
    AccessToken,
}

impl TokenField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::AccessToken => "access_token",
        }
    }
}

impl fmt::Display for TokenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "token" => Ok(Self::Token),
            "access_token" => Ok(Self::AccessToken),
            other => Err(format!(
                "Invalid token field: {other}. Must be one of: token, access_token"
            )),
        }
    }
}

/// Bearer token issued for a single invocation
///
/// Never cached or refreshed. `Debug` hides the token itself.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    token: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    token_type: Option<String>,

    /// Expiry as sent by the server (`YYYYMMDDhhmmss`)
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_dt: Option<String>,
}

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            token_type: None,
            expires_dt: None,
        }
    }

    #[must_use]
    pub fn with_token_type(mut self, token_type: Option<String>) -> Self {
        self.token_type = token_type;
        self
    }

    #[must_use]
    pub fn with_expires_dt(mut self, expires_dt: Option<String>) -> Self {
        self.expires_dt = expires_dt;
        self
    }

    pub fn secret(&self) -> &str {
        &self.token
    }

    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    pub fn expires_dt(&self) -> Option<&str> {
        self.expires_dt.as_deref()
    }

    /// Value for the `authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_dt", &self.expires_dt)
            .finish()
    }
}
