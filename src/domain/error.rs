use thiserror::Error;

/// Errors raised while resolving the application key / secret pair
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("App key is missing: pass it as the first argument or set KIWOOM_APP_KEY")]
    MissingAppKey,

    #[error("Secret key is missing: pass it as the second argument or set KIWOOM_APP_SECRET")]
    MissingSecretKey,
}

/// Errors that can occur when talking to the Kiwoom REST API
///
/// Every variant is terminal: nothing in this crate retries.
#[derive(Error, Debug)]
pub enum KiwoomApiError {
    /// Token endpoint answered with something other than 200, or the
    /// expected token field was absent
    #[error("Token request rejected ({status}): {body}")]
    AuthenticationFailure { status: u16, body: String },

    /// Account endpoint answered with something other than 200
    #[error("Account query rejected ({status}): {body}")]
    QueryFailure { status: u16, body: String },

    /// Connection, timeout or request-building failure
    #[error("{0}")]
    TransportFailure(#[from] reqwest::Error),

    /// A 200 response whose body was not valid JSON
    #[error("{0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl KiwoomApiError {
    /// HTTP status carried by the error, if the server answered at all
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailure { status, .. } | Self::QueryFailure { status, .. } => {
                Some(*status)
            }
            Self::TransportFailure(_) | Self::MalformedResponse(_) => None,
        }
    }

    /// True for failures below the HTTP status level
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::TransportFailure(_) | Self::MalformedResponse(_))
    }
}
