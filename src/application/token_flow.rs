//! Token issuance flow: the connection check.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::domain::error::KiwoomApiError;
use crate::domain::models::{Credentials, Envelope, TokenField, TOKEN_ISSUE_FAILED};
use crate::domain::ports::BrokerageClient;

/// Requests a token and reports it
pub struct TokenFlow {
    client: Arc<dyn BrokerageClient>,
}

impl TokenFlow {
    pub fn new(client: Arc<dyn BrokerageClient>) -> Self {
        Self { client }
    }

    /// Issue a token and wrap the outcome in an envelope
    ///
    /// Success carries `{token, token_type?, expires_dt?}`. A rejected
    /// request reports the raw response body as `detail`.
    #[instrument(skip(self, credentials))]
    pub async fn run(&self, credentials: &Credentials, field: TokenField) -> Envelope {
        match self.client.issue_token(credentials, field).await {
            Ok(token) => {
                info!("Token issued");
                Envelope::success(serde_json::to_value(&token).unwrap_or(Value::Null))
            }
            Err(KiwoomApiError::AuthenticationFailure { status, body }) => {
                warn!(status, "Token issuance failed");
                Envelope::failure_with_detail(TOKEN_ISSUE_FAILED, body)
            }
            Err(err) => {
                warn!(error = %err, "Token request did not complete");
                Envelope::failure(err.to_string())
            }
        }
    }
}
