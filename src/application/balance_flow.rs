//! Token-then-query flow for the consolidated account balance.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::error::KiwoomApiError;
use crate::domain::models::{
    account_query_failed, BalanceQuery, Credentials, Envelope, TokenField, TOKEN_ISSUE_FAILED,
};
use crate::domain::ports::BrokerageClient;

/// Issues a token, then queries the account balance with it
pub struct BalanceFlow {
    client: Arc<dyn BrokerageClient>,
}

impl BalanceFlow {
    pub fn new(client: Arc<dyn BrokerageClient>) -> Self {
        Self { client }
    }

    /// Run both requests in sequence and wrap the outcome in an envelope
    ///
    /// A rejected token request short-circuits: the account endpoint is
    /// never called.
    #[instrument(skip(self, credentials, query), fields(api_id = query.api_id()))]
    pub async fn run(
        &self,
        credentials: &Credentials,
        field: TokenField,
        query: &BalanceQuery,
    ) -> Envelope {
        let token = match self.client.issue_token(credentials, field).await {
            Ok(token) => token,
            Err(KiwoomApiError::AuthenticationFailure { status, .. }) => {
                warn!(status, "Token issuance failed, skipping account query");
                return Envelope::failure(TOKEN_ISSUE_FAILED);
            }
            Err(err) => {
                warn!(error = %err, "Token request did not complete");
                return Envelope::failure(err.to_string());
            }
        };

        match self.client.account_balance(credentials, &token, query).await {
            Ok(data) => {
                info!("Account balance retrieved");
                Envelope::success(data)
            }
            Err(KiwoomApiError::QueryFailure { status, body }) => {
                Envelope::failure_with_detail(account_query_failed(status), body)
            }
            Err(err) => {
                warn!(error = %err, "Account query did not complete");
                Envelope::failure(err.to_string())
            }
        }
    }
}
