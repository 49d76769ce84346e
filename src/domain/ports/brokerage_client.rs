use async_trait::async_trait;
use serde_json::Value;

use crate::domain::error::KiwoomApiError;
use crate::domain::models::{AccessToken, BalanceQuery, Credentials, TokenField};

/// Port for the brokerage REST API
///
/// Each call is a single stateless request: no retry, no pagination.
#[async_trait]
pub trait BrokerageClient: Send + Sync {
    /// Exchange the credential pair for a bearer token
    ///
    /// Only a 200 response carrying a non-empty `field` yields a token;
    /// anything else is an `AuthenticationFailure`.
    async fn issue_token(
        &self,
        credentials: &Credentials,
        field: TokenField,
    ) -> Result<AccessToken, KiwoomApiError>;

    /// Fetch the account evaluation balance, returning the body untouched
    async fn account_balance(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
        query: &BalanceQuery,
    ) -> Result<Value, KiwoomApiError>;
}
