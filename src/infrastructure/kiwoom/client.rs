use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::types::{BalanceRequest, TokenRequest, TokenResponse};
use crate::domain::error::KiwoomApiError;
use crate::domain::models::{AccessToken, BalanceQuery, Credentials, TokenField, DEFAULT_HOST};
use crate::domain::ports::BrokerageClient;
use crate::infrastructure::logging::SecretScrubber;

/// Token issuance endpoint (`au10001`)
pub const TOKEN_PATH: &str = "/oauth2/token";

/// Domestic stock account endpoint
pub const ACCOUNT_PATH: &str = "/api/dostk/acnt";

const JSON_UTF8: &str = "application/json;charset=UTF-8";

/// Configuration for the Kiwoom HTTP client
#[derive(Debug, Clone)]
pub struct KiwoomClientConfig {
    /// Scheme and host of the REST API
    pub base_url: String,

    /// Request timeout in seconds; `None` keeps reqwest's default (no timeout)
    pub timeout_secs: Option<u64>,
}

impl Default for KiwoomClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HOST.to_string(),
            timeout_secs: None,
        }
    }
}

/// HTTP client for the Kiwoom REST API
///
/// One fresh connection per invocation is fine; the client is not shared
/// across processes and nothing is retried.
pub struct KiwoomClient {
    http_client: ReqwestClient,
    base_url: String,
    scrubber: SecretScrubber,
}

impl KiwoomClient {
    /// Create a new client
    ///
    /// # Example
    /// ```no_run
    /// use kiwoom::infrastructure::kiwoom::{KiwoomClient, KiwoomClientConfig};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = KiwoomClient::new(KiwoomClientConfig::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: KiwoomClientConfig) -> Result<Self, KiwoomApiError> {
        let mut builder = ReqwestClient::builder().tcp_nodelay(true);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        debug!(
            base_url = %config.base_url,
            timeout_secs = ?config.timeout_secs,
            "Initializing Kiwoom API client"
        );

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            scrubber: SecretScrubber::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl BrokerageClient for KiwoomClient {
    #[instrument(skip(self, credentials, field), fields(token_field = %field))]
    async fn issue_token(
        &self,
        credentials: &Credentials,
        field: TokenField,
    ) -> Result<AccessToken, KiwoomApiError> {
        let url = self.endpoint(TOKEN_PATH);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .json(&TokenRequest::client_credentials(credentials))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(
            status = status.as_u16(),
            body = %self.scrubber.scrub_message(&body),
            "Token response"
        );

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Token request rejected");
            return Err(KiwoomApiError::AuthenticationFailure {
                status: status.as_u16(),
                body,
            });
        }

        // A 200 that is not JSON carries no token either
        let parsed: TokenResponse = serde_json::from_str(&body).unwrap_or_default();
        if parsed.return_code().is_some_and(|code| code != 0) {
            debug!(
                return_code = ?parsed.return_code(),
                return_msg = ?parsed.return_msg(),
                "Token endpoint reported a non-zero return code"
            );
        }

        parsed.into_access_token(field).ok_or_else(|| {
            warn!(field = %field, "Token field missing from 200 response");
            KiwoomApiError::AuthenticationFailure {
                status: status.as_u16(),
                body,
            }
        })
    }

    #[instrument(
        skip(self, credentials, token, query),
        fields(api_id = query.api_id(), qry_tp = %query.query_type, exchange = %query.exchange)
    )]
    async fn account_balance(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
        query: &BalanceQuery,
    ) -> Result<Value, KiwoomApiError> {
        let url = self.endpoint(ACCOUNT_PATH);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .header(AUTHORIZATION, token.bearer())
            .header("api-id", query.api_id())
            .header("appkey", credentials.app_key())
            .header("secretkey", credentials.secret_key())
            .json(&BalanceRequest::from(query))
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            warn!(status = status.as_u16(), "Account query rejected");
            return Err(KiwoomApiError::QueryFailure {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Account query succeeded");
        Ok(serde_json::from_str(&body)?)
    }
}
