//! In-memory `BrokerageClient` double for flow tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::error::KiwoomApiError;
use crate::domain::models::{AccessToken, BalanceQuery, Credentials, TokenField};
use crate::domain::ports::BrokerageClient;

enum TokenOutcome {
    Issue(String),
    Reject(u16, String),
}

enum BalanceOutcome {
    Unset,
    Payload(Value),
    Reject(u16, String),
    Malformed(String),
}

pub struct StubClient {
    token: TokenOutcome,
    token_type: Option<String>,
    expires_dt: Option<String>,
    balance: BalanceOutcome,
    requested_field: Mutex<Option<TokenField>>,
    bearer_seen: Mutex<Option<String>>,
    balance_calls: AtomicUsize,
}

impl StubClient {
    fn with_token(token: TokenOutcome) -> Self {
        Self {
            token,
            token_type: None,
            expires_dt: None,
            balance: BalanceOutcome::Unset,
            requested_field: Mutex::new(None),
            bearer_seen: Mutex::new(None),
            balance_calls: AtomicUsize::new(0),
        }
    }

    pub fn issuing(token: &str) -> Self {
        Self::with_token(TokenOutcome::Issue(token.to_string()))
    }

    pub fn rejecting_token(status: u16, body: &str) -> Self {
        Self::with_token(TokenOutcome::Reject(status, body.to_string()))
    }

    pub fn with_token_metadata(mut self, token_type: &str, expires_dt: &str) -> Self {
        self.token_type = Some(token_type.to_string());
        self.expires_dt = Some(expires_dt.to_string());
        self
    }

    pub fn with_balance(mut self, payload: Value) -> Self {
        self.balance = BalanceOutcome::Payload(payload);
        self
    }

    pub fn with_balance_failure(mut self, status: u16, body: &str) -> Self {
        self.balance = BalanceOutcome::Reject(status, body.to_string());
        self
    }

    pub fn with_malformed_balance(mut self, body: &str) -> Self {
        self.balance = BalanceOutcome::Malformed(body.to_string());
        self
    }

    pub fn requested_field(&self) -> Option<TokenField> {
        *self.requested_field.lock().unwrap()
    }

    pub fn bearer_seen(&self) -> Option<String> {
        self.bearer_seen.lock().unwrap().clone()
    }

    pub fn balance_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BrokerageClient for StubClient {
    async fn issue_token(
        &self,
        _credentials: &Credentials,
        field: TokenField,
    ) -> Result<AccessToken, KiwoomApiError> {
        *self.requested_field.lock().unwrap() = Some(field);

        match &self.token {
            TokenOutcome::Issue(token) => Ok(AccessToken::new(token.clone())
                .with_token_type(self.token_type.clone())
                .with_expires_dt(self.expires_dt.clone())),
            TokenOutcome::Reject(status, body) => Err(KiwoomApiError::AuthenticationFailure {
                status: *status,
                body: body.clone(),
            }),
        }
    }

    async fn account_balance(
        &self,
        _credentials: &Credentials,
        token: &AccessToken,
        _query: &BalanceQuery,
    ) -> Result<Value, KiwoomApiError> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        *self.bearer_seen.lock().unwrap() = Some(token.bearer());

        match &self.balance {
            BalanceOutcome::Unset => panic!("account_balance called on a stub without a balance"),
            BalanceOutcome::Payload(value) => Ok(value.clone()),
            BalanceOutcome::Reject(status, body) => Err(KiwoomApiError::QueryFailure {
                status: *status,
                body: body.clone(),
            }),
            BalanceOutcome::Malformed(body) => Err(serde_json::from_str::<Value>(body)
                .expect_err("malformed body must not parse")
                .into()),
        }
    }
}
