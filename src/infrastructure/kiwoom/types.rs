use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::models::{AccessToken, BalanceQuery, Credentials, TokenField};

/// OAuth2 grant used by the token endpoint
pub const GRANT_TYPE: &str = "client_credentials";

/// Body of `POST /oauth2/token`
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'static str,
    pub appkey: &'a str,
    pub secretkey: &'a str,
}

impl<'a> TokenRequest<'a> {
    pub fn client_credentials(credentials: &'a Credentials) -> Self {
        Self {
            grant_type: GRANT_TYPE,
            appkey: credentials.app_key(),
            secretkey: credentials.secret_key(),
        }
    }
}

/// Body of a token endpoint response
///
/// Both token fields are captured; the caller picks exactly one. Fields are
/// kept as raw JSON so an oddly typed metadata field never hides the token.
#[derive(Debug, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: Option<Value>,

    #[serde(default)]
    pub access_token: Option<Value>,

    #[serde(default)]
    pub token_type: Option<Value>,

    #[serde(default)]
    pub expires_dt: Option<Value>,

    #[serde(default)]
    pub return_code: Option<Value>,

    #[serde(default)]
    pub return_msg: Option<Value>,
}

/// Scalar JSON value as text; objects, arrays and null yield nothing
fn scalar_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

impl TokenResponse {
    /// `return_code` as a number, whether sent as `0` or `"0"`
    pub fn return_code(&self) -> Option<i64> {
        match self.return_code.as_ref()? {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn return_msg(&self) -> Option<&str> {
        self.return_msg.as_ref().and_then(Value::as_str)
    }

    /// Take the token from `field`, ignoring the other field entirely
    pub fn into_access_token(self, field: TokenField) -> Option<AccessToken> {
        let value = match field {
            TokenField::Token => self.token,
            TokenField::AccessToken => self.access_token,
        };

        scalar_text(value)
            .filter(|token| !token.is_empty())
            .map(|token| {
                AccessToken::new(token)
                    .with_token_type(scalar_text(self.token_type))
                    .with_expires_dt(scalar_text(self.expires_dt))
            })
    }
}

/// Body of `POST /api/dostk/acnt`
#[derive(Debug, Serialize)]
pub struct BalanceRequest {
    pub qry_tp: &'static str,
    pub dmst_stex_tp: &'static str,
}

impl From<&BalanceQuery> for BalanceRequest {
    fn from(query: &BalanceQuery) -> Self {
        Self {
            qry_tp: query.query_type.code(),
            dmst_stex_tp: query.exchange.code(),
        }
    }
}
