//! Shared helpers for integration tests.
#![allow(dead_code)]

use kiwoom::domain::models::Credentials;
use kiwoom::infrastructure::kiwoom::{KiwoomClient, KiwoomClientConfig};

pub const APP_KEY: &str = "test-app-key";
pub const SECRET_KEY: &str = "test-secret-key";

/// Address nothing listens on
pub const UNREACHABLE_HOST: &str = "http://127.0.0.1:1";

pub fn credentials() -> Credentials {
    Credentials::new(APP_KEY, SECRET_KEY).expect("test credentials are valid")
}

/// Client pointed at a mock server
pub fn client_for(base_url: &str) -> KiwoomClient {
    KiwoomClient::new(KiwoomClientConfig {
        base_url: base_url.to_string(),
        timeout_secs: Some(5),
    })
    .expect("Failed to create client")
}

/// Body of a successful token response using the given field name
pub fn token_body(field: &str, token: &str) -> String {
    let mut body = serde_json::json!({
        "expires_dt": "20241107083713",
        "token_type": "bearer",
        "return_code": 0,
        "return_msg": "정상적으로 처리되었습니다"
    });
    body[field] = serde_json::Value::String(token.to_string());
    body.to_string()
}
