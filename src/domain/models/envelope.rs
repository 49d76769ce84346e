use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message reported when no token could be obtained
pub const TOKEN_ISSUE_FAILED: &str = "토큰 발급 실패";

/// Message reported when the account endpoint rejects the query
pub fn account_query_failed(status: u16) -> String {
    format!("계좌 조회 실패 (코드: {status})")
}

/// The single JSON document printed per invocation
///
/// Either `{success: true, data}` or `{success: false, message, detail?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Envelope {
    pub const fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            detail: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            detail: None,
        }
    }

    pub fn failure_with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..Self::failure(message)
        }
    }
}
