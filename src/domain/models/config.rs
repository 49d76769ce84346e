use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use super::balance::{BalanceQuery, Exchange, QueryType};

/// Production REST host
pub const DEFAULT_HOST: &str = "https://api.kiwoom.com";

/// Main configuration structure for the Kiwoom CLI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Application key (`KIWOOM_APP_KEY`)
    #[serde(default, skip_serializing, deserialize_with = "opaque_string")]
    pub app_key: Option<String>,

    /// Secret key (`KIWOOM_APP_SECRET`)
    #[serde(default, skip_serializing, deserialize_with = "opaque_string")]
    pub app_secret: Option<String>,

    /// REST endpoint configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Balance query defaults
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Accept a scalar of any type as text, e.g. an unquoted numeric key in YAML
fn opaque_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Unsigned(value) => value.to_string(),
        Scalar::Signed(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
        Scalar::Flag(value) => value.to_string(),
    }))
}

/// REST endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ApiConfig {
    /// Scheme and host, without a trailing path
    #[serde(default = "default_host")]
    pub host: String,

    /// Request timeout in seconds; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_secs: None,
        }
    }
}

/// Balance query defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QueryConfig {
    /// `qry_tp`: "1" aggregated, "2" per item
    #[serde(default)]
    pub qry_tp: QueryType,

    /// `dmst_stex_tp`: KRX or NXT
    #[serde(default)]
    pub exchange: Exchange,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            qry_tp: QueryType::default(),
            exchange: Exchange::default(),
        }
    }
}

impl QueryConfig {
    /// Build a query, letting command-line values win over configured ones
    pub fn to_query(&self, qry_tp: Option<QueryType>, exchange: Option<Exchange>) -> BalanceQuery {
        BalanceQuery {
            query_type: qry_tp.unwrap_or(self.qry_tp),
            exchange: exchange.unwrap_or(self.exchange),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for a JSON log file; logs go to stderr only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
