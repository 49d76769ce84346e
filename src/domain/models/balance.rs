use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Transaction id of the account evaluation balance query
pub const BALANCE_API_ID: &str = "kt00018";

/// `qry_tp` of the balance query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum QueryType {
    /// Holdings of the same stock summed into one row
    #[default]
    #[serde(rename = "1")]
    Aggregated,

    /// One row per purchase lot
    #[serde(rename = "2")]
    PerItem,
}

impl QueryType {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Aggregated => "1",
            Self::PerItem => "2",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "aggregated" => Ok(Self::Aggregated),
            "2" | "per-item" | "per_item" => Ok(Self::PerItem),
            other => Err(format!(
                "Invalid query type: {other}. Must be 1 (aggregated) or 2 (per-item)"
            )),
        }
    }
}

// Environment overrides arrive as numbers, YAML usually as strings
impl<'de> Deserialize<'de> for QueryType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Code(u64),
        }

        let raw = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text,
            Raw::Code(code) => code.to_string(),
        };
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// `dmst_stex_tp` of the balance query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    /// Korea Exchange
    #[default]
    Krx,

    /// Nextrade alternative trading system
    Nxt,
}

impl Exchange {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Krx => "KRX",
            Self::Nxt => "NXT",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Exchange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "KRX" => Ok(Self::Krx),
            "NXT" => Ok(Self::Nxt),
            other => Err(format!("Invalid exchange: {other}. Must be one of: KRX, NXT")),
        }
    }
}

/// Parameters of one account balance request
///
/// The transaction id is always `kt00018`; the body shape and the table
/// view depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BalanceQuery {
    pub query_type: QueryType,
    pub exchange: Exchange,
}

impl BalanceQuery {
    /// Value of the `api-id` header
    pub const fn api_id(&self) -> &'static str {
        BALANCE_API_ID
    }
}
