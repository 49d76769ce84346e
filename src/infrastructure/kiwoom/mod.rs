pub mod client;
pub mod types;

pub use client::{KiwoomClient, KiwoomClientConfig, ACCOUNT_PATH, TOKEN_PATH};
pub use types::{BalanceRequest, TokenRequest, TokenResponse, GRANT_TYPE};
