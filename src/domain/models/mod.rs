pub mod balance;
pub mod config;
pub mod credentials;
pub mod envelope;
pub mod token;

pub use balance::{BalanceQuery, Exchange, QueryType, BALANCE_API_ID};
pub use config::{ApiConfig, Config, LoggingConfig, QueryConfig, DEFAULT_HOST};
pub use credentials::Credentials;
pub use envelope::{account_query_failed, Envelope, TOKEN_ISSUE_FAILED};
pub use token::{AccessToken, TokenField};
