//! Kiwoom - command-line client for the Kiwoom Securities REST API
//!
//! Issues OAuth2 client-credentials tokens and fetches the consolidated
//! account evaluation balance (`kt00018`), reporting every outcome as a
//! single `{success, data}` / `{success, message, detail}` JSON envelope.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): credentials, tokens, query parameters, envelope, ports
//! - **Application Layer** (`application`): the token and balance flows
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, config, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use kiwoom::application::BalanceFlow;
//! use kiwoom::domain::models::{BalanceQuery, Credentials, TokenField};
//! use kiwoom::infrastructure::kiwoom::{KiwoomClient, KiwoomClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = KiwoomClient::new(KiwoomClientConfig::default())?;
//!     let credentials = Credentials::new("app-key", "secret-key")?;
//!     let envelope = BalanceFlow::new(Arc::new(client))
//!         .run(&credentials, TokenField::Token, &BalanceQuery::default())
//!         .await;
//!     println!("{}", serde_json::to_string(&envelope)?);
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{BalanceFlow, TokenFlow};
pub use domain::models::{
    AccessToken, BalanceQuery, Config, Credentials, Envelope, Exchange, QueryType, TokenField,
};
pub use domain::ports::BrokerageClient;
pub use domain::{CredentialError, KiwoomApiError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::kiwoom::{KiwoomClient, KiwoomClientConfig};
