//! Domain layer for the Kiwoom CLI
//!
//! Credentials, tokens, balance query parameters, the output envelope and
//! the port the application layer talks to.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{CredentialError, KiwoomApiError};
