//! Infrastructure layer module
//!
//! External integrations and adapters:
//! - Kiwoom REST API client (reqwest)
//! - Configuration management (figment, dotenvy)
//! - Credentials resolution
//! - Logging infrastructure (tracing)
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod credentials;
pub mod kiwoom;
pub mod logging;
