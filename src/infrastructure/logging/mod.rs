//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - stderr output in pretty or JSON form
//! - optional JSON log file
//! - secret scrubbing for logged HTTP bodies

pub mod logger;
pub mod secret_scrubbing;

pub use logger::{LogFormat, LoggerImpl, LOG_FILE_NAME};
pub use secret_scrubbing::SecretScrubber;
