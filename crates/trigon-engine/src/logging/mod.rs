//! Logging utilities.
//!
//! This module centralizes logger initialization. Code elsewhere only uses the
//! standard `log` facade; `env_logger` is the backend.

mod init;

pub use init::{DEFAULT_FILTER, LoggingConfig, init_logging};
