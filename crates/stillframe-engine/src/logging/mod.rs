//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade so the
//! binary and tests share one setup path.

mod init;

pub use init::{LoggingConfig, init_logging};
