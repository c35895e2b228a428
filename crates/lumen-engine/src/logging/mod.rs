//! Logging utilities.
//!
//! Everything in the crate logs through the `log` facade. This module only
//! installs `env_logger` once for binaries and tools that want console output.

mod init;

pub use init::{init_logging, LoggingConfig};
