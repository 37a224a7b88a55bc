//! Logging utilities.
//!
//! Logger initialization lives here so binaries and tests share one setup.
//! Library code only ever talks to the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig, LOADER_TARGET};
