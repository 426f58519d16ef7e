//! Logging utilities.
//!
//! Logger initialization on top of the standard `log` facade with an
//! `env_logger` backend. Warnings and errors can additionally be mirrored into
//! the diagnostic sink so the on-screen console shows them.

mod init;
mod mirror;

pub use init::{init_logging, LoggingConfig};
pub use mirror::ConsoleMirror;
