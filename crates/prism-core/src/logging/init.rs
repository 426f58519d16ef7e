use std::sync::Once;

use log::LevelFilter;

use super::ConsoleMirror;
use crate::diag;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "prism_core=debug").
///
/// `write_style` controls ANSI coloring behavior.
///
/// `console_level` mirrors records at or above that level into the global
/// diagnostic sink. `None` disables mirroring.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub console_level: Option<LevelFilter>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            console_level: Some(LevelFilter::Warn),
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(LevelFilter::Info);
        }

        builder.write_style(config.write_style);

        let logger = builder.build();
        let mut max_level = logger.filter();

        let installed = match config.console_level {
            Some(level) => {
                max_level = max_level.max(level);
                log::set_boxed_logger(Box::new(ConsoleMirror::new(logger, diag::global(), level)))
            }
            None => log::set_boxed_logger(Box::new(logger)),
        };

        match installed {
            Ok(()) => {
                log::set_max_level(max_level);
                log::debug!("logging initialized");
            }
            // Another backend won the race; keep it rather than panic.
            Err(err) => eprintln!("prism: logger not installed: {err}"),
        }
    });
}
