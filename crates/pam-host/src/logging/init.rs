use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "pam::loader=debug,pam_ui=info").
///
/// `loader_level`, when set, overrides the level for the `pam::loader`
/// target after the filter is applied.
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub loader_level: Option<log::LevelFilter>,
    pub write_style: env_logger::WriteStyle,
}

/// Log target used by the markup loader.
pub const LOADER_TARGET: &str = "pam::loader";

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_loader_level(mut self, level: log::LevelFilter) -> Self {
        self.loader_level = Some(level);
        self
    }

    pub fn with_write_style(mut self, style: env_logger::WriteStyle) -> Self {
        self.write_style = style;
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            loader_level: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
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
            // Loader diagnostics are warnings and notices, so info shows both.
            builder.filter_level(log::LevelFilter::Info);
        }

        if let Some(level) = config.loader_level {
            builder.filter_module(LOADER_TARGET, level);
        }

        builder.write_style(config.write_style);

        // Another logger may already be installed (tests, embedding apps).
        if builder.try_init().is_err() {
            log::debug!("a logger was already installed; keeping it");
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builders_set_fields() {
        let cfg = LoggingConfig::default()
            .with_filter("pam::loader=debug")
            .with_loader_level(log::LevelFilter::Error)
            .with_write_style(env_logger::WriteStyle::Never);
        assert_eq!(cfg.env_filter.as_deref(), Some("pam::loader=debug"));
        assert_eq!(cfg.loader_level, Some(log::LevelFilter::Error));
        assert!(matches!(cfg.write_style, env_logger::WriteStyle::Never));
    }

    #[test]
    fn default_leaves_loader_level_to_filter() {
        let cfg = LoggingConfig::default();
        assert!(cfg.env_filter.is_none());
        assert!(cfg.loader_level.is_none());
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default().with_filter("warn"));
        init_logging(LoggingConfig::default());
    }
}
