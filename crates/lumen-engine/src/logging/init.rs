use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "lumen_engine=debug"). When it is `None`, `RUST_LOG` is consulted and
/// `default_level` applies if that is unset too.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Verbose output for the engine, used while debugging buffer lifecycles.
    pub fn debug() -> Self {
        Self { default_level: log::LevelFilter::Debug, ..Self::default() }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Returns `false` when another logger was
/// already installed by someone else (for example a test harness).
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = true;
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        builder.write_style(config.write_style);

        installed = builder.try_init().is_ok();
        if installed {
            log::debug!("logging initialized");
        }
    });
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let cfg = LoggingConfig { env_filter: Some("warn".into()), ..LoggingConfig::default() };
        init_logging(cfg.clone());
        assert!(init_logging(cfg));
    }

    #[test]
    fn debug_preset_lowers_default_level() {
        assert_eq!(LoggingConfig::debug().default_level, log::LevelFilter::Debug);
        assert_eq!(LoggingConfig::default().default_level, log::LevelFilter::Info);
    }
}
