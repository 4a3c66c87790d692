//! Tracing/logging initialization.
//!
//! Logs go to stderr so they never interleave with the menu on stdout.

use tracing_subscriber::EnvFilter;

/// How log events are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Lower the default level to `debug`.
    pub verbose: bool,
}

impl LogConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Initialize tracing/logging for the process.
///
/// `RUST_LOG` wins over the configured default. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_lowers_default_level() {
        assert_eq!(LogConfig::default().default_directive(), "warn");
        let verbose = LogConfig {
            verbose: true,
            ..LogConfig::default()
        };
        assert_eq!(verbose.default_directive(), "debug");
    }

    #[test]
    fn init_twice_is_harmless() {
        let config = LogConfig {
            format: LogFormat::Json,
            verbose: false,
        };
        init(&config);
        init(&LogConfig::default());
    }
}
