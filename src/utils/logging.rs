use clap::ValueEnum;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::settings::LoggingConfig;
use crate::config::settings::LogFormat;
use crate::config::ClientConfig;


#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::TRACE => "trace",
            LogLevel::DEBUG => "debug",
            LogLevel::INFO => "info",
            LogLevel::WARN => "warn",
            LogLevel::ERROR => "error",
        }
    }
}

/// Logging config from the file, with the CLI level taking precedence.
pub fn resolve(client_config: Option<&ClientConfig>, arg_log_level: Option<LogLevel>) -> LoggingConfig {
    let configured = client_config
        .and_then(|config| config.settings.logging.clone())
        .unwrap_or_default();

    match arg_log_level {
        Some(level) => LoggingConfig::new(level.as_str().to_owned(), configured.format),
        None => configured,
    }
}

/// Initialize tracing with the desired config.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // stdout carries command output, logs go to stderr
    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true)
                .with_writer(std::io::stderr)
                .with_ansi(false);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_timer(UtcTime::rfc_3339())
                .with_writer(std::io::stderr)
                .with_ansi(true);

            let _ = registry.with(layer).try_init();
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::parse_config;

    const CONFIG: &str = r#"
settings:
  logging:
    level: warn
    format: json
credentials:
  client_id: { value: "id" }
  client_secret: { value: "secret" }
"#;

    #[test]
    fn cli_level_overrides_file_level() {
        let cfg = parse_config(CONFIG).unwrap();
        let resolved = resolve(Some(&cfg), Some(LogLevel::DEBUG));
        assert_eq!(resolved.level, "debug");
        assert_eq!(resolved.format, LogFormat::Json);

        let from_file = resolve(Some(&cfg), None);
        assert_eq!(from_file.level, "warn");
    }

    #[test]
    fn defaults_to_info_without_config() {
        let resolved = resolve(None, None);
        assert_eq!(resolved.level, "info");
    }
}
