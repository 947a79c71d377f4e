//! Structured logging infrastructure for streamstats

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output layout of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, colored output for terminals
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(StatsError::validation_field(
                format!("unknown log format '{other}'"),
                "logging.format",
            )),
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "streamstats_graphs=debug")
    pub level: String,
    /// Output layout
    pub format: LogFormat,
    /// Optional file path for log output instead of stderr
    pub file: Option<PathBuf>,
    /// Whether to log span open/close events
    pub include_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
            include_spans: false,
        }
    }
}

/// Builds the level filter. `RUST_LOG` wins over the configured level.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| StatsError::config_with_source(format!("invalid log level '{level}'"), e))
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = build_filter(&config.level)?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match (config.format, config.file.as_deref()) {
        (LogFormat::Json, None) => registry
            .with(fmt::layer().json().with_span_events(span_events).with_writer(std::io::stderr))
            .try_init(),
        (LogFormat::Json, Some(path)) => registry
            .with(fmt::layer().json().with_span_events(span_events).with_writer(file_writer(path)?))
            .try_init(),
        (LogFormat::Compact, None) => registry
            .with(fmt::layer().compact().with_span_events(span_events).with_writer(std::io::stderr))
            .try_init(),
        (LogFormat::Compact, Some(path)) => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_span_events(span_events)
                    .with_writer(file_writer(path)?),
            )
            .try_init(),
        (LogFormat::Pretty, None) => registry
            .with(fmt::layer().pretty().with_span_events(span_events).with_writer(std::io::stderr))
            .try_init(),
        (LogFormat::Pretty, Some(path)) => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(false)
                    .with_span_events(span_events)
                    .with_writer(file_writer(path)?),
            )
            .try_init(),
    };

    result.map_err(|e| StatsError::config_with_source("failed to install log subscriber", e))
}

fn file_writer(path: &Path) -> Result<tracing_appender::rolling::RollingFileAppender> {
    let file_name = path
        .file_name()
        .ok_or_else(|| StatsError::validation_field("log file path has no file name", "logging.file"))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory)?;
    Ok(tracing_appender::rolling::never(directory, file_name))
}
