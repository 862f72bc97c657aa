//! Tracing initialization with configurable logging formats.

use tracing_subscriber::{
    EnvFilter,
    filter::{Directive, LevelFilter},
};

use crate::config::{LogFormat, LoggingConfig};

/// Errors from tracing initialization.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Invalid filter directive `{0}`")]
    InvalidFilter(String),
}

/// Initialize the tracing subscriber: console logging with configurable
/// format and environment-based filtering.
pub fn init_tracing(logging: &LoggingConfig) -> Result<(), TracingError> {
    let filter = build_env_filter(logging)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(logging.file_line)
        .with_line_number(logging.file_line);

    match (&logging.format, logging.timestamps) {
        (LogFormat::Pretty, true) => builder.pretty().init(),
        (LogFormat::Pretty, false) => builder.pretty().without_time().init(),
        (LogFormat::Compact, true) => builder.compact().init(),
        (LogFormat::Compact, false) => builder.compact().without_time().init(),
        (LogFormat::Json, true) => builder.json().init(),
        (LogFormat::Json, false) => builder.json().without_time().init(),
    }

    Ok(())
}

/// Build the log filter from the configured level plus any extra directives.
/// `RUST_LOG` still takes precedence over the configured default level.
fn build_env_filter(logging: &LoggingConfig) -> Result<EnvFilter, TracingError> {
    let default = LevelFilter::from_level(logging.level.to_tracing_level());
    let mut filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    if let Some(directives) = &logging.filter {
        for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            let parsed: Directive = directive
                .parse()
                .map_err(|_| TracingError::InvalidFilter(directive.to_string()))?;
            filter = filter.add_directive(parsed);
        }
    }

    Ok(filter)
}
