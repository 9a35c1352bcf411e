use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log level/filter '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Installs the global fmt subscriber. `RUST_LOG` takes precedence over the
/// configured level when it parses.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(std::env::var("RUST_LOG").ok(), &config.log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn build_filter(env_override: Option<String>, fallback: &str) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = env_override.and_then(|raw| EnvFilter::try_new(raw).ok()) {
        return Ok(filter);
    }

    EnvFilter::try_new(fallback).map_err(|source| TelemetryError::EnvFilter {
        value: fallback.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn falls_back_to_configured_level() {
        let filter = build_filter(None, "debug").expect("debug is a valid filter");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn ignores_unparseable_override() {
        let filter = build_filter(Some("bloodlink=loud".to_string()), "warn")
            .expect("fallback filter applies");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn reports_invalid_configured_level() {
        match build_filter(None, "bloodlink=loud") {
            Err(TelemetryError::EnvFilter { value, .. }) => assert_eq!(value, "bloodlink=loud"),
            other => panic!("expected env filter error, got {other:?}"),
        }
    }
}
