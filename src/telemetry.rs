use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Install the diagnostic subscriber. `RUST_LOG` wins over the configured level.
pub fn init(log_level: &str) -> AppResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|e| {
            AppError::Telemetry(format!("invalid log level/filter '{log_level}': {e}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Telemetry(e.to_string()))
}
