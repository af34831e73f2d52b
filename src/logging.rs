use std::str::FromStr;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Error, Result};

/// Parses a plain level name. Anything else is rejected rather than read as
/// a target directive, which would silently filter out every event.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim()).map_err(|_| Error::UnknownLogLevel(level.to_string()))
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: LevelFilter) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))
}
