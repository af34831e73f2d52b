use std::path::PathBuf;

use thiserror::Error;

/// Errors from the edges of the crate: config files, names typed by a user,
/// logging setup. Building steps themselves cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unknown profile '{0}' (expected 'sports-car' or 'suv')")]
    UnknownProfile(String),

    #[error("Unknown builder '{0}' (expected 'car' or 'manual')")]
    UnknownBuilder(String),

    #[error("Unknown log level '{0}' (expected off, error, warn, info, debug or trace)")]
    UnknownLogLevel(String),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
