//! Demo configuration, read from TOML.
//!
//! ```toml
//! profile = "sports-car"
//! builders = ["car", "manual"]
//! log_level = "debug"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::application::BuilderKind;
use crate::director::Profile;
use crate::error::{Error, Result};
use crate::logging;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub profile: String,
    pub builders: Vec<String>,
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            profile: Profile::SportsCar.to_string(),
            builders: vec![
                BuilderKind::Car.to_string(),
                BuilderKind::Manual.to_string(),
            ],
            log_level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn profile(&self) -> Result<Profile> {
        self.profile.parse()
    }

    pub fn log_level(&self) -> Result<LevelFilter> {
        logging::parse_level(&self.log_level)
    }

    /// Builder kinds in the order they were listed.
    pub fn builder_kinds(&self) -> Result<Vec<BuilderKind>> {
        self.builders.iter().map(|name| name.parse()).collect()
    }
}
