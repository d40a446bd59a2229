// src/config/mod.rs
pub mod types;

pub use self::types::{Config, RenderConfig, WalkConfig};

use crate::error::{GraphError, Result};
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const CONFIG_FILE: &str = "wordgraph.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `wordgraph.toml` from the working directory.
    ///
    /// A missing file gives defaults; an unreadable or malformed one is
    /// logged and also gives defaults.
    #[must_use]
    pub fn load() -> Self {
        Self::load_or_default(Path::new(CONFIG_FILE))
    }

    /// Like [`Config::load`], for an explicit path.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Reads and validates a config file. `Ok(None)` if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_path(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(GraphError::io(e, path)),
        };
        let config = Self::parse_toml(&content).map_err(|message| GraphError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Parses TOML content without validating it.
    ///
    /// # Errors
    /// Returns the parser's message on malformed content.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Validates configuration values.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidDamping`] for a damping factor outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        self.rank.validate()
    }
}
