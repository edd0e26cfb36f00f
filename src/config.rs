//! Settings file at ~/.church_locator/config.json.
//!
//! Every field is optional; a missing file yields the defaults. Command-line
//! flags are applied on top by the binary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::geo::Coordinate;
use crate::location::{DEFAULT_FALLBACK, DEFAULT_GEOLOCATION_URL};

/// Number of entries shown by a nearest-first listing when no limit is given.
pub const DEFAULT_LIMIT: i64 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fallback coordinate out of range: {0}")]
    InvalidFallback(Coordinate),

    #[error("default_limit must be non-negative, got {0}")]
    InvalidLimit(i64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Used when the device position is unavailable.
    pub fallback: Coordinate,
    pub default_limit: i64,
    /// External catalog; the bundled dataset when unset.
    pub catalog_path: Option<PathBuf>,
    pub geolocation_url: String,
    /// Never contact the geolocation service.
    pub offline: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK,
            default_limit: DEFAULT_LIMIT,
            catalog_path: None,
            geolocation_url: DEFAULT_GEOLOCATION_URL.to_string(),
            offline: false,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".church_locator")
            .join("config.json")
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`; a missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = match fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let settings: Settings = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fallback.is_valid() {
            return Err(ConfigError::InvalidFallback(self.fallback));
        }
        if self.default_limit < 0 {
            return Err(ConfigError::InvalidLimit(self.default_limit));
        }
        Ok(())
    }
}
