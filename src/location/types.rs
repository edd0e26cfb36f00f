//! Core types for the location subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::geo::Coordinate;

/// Outcome of asking for location permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

/// How the reference position was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationSource {
    /// A live position from the provider.
    Device,
    /// The configured default coordinate.
    Fallback,
}

impl fmt::Display for LocationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device => write!(f, "Device"),
            Self::Fallback => write!(f, "Fallback"),
        }
    }
}

/// The position handed to the ranker, with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub coordinate: Coordinate,
    pub source: LocationSource,
    pub permission: PermissionStatus,
}

impl Position {
    pub fn is_fallback(&self) -> bool {
        self.source == LocationSource::Fallback
    }

    pub fn status_line(&self) -> String {
        match self.source {
            LocationSource::Device => format!("\u{1F4CD} Using your location ({})", self.coordinate),
            LocationSource::Fallback => {
                format!("\u{26A0}\u{FE0F} Using default location ({})", self.coordinate)
            }
        }
    }
}

/// Position acquisition errors.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Location permission denied")]
    PermissionDenied,
}
