//! Core types for the catalog.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::geo::Coordinate;

/// A church (or any point of interest) listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: i64,
    pub name: String,
    pub address: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Cannot read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entries share an id.
    #[error("Duplicate catalog id {0}")]
    DuplicateId(i64),
}
