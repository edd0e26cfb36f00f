//! The church catalog: an ordered, read-only list of points of interest.
//!
//! Built once at startup, either from the bundled dataset or from a JSON
//! file, and shared behind an `Arc` afterwards. There is no write path.

mod builtin;
pub mod types;

pub use types::{CatalogError, PointOfInterest};

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::geo::Coordinate;
use crate::ranker::{self, RankError, RankedPoint};

/// An immutable, ordered collection of points of interest with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    points: Vec<PointOfInterest>,
}

impl Catalog {
    /// The bundled dataset.
    pub fn builtin() -> Self {
        Self { points: builtin::builtin_points() }
    }

    /// Build a catalog from already-parsed entries, rejecting duplicate ids.
    pub fn from_points(points: Vec<PointOfInterest>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(points.len());
        for p in &points {
            if !seen.insert(p.id) {
                return Err(CatalogError::DuplicateId(p.id));
            }
        }
        Ok(Self { points })
    }

    /// Parse a JSON array of `{id, name, address, lat, long}` objects.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let points: Vec<PointOfInterest> = serde_json::from_str(json)?;
        Self::from_points(points)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&data)?;
        info!(path = %path.display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise the bundled dataset.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => {
                let catalog = Self::builtin();
                debug!(entries = catalog.len(), "using built-in catalog");
                Ok(catalog)
            }
        }
    }

    pub fn points(&self) -> &[PointOfInterest] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&PointOfInterest> {
        ranker::lookup_by_id(&self.points, id)
    }

    /// Entries ranked nearest-first from `origin`.
    pub fn nearest(
        &self,
        origin: &Coordinate,
        limit: Option<i64>,
    ) -> Result<Vec<RankedPoint<'_>>, RankError> {
        ranker::rank_by_proximity(origin, &self.points, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"[
        {"id": 10, "name": "A", "address": "1 Phố Huế, Hà Nội", "lat": 21.01, "long": 105.85},
        {"id": 11, "name": "B", "address": "2 Lê Lợi, TP. HCM", "lat": 10.77, "lon": 106.70}
    ]"#;

    #[test]
    fn test_builtin_not_empty() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(1).map(|p| p.name.as_str()), Some("Nhà thờ Lớn Hà Nội"));
    }

    #[test]
    fn test_from_json_str() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        let b = catalog.get(11).unwrap();
        assert_eq!(b.coordinate, Coordinate::new(10.77, 106.70));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "address": "x", "lat": 0, "lon": 0},
            {"id": 1, "name": "B", "address": "y", "lat": 1, "lon": 1}
        ]"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_malformed_json() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("churches.json");
        fs::write(&path, SAMPLE).unwrap();

        let catalog = Catalog::load(Some(&path)).unwrap();
        assert_eq!(catalog.points()[0].id, 10);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Catalog::from_json_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_nearest_defaults_to_ranker() {
        let catalog = Catalog::builtin();
        let hanoi = Coordinate::new(21.0285, 105.8542);
        let ranked = catalog.nearest(&hanoi, Some(5)).unwrap();
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].point.id, 1);
        assert!(ranked.iter().all(|r| r.point.address.contains("Hà Nội")));
    }

    #[test]
    fn test_get_missing() {
        assert!(Catalog::builtin().get(-7).is_none());
    }
}
