//! Church directory engine.
//!
//! Ranks a static catalog of churches by great-circle distance from a
//! reference position, groups entries by region, and builds map links.
//!
//! ```
//! use church_locator::catalog::Catalog;
//! use church_locator::geo::Coordinate;
//! use church_locator::ranker::format_distance;
//!
//! let catalog = Catalog::builtin();
//! let here = Coordinate::new(10.7769, 106.7009);
//! let nearest = catalog.nearest(&here, Some(3)).unwrap();
//! assert_eq!(nearest.len(), 3);
//! assert_eq!(format_distance(0.5), "500m");
//! ```

pub mod catalog;
pub mod config;
pub mod geo;
pub mod location;
pub mod maps;
pub mod ranker;
pub mod region;
pub mod server;

pub use catalog::{Catalog, PointOfInterest};
pub use geo::{distance_between, Coordinate};
pub use ranker::{format_distance, lookup_by_id, rank_by_proximity, RankError, RankedPoint};
