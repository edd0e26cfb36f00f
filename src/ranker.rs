//! Nearest-first ranking over a catalog of points of interest.
//!
//! Every function here is pure: the catalog is only read, and the output
//! depends on nothing but the arguments.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::catalog::PointOfInterest;
use crate::geo::{distance_between, Coordinate};

/// Errors signaled by the ranker.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    /// The caller passed an argument outside the contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A catalog entry together with its distance from the ranking origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedPoint<'a> {
    #[serde(flatten)]
    pub point: &'a PointOfInterest,
    pub distance_km: f64,
}

impl RankedPoint<'_> {
    /// The distance rendered by [`format_distance`].
    pub fn formatted_distance(&self) -> String {
        format_distance(self.distance_km)
    }
}

/// Rank `catalog` by distance from `origin`, nearest first.
///
/// Entries at equal distance keep their catalog order. With `limit` set,
/// only the first `limit` entries are returned; a limit larger than the
/// catalog returns everything. A negative limit is rejected.
pub fn rank_by_proximity<'a>(
    origin: &Coordinate,
    catalog: &'a [PointOfInterest],
    limit: Option<i64>,
) -> Result<Vec<RankedPoint<'a>>, RankError> {
    let take = match limit {
        Some(n) if n < 0 => {
            return Err(RankError::InvalidArgument(format!(
                "limit must be non-negative, got {}",
                n
            )))
        }
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
        None => usize::MAX,
    };

    let mut ranked: Vec<RankedPoint<'a>> = catalog
        .iter()
        .map(|point| RankedPoint {
            point,
            distance_km: distance_between(origin, &point.coordinate),
        })
        .collect();

    // `sort_by` is stable, which is what keeps ties in catalog order.
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(take);

    debug!(
        origin = %origin,
        candidates = catalog.len(),
        returned = ranked.len(),
        "ranked catalog by proximity"
    );

    Ok(ranked)
}

/// Render a distance for display: whole meters below 1 km, otherwise
/// kilometers with two decimals. Meters round half away from zero.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else {
        format!("{:.2}km", km)
    }
}

/// Find the entry with the given id, if any.
pub fn lookup_by_id(catalog: &[PointOfInterest], id: i64) -> Option<&PointOfInterest> {
    catalog.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn poi(id: i64, lat: f64, lon: f64) -> PointOfInterest {
        PointOfInterest {
            id,
            name: format!("Point {}", id),
            address: format!("{} Test Street", id),
            coordinate: Coordinate::new(lat, lon),
        }
    }

    fn fixture() -> Vec<PointOfInterest> {
        vec![
            poi(1, 10.7798, 106.6990), // Saigon
            poi(2, 21.0287, 105.8489), // Hanoi
            poi(3, 16.0669, 108.2231), // Da Nang
            poi(4, 21.0414, 105.8427), // Hanoi, a little north
        ]
    }

    const HANOI: Coordinate = Coordinate::new(21.0285, 105.8542);

    #[test]
    fn test_rank_sorted_ascending() {
        let catalog = fixture();
        let ranked = rank_by_proximity(&HANOI, &catalog, None).unwrap();
        let ids: Vec<i64> = ranked.iter().map(|r| r.point.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn test_rank_limit_takes_prefix() {
        let catalog = fixture();
        let ranked = rank_by_proximity(&HANOI, &catalog, Some(2)).unwrap();
        let ids: Vec<i64> = ranked.iter().map(|r| r.point.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_rank_limit_larger_than_catalog() {
        let catalog = fixture();
        let ranked = rank_by_proximity(&HANOI, &catalog, Some(100)).unwrap();
        assert_eq!(ranked.len(), catalog.len());
    }

    #[test]
    fn test_rank_limit_zero_is_empty() {
        let catalog = fixture();
        assert!(rank_by_proximity(&HANOI, &catalog, Some(0)).unwrap().is_empty());
    }

    #[test]
    fn test_rank_negative_limit_rejected() {
        let catalog = fixture();
        let err = rank_by_proximity(&HANOI, &catalog, Some(-1)).unwrap_err();
        assert!(matches!(err, RankError::InvalidArgument(_)));
    }

    #[test]
    fn test_rank_empty_catalog() {
        assert!(rank_by_proximity(&HANOI, &[], None).unwrap().is_empty());
        assert!(rank_by_proximity(&HANOI, &[], Some(3)).unwrap().is_empty());
    }

    #[test]
    fn test_rank_ties_keep_catalog_order() {
        let catalog = vec![
            poi(7, 12.0, 108.0),
            poi(3, 12.0, 108.0),
            poi(5, 12.0, 108.0),
            poi(1, 21.0, 105.8),
        ];
        let ranked = rank_by_proximity(&HANOI, &catalog, None).unwrap();
        let ids: Vec<i64> = ranked.iter().map(|r| r.point.id).collect();
        assert_eq!(ids, vec![1, 7, 3, 5]);
    }

    #[test]
    fn test_rank_does_not_mutate_catalog() {
        let catalog = fixture();
        let before = catalog.clone();
        let _ = rank_by_proximity(&HANOI, &catalog, Some(1)).unwrap();
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_format_meters() {
        assert_eq!(format_distance(0.5), "500m");
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(0.1234), "123m");
    }

    #[test]
    fn test_format_half_meter_rounds_up() {
        assert_eq!(format_distance(0.0005), "1m");
        assert_eq!(format_distance(0.0004), "0m");
    }

    #[test]
    fn test_format_kilometers() {
        assert_eq!(format_distance(1.0), "1.00km");
        assert_eq!(format_distance(12.3456), "12.35km");
        assert_eq!(format_distance(1143.5), "1143.50km");
    }

    #[test]
    fn test_formatted_distance_on_ranked_point() {
        let catalog = vec![poi(1, 21.0285, 105.8542)];
        let ranked = rank_by_proximity(&HANOI, &catalog, None).unwrap();
        assert_eq!(ranked[0].formatted_distance(), "0m");
    }

    #[test]
    fn test_lookup_found() {
        let catalog = fixture();
        assert_eq!(lookup_by_id(&catalog, 3).map(|p| p.id), Some(3));
    }

    #[test]
    fn test_lookup_missing() {
        let catalog = fixture();
        assert!(lookup_by_id(&catalog, 42).is_none());
        assert!(lookup_by_id(&[], 1).is_none());
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<PointOfInterest>> {
        prop::collection::vec((-90.0f64..=90.0, -180.0f64..=180.0), 0..40).prop_map(|coords| {
            coords
                .into_iter()
                .enumerate()
                .map(|(i, (lat, lon))| poi(i as i64, lat, lon))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_distance_non_negative_and_symmetric(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let a = Coordinate::new(lat1, lon1);
            let b = Coordinate::new(lat2, lon2);
            let ab = distance_between(&a, &b);
            let ba = distance_between(&b, &a);
            prop_assert!(ab >= 0.0 && ab.is_finite());
            prop_assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0));
            prop_assert_eq!(distance_between(&a, &a), 0.0);
        }

        #[test]
        fn prop_ranking_sorted(
            catalog in arb_catalog(),
            lat in -90.0f64..=90.0, lon in -180.0f64..=180.0,
        ) {
            let origin = Coordinate::new(lat, lon);
            let ranked = rank_by_proximity(&origin, &catalog, None).unwrap();
            prop_assert_eq!(ranked.len(), catalog.len());
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].distance_km <= pair[1].distance_km);
            }
        }

        #[test]
        fn prop_limit_is_prefix_of_full_ranking(
            catalog in arb_catalog(),
            lat in -90.0f64..=90.0, lon in -180.0f64..=180.0,
            k in 0i64..50,
        ) {
            let origin = Coordinate::new(lat, lon);
            let full = rank_by_proximity(&origin, &catalog, None).unwrap();
            let limited = rank_by_proximity(&origin, &catalog, Some(k)).unwrap();
            let expected = (k as usize).min(catalog.len());
            prop_assert_eq!(limited.len(), expected);
            prop_assert_eq!(&limited[..], &full[..expected]);
        }
    }
}
