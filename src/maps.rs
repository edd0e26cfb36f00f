//! Google Maps search and directions links for a catalog entry.
//!
//! Links identify the place by "name, address" rather than coordinates, so
//! the map app shows the named place instead of a dropped pin.

use serde::Serialize;
use url::form_urlencoded;

use crate::catalog::PointOfInterest;

const SEARCH_BASE: &str = "https://www.google.com/maps/search/";
const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLinks {
    pub search: String,
    pub directions: String,
}

impl MapLinks {
    pub fn for_point(poi: &PointOfInterest) -> Self {
        Self {
            search: search_url(poi),
            directions: directions_url(poi),
        }
    }
}

fn place_query(poi: &PointOfInterest) -> String {
    format!("{}, {}", poi.name, poi.address)
}

fn build(base: &str, key: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair(key, value)
        .finish();
    format!("{}?{}", base, query)
}

/// Link that opens the entry in the map search view.
pub fn search_url(poi: &PointOfInterest) -> String {
    build(SEARCH_BASE, "query", &place_query(poi))
}

/// Link that opens driving/walking directions to the entry.
pub fn directions_url(poi: &PointOfInterest) -> String {
    build(DIRECTIONS_BASE, "destination", &place_query(poi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use url::Url;

    fn cathedral() -> PointOfInterest {
        PointOfInterest {
            id: 1,
            name: "Nhà thờ Lớn Hà Nội".into(),
            address: "40 Nhà Chung, Hàng Trống, Hoàn Kiếm, Hà Nội".into(),
            coordinate: Coordinate::new(21.0287, 105.8489),
        }
    }

    fn query_value(link: &str, key: &str) -> Option<String> {
        Url::parse(link)
            .ok()?
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_search_url() {
        let poi = cathedral();
        let link = search_url(&poi);
        assert!(link.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert_eq!(
            query_value(&link, "query").as_deref(),
            Some("Nhà thờ Lớn Hà Nội, 40 Nhà Chung, Hàng Trống, Hoàn Kiếm, Hà Nội")
        );
    }

    #[test]
    fn test_directions_url() {
        let poi = cathedral();
        let link = directions_url(&poi);
        assert!(link.starts_with("https://www.google.com/maps/dir/?api=1&destination="));
        assert_eq!(
            query_value(&link, "destination"),
            Some(format!("{}, {}", poi.name, poi.address))
        );
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let mut poi = cathedral();
        poi.name = "St. Mary & Joseph".into();
        poi.address = "1 A=B #2".into();
        let link = search_url(&poi);
        assert!(!link.contains(" & "));
        assert!(!link.contains('#'));
        assert_eq!(query_value(&link, "query").as_deref(), Some("St. Mary & Joseph, 1 A=B #2"));
    }

    #[test]
    fn test_links_bundle() {
        let poi = cathedral();
        let links = MapLinks::for_point(&poi);
        assert_eq!(links.search, search_url(&poi));
        assert_eq!(links.directions, directions_url(&poi));
    }
}
