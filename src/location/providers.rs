//! Position providers: IP geolocation, a fixed coordinate, and "none".

use serde::Deserialize;
use std::time::Duration;

use super::types::{LocationError, PermissionStatus};
use crate::geo::Coordinate;

/// Default IP geolocation endpoint.
pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipapi.co/json/";

const USER_AGENT: &str = concat!("ChurchLocator/", env!("CARGO_PKG_VERSION"));

/// Something that can report the current geographic position.
///
/// Mirrors a mobile location API: permission is requested first, and the
/// position is only read once permission is granted.
pub trait PositionProvider {
    fn request_permission(&mut self) -> PermissionStatus;

    fn current_position(&mut self) -> Result<Coordinate, LocationError>;
}

// ─── IP-based geolocation ───────────────────────────────────────

#[derive(Deserialize)]
struct IpApiResult {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Looks up the approximate position of this machine from its public IP.
pub struct IpGeolocator {
    url: String,
    timeout: Duration,
}

impl IpGeolocator {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl Default for IpGeolocator {
    fn default() -> Self {
        Self::new(DEFAULT_GEOLOCATION_URL)
    }
}

impl PositionProvider for IpGeolocator {
    // Public IP lookup needs no user consent.
    fn request_permission(&mut self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn current_position(&mut self) -> Result<Coordinate, LocationError> {
        let response = ureq::get(&self.url)
            .set("User-Agent", USER_AGENT)
            .timeout(self.timeout)
            .call()
            .map_err(|e| LocationError::Network(e.to_string()))?;

        let body: IpApiResult = response
            .into_json()
            .map_err(|e| LocationError::InvalidResponse(e.to_string()))?;

        parse_ip_result(body)
    }
}

fn parse_ip_result(body: IpApiResult) -> Result<Coordinate, LocationError> {
    let lat = body
        .latitude
        .ok_or_else(|| LocationError::InvalidResponse("no latitude".into()))?;
    let lon = body
        .longitude
        .ok_or_else(|| LocationError::InvalidResponse("no longitude".into()))?;
    Ok(Coordinate::new(lat, lon))
}

// ─── Fixed and absent providers ─────────────────────────────────

/// A provider that always reports the same coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinate);

impl PositionProvider for FixedPosition {
    fn request_permission(&mut self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn current_position(&mut self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// A provider with no position source; permission is always denied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPosition;

impl PositionProvider for NoPosition {
    fn request_permission(&mut self) -> PermissionStatus {
        PermissionStatus::Denied
    }

    fn current_position(&mut self) -> Result<Coordinate, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ip_result() {
        let body: IpApiResult =
            serde_json::from_str(r#"{"latitude": 10.8231, "longitude": 106.6297, "city": "Ho Chi Minh City"}"#)
                .unwrap();
        let c = parse_ip_result(body).unwrap();
        assert_eq!(c, Coordinate::new(10.8231, 106.6297));
    }

    #[test]
    fn test_parse_ip_result_missing_field() {
        let body: IpApiResult = serde_json::from_str(r#"{"latitude": 10.0}"#).unwrap();
        let err = parse_ip_result(body).unwrap_err();
        assert!(matches!(err, LocationError::InvalidResponse(_)));
    }

    #[test]
    fn test_bad_endpoint_is_network_error() {
        let mut provider = IpGeolocator::new("not a url");
        assert_eq!(provider.request_permission(), PermissionStatus::Granted);
        assert!(matches!(
            provider.current_position(),
            Err(LocationError::Network(_))
        ));
    }

    #[test]
    fn test_fixed_position() {
        let mut provider = FixedPosition(Coordinate::new(1.0, 2.0));
        assert_eq!(provider.request_permission(), PermissionStatus::Granted);
        assert_eq!(provider.current_position().unwrap(), Coordinate::new(1.0, 2.0));
    }

    #[test]
    fn test_no_position() {
        let mut provider = NoPosition;
        assert_eq!(provider.request_permission(), PermissionStatus::Denied);
        assert!(provider.current_position().is_err());
    }
}
