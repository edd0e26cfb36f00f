//! Location acquisition for the directory.
//!
//! A provider reports the device position; the resolver wraps it with the
//! permission check and the fallback coordinate so callers always get a
//! plain [`Position`].

pub mod providers;
pub mod resolver;
pub mod types;

pub use providers::{FixedPosition, IpGeolocator, NoPosition, PositionProvider, DEFAULT_GEOLOCATION_URL};
pub use resolver::{LocationResolver, DEFAULT_FALLBACK};
pub use types::{LocationError, LocationSource, PermissionStatus, Position};
