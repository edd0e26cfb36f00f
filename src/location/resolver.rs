//! Location resolver — turns a provider into a usable position.
//!
//! Flow:  request permission → read position → fallback coordinate
//!
//! Denied permission and provider failures both end in the fallback
//! coordinate; the resolver never returns an error.

use tracing::{info, warn};

use super::providers::PositionProvider;
use super::types::{LocationSource, PermissionStatus, Position};
use crate::geo::Coordinate;

/// Hanoi city center.
pub const DEFAULT_FALLBACK: Coordinate = Coordinate::new(21.0285, 105.8542);

/// Resolves the reference position, substituting a fixed default on failure.
#[derive(Debug, Clone, Copy)]
pub struct LocationResolver {
    fallback: Coordinate,
}

impl LocationResolver {
    pub fn new(fallback: Coordinate) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> Coordinate {
        self.fallback
    }

    /// Ask `provider` for the current position, falling back when permission
    /// is not granted or the provider fails.
    pub fn locate<P: PositionProvider + ?Sized>(&self, provider: &mut P) -> Position {
        let permission = provider.request_permission();
        if permission != PermissionStatus::Granted {
            info!(?permission, fallback = %self.fallback, "location permission not granted, using default");
            return self.fallback_position(permission);
        }

        match provider.current_position() {
            Ok(coordinate) => {
                info!(%coordinate, "acquired current position");
                Position {
                    coordinate,
                    source: LocationSource::Device,
                    permission,
                }
            }
            Err(e) => {
                warn!(error = %e, fallback = %self.fallback, "could not get current position, using default");
                self.fallback_position(permission)
            }
        }
    }

    /// The fallback position, as used when no provider is consulted.
    pub fn fallback_position(&self, permission: PermissionStatus) -> Position {
        Position {
            coordinate: self.fallback,
            source: LocationSource::Fallback,
            permission,
        }
    }
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK)
    }
}
