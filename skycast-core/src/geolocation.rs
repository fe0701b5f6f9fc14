//! Coordinate source used when the dashboard starts
//!
//! A terminal has no device location API, so the capability is an injected
//! collaborator. The shipped implementation answers from configuration.

use std::future::Future;

use crate::error::GeolocationError;
use crate::model::Coordinates;

/// One-shot coordinate lookup
pub trait Geolocator: Send + Sync + 'static {
    fn locate(&self) -> impl Future<Output = Result<Coordinates, GeolocationError>> + Send;
}

/// Answers with configured coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticGeolocator {
    coordinates: Option<Coordinates>,
    allowed: bool,
}

impl StaticGeolocator {
    /// `allowed = false` answers `PermissionDenied`; no coordinates answers `Unsupported`
    pub fn new(coordinates: Option<Coordinates>, allowed: bool) -> Self {
        Self {
            coordinates,
            allowed,
        }
    }

    pub fn at(coordinates: Coordinates) -> Self {
        Self::new(Some(coordinates), true)
    }

    pub fn denied() -> Self {
        Self::new(None, false)
    }

    pub fn unsupported() -> Self {
        Self::new(None, true)
    }

    fn resolve(&self) -> Result<Coordinates, GeolocationError> {
        if !self.allowed {
            return Err(GeolocationError::PermissionDenied);
        }
        self.coordinates.ok_or(GeolocationError::Unsupported)
    }
}

impl Geolocator for StaticGeolocator {
    async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        let result = self.resolve();
        match &result {
            Ok(coords) => tracing::debug!(%coords, "location resolved"),
            Err(e) => tracing::info!(error = %e, "location unavailable"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_coordinates() {
        let coords = Coordinates::new(52.52, 13.405);
        assert_eq!(StaticGeolocator::at(coords).locate().await, Ok(coords));
    }

    #[tokio::test]
    async fn test_denied_wins_over_coordinates() {
        let geo = StaticGeolocator::new(Some(Coordinates::new(1.0, 2.0)), false);
        assert_eq!(geo.locate().await, Err(GeolocationError::PermissionDenied));
        assert_eq!(
            StaticGeolocator::denied().locate().await,
            Err(GeolocationError::PermissionDenied)
        );
    }

    #[tokio::test]
    async fn test_no_coordinates_is_unsupported() {
        assert_eq!(
            StaticGeolocator::unsupported().locate().await,
            Err(GeolocationError::Unsupported)
        );
    }
}
