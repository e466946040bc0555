// Geographic primitives shared by the optimizer and the batcher.

use crate::error::{CleanRouteError, CrResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated latitude/longitude pair.
///
/// Construct through [`GeoPoint::new`] so out-of-range or non-finite input is
/// rejected at the boundary instead of surfacing deep inside distance math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> CrResult<Self> {
        if !lat.is_finite() || !lng.is_finite() || lat.abs() > 90.0 || lng.abs() > 180.0 {
            return Err(CleanRouteError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Great-circle distance to `other` in kilometers (haversine formula).
    pub fn haversine_km(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // 0.001 degrees of longitude at the equator is ~111 meters
        let a = GeoPoint::new(0.0, 0.0).unwrap();
        let b = GeoPoint::new(0.0, 0.001).unwrap();

        let d = a.haversine_km(&b);
        assert!((d - 0.11119).abs() < 1e-3, "got {}", d);
    }

    #[test]
    fn test_haversine_symmetry_and_identity() {
        let a = GeoPoint::new(48.8566, 2.3522).unwrap();
        let b = GeoPoint::new(52.5200, 13.4050).unwrap();

        assert_eq!(a.haversine_km(&b), b.haversine_km(&a));
        assert_eq!(a.haversine_km(&a), 0.0);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -180.5).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    }
}
