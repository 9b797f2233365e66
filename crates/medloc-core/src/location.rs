//! Coordinates and great-circle distance.
//!
//! Distances are geodesic on the WGS84 ellipsoid, computed with
//! [`geo::Geodesic`]. Every [`Coordinate`] is range-checked at construction,
//! so [`distance_km`] itself cannot fail.

use geo::{Distance, Geodesic, Point};
use serde::Serialize;

use crate::CoreError;

const METERS_PER_KM: f64 = 1000.0;

/// A validated `(latitude, longitude)` pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting values outside `[-90, 90]` / `[-180, 180]`
    /// as well as NaN and infinities.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] if either component is out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(CoreError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `geo` points are `(x, y)` = `(longitude, latitude)`.
    fn to_point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Geodesic distance between two coordinates in kilometers.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }
    Geodesic.distance(a.to_point(), b.to_point()) / METERS_PER_KM
}

/// Distance between two raw degree pairs, validating both first.
///
/// # Errors
///
/// Returns [`CoreError::InvalidCoordinate`] if either pair is out of range.
pub fn distance_between(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, CoreError> {
    let a = Coordinate::new(lat1, lon1)?;
    let b = Coordinate::new(lat2, lon2)?;
    Ok(distance_km(a, b))
}
