//! Geographic coordinates and great-circle distance.

use std::f64::consts::PI;
use std::fmt;

/// Mean Earth radius used for distance calculations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Coordinates are transient: one is built per request for the caller's
/// origin and one per station while ranking. No range validation is applied,
/// since upstream data is passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_distance_km(*self, *other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Degrees to radians as `(deg * PI) / 180`.
///
/// `f64::to_radians` multiplies by a pre-divided constant and can differ in
/// the last bit.
fn to_rad(deg: f64) -> f64 {
    (deg * PI) / 180.0
}

/// Haversine distance between two points in kilometres.
///
/// Symmetric in its arguments and exactly `0.0` for identical points.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::{Coordinate, haversine_distance_km};
///
/// let madrid = Coordinate::new(40.4168, -3.7038);
/// assert_eq!(haversine_distance_km(madrid, madrid), 0.0);
/// ```
pub fn haversine_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = to_rad(b.lat - a.lat);
    let d_lon = to_rad(b.lon - a.lon);

    let lat1 = to_rad(a.lat);
    let lat2 = to_rad(b.lat);

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();

    let h = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lon * sin_lon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
