use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Trait for types that can provide a latitude and longitude in degrees.
///
/// Implemented for [`LatLon`], `(f64, f64)` tuples in `(lon, lat)` order and
/// `geo_types::Point<f64>` (x is longitude, y is latitude). This allows the
/// encoding functions to accept any of them.
pub trait Coordinate {
    /// Returns the latitude in degrees.
    fn lat(&self) -> f64;
    /// Returns the longitude in degrees.
    fn lon(&self) -> f64;
}

/// A latitude/longitude coordinate in degrees.
///
/// Decoded coordinates have `-90 <= lat <= 90` and `0 <= lon < 360`. At a
/// pole (`lat` exactly -90 or 90) the longitude is always 0 and carries no
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    /// Latitude, from -90 (south pole) to 90 (north pole)
    pub lat: f64,
    /// Longitude; any value is accepted for encoding and wrapped to 0..360
    pub lon: f64,
}

impl LatLon {
    /// Creates a coordinate from a latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns true if this coordinate lies exactly on either pole.
    pub fn is_pole(&self) -> bool {
        self.lat == -90.0 || self.lat == 90.0
    }
}

impl Coordinate for LatLon {
    fn lat(&self) -> f64 {
        self.lat
    }
    fn lon(&self) -> f64 {
        self.lon
    }
}

impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 {
        self.1
    }
    fn lon(&self) -> f64 {
        self.0
    }
}

impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lon(&self) -> f64 {
        self.x()
    }
}

impl From<LatLon> for Point<f64> {
    fn from(coord: LatLon) -> Self {
        Point::new(coord.lon, coord.lat)
    }
}

impl From<Point<f64>> for LatLon {
    fn from(point: Point<f64>) -> Self {
        LatLon::new(point.y(), point.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (100.0, 20.0);
        assert_eq!(tuple.lon(), 100.0);
        assert_eq!(tuple.lat(), 20.0);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(100.0, 20.0);
        assert_eq!(point.lon(), 100.0);
        assert_eq!(point.lat(), 20.0);
    }

    #[test]
    fn test_point_conversion() {
        let coord = LatLon::new(53.48, 357.75);
        let point: Point<f64> = coord.into();
        assert_eq!(point.x(), 357.75);
        assert_eq!(point.y(), 53.48);
        assert_eq!(LatLon::from(point), coord);
    }

    #[test]
    fn test_is_pole() {
        assert!(LatLon::new(90.0, 0.0).is_pole());
        assert!(LatLon::new(-90.0, 0.0).is_pole());
        assert!(!LatLon::new(89.9, 0.0).is_pole());
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&LatLon::new(10.0, 96.0)).unwrap();
        assert_eq!(json, r#"{"lat":10.0,"lon":96.0}"#);

        let back: LatLon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LatLon::new(10.0, 96.0));
    }
}
