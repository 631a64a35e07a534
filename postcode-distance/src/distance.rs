//! Coordinates and great-circle distance.

use geo::{Distance, Haversine, Point};

/// A (latitude, longitude) pair in decimal degrees.
pub type Coordinate = (f64, f64);

/// Great-circle distance between two coordinates, in kilometres.
///
/// Uses the mean Earth radius (6371.0088 km).
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    // geo points are (x = longitude, y = latitude)
    let a = Point::new(a.1, a.0);
    let b = Point::new(b.1, b.0);
    Haversine.distance(a, b) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_YORK: Coordinate = (40.7506, -73.9972);
    const SAN_FRANCISCO: Coordinate = (37.7898, -122.3942);

    #[test]
    fn same_point_is_zero() {
        assert_eq!(haversine_km(NEW_YORK, NEW_YORK), 0.0);
    }

    #[test]
    fn new_york_to_san_francisco() {
        let d = haversine_km(NEW_YORK, SAN_FRANCISCO);
        assert!((d - 4130.0).abs() < 15.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = haversine_km((0.0, 0.0), (1.0, 0.0));
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn antipodes() {
        let d = haversine_km((0.0, 0.0), (0.0, 180.0));
        assert!((d - 20015.1).abs() < 1.0, "got {d}");
    }
}
