use crate::core::error::RankError;
use crate::models::GeoPoint;

/// Earth's mean radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Calculate the Haversine distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in miles
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1.0 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Great-circle distance between two points in miles
#[inline]
pub fn distance_between(p1: GeoPoint, p2: GeoPoint) -> f64 {
    haversine_distance(p1.lat, p1.lon, p2.lat, p2.lon)
}

/// Like [`distance_between`], but rejects non-finite coordinates
pub fn checked_distance(p1: GeoPoint, p2: GeoPoint) -> Result<f64, RankError> {
    ensure_finite(p1)?;
    ensure_finite(p2)?;
    Ok(distance_between(p1, p2))
}

pub(crate) fn ensure_finite(point: GeoPoint) -> Result<(), RankError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(RankError::InvalidInput(format!(
            "coordinates must be finite numbers, got ({}, {})",
            point.lat, point.lon
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: GeoPoint = GeoPoint::new(51.5, -0.12);
    const EDINBURGH: GeoPoint = GeoPoint::new(55.95, -3.19);

    #[test]
    fn test_haversine_distance() {
        // London to Paris is roughly 213 miles
        let distance = haversine_distance(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((distance - 213.0).abs() < 5.0, "Distance should be ~213mi, got {}", distance);
    }

    #[test]
    fn test_london_to_edinburgh() {
        let distance = distance_between(LONDON, EDINBURGH);
        assert!((distance - 330.0).abs() < 5.0, "Distance should be ~330mi, got {}", distance);
    }

    #[test]
    fn test_identity_is_zero() {
        assert_eq!(distance_between(LONDON, LONDON), 0.0);
        assert_eq!(distance_between(GeoPoint::new(-33.9, 151.2), GeoPoint::new(-33.9, 151.2)), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let ab = distance_between(LONDON, EDINBURGH);
        let ba = distance_between(EDINBURGH, LONDON);
        assert!((ab - ba).abs() <= ab * 1e-9);
    }

    #[test]
    fn test_antipodes_are_half_circumference() {
        let distance = distance_between(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_MILES;
        assert!((distance - half).abs() < 1e-6);
    }

    #[test]
    fn test_near_antipodal_points_are_finite() {
        let half = std::f64::consts::PI * EARTH_RADIUS_MILES;
        let pairs = [
            (
                GeoPoint::new(-31.386408890614128, 21.770003002833562),
                GeoPoint::new(31.386409184482563, -158.22999710567257),
            ),
            (GeoPoint::new(85.995, 86.821), GeoPoint::new(-85.995, -93.179)),
            (GeoPoint::new(12.5, -45.0), GeoPoint::new(-12.5, 135.0)),
        ];

        for (a, b) in pairs {
            let distance = distance_between(a, b);
            assert!(distance.is_finite(), "{:?} -> {:?} gave {}", a, b, distance);
            assert!(distance <= half + 1e-6);
            assert!((distance - half).abs() < 1.0, "{:?} -> {:?} gave {}", a, b, distance);
        }
    }

    #[test]
    fn test_finite_input_gives_finite_output() {
        for step in 0..=360 {
            let lat = -90.0 + step as f64 * 0.5;
            let lon = -180.0 + step as f64;
            let a = GeoPoint::new(lat, lon);
            let b = GeoPoint::new(-lat + 1e-9 * step as f64, lon + 180.0 - 1e-9);
            let distance = distance_between(a, b);
            assert!(distance.is_finite() && distance >= 0.0, "{:?} -> {:?}", a, b);
        }
    }

    #[test]
    fn test_checked_distance_rejects_nan() {
        let err = checked_distance(GeoPoint::new(f64::NAN, 0.0), LONDON).unwrap_err();
        assert!(matches!(err, RankError::InvalidInput(_)));
        assert!(checked_distance(LONDON, GeoPoint::new(0.0, f64::NEG_INFINITY)).is_err());
        assert!(checked_distance(LONDON, EDINBURGH).is_ok());
    }
}
