use tracing::debug;

use super::haversine_distance;
use crate::models::{Coordinate, HospitalRecord, ResolutionResult};

/// Find the hospital closest to `query`.
///
/// Linear scan with a strict `<`, so the first record wins ties. Records
/// whose distance comes out NaN never replace the running minimum. An
/// empty slice yields [`ResolutionResult::none`].
pub fn resolve_nearest<'a>(
    query: Coordinate,
    hospitals: &'a [HospitalRecord],
) -> ResolutionResult<'a> {
    let mut nearest = ResolutionResult::none();

    for hospital in hospitals {
        let distance = haversine_distance(query, hospital.coordinate());
        if distance < nearest.distance_meters {
            nearest = ResolutionResult {
                hospital: Some(hospital),
                distance_meters: distance,
            };
        }
    }

    debug!(
        "Nearest hospital to ({}): {:?} at {:.1} m ({} candidates)",
        query,
        nearest.hospital.map(|h| h.name.as_str()),
        nearest.distance_meters,
        hospitals.len()
    );

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hospital(name: &str, latitude: f64, longitude: f64) -> HospitalRecord {
        HospitalRecord::new(name, "", "+10000000000", latitude, longitude)
    }

    #[test]
    fn test_empty_directory() {
        let result = resolve_nearest(Coordinate::new(28.6, 77.2), &[]);
        assert!(result.is_none());
        assert_eq!(result.distance_meters, f64::INFINITY);
    }

    #[test]
    fn test_query_at_hospital() {
        let hospitals = vec![hospital("A", 28.60, 77.20)];
        let result = resolve_nearest(Coordinate::new(28.60, 77.20), &hospitals);
        assert_eq!(result.hospital.map(|h| h.name.as_str()), Some("A"));
        assert!(result.distance_meters.abs() < 1e-6);
    }

    #[test]
    fn test_returns_global_minimum() {
        let hospitals = vec![
            hospital("far", 29.5, 78.0),
            hospital("near", 28.61, 77.21),
            hospital("middle", 28.7, 77.3),
        ];
        let query = Coordinate::new(28.60, 77.20);
        let result = resolve_nearest(query, &hospitals);

        assert_eq!(result.hospital.map(|h| h.name.as_str()), Some("near"));
        for h in &hospitals {
            assert!(result.distance_meters <= haversine_distance(query, h.coordinate()));
        }
    }

    #[test]
    fn test_tie_keeps_first() {
        // Mirror images across the query meridian are equidistant
        let hospitals = vec![
            hospital("east", 10.0, 20.5),
            hospital("west", 10.0, 19.5),
        ];
        let query = Coordinate::new(10.0, 20.0);
        let d_east = haversine_distance(query, hospitals[0].coordinate());
        let d_west = haversine_distance(query, hospitals[1].coordinate());
        assert_eq!(d_east, d_west);

        let result = resolve_nearest(query, &hospitals);
        assert_eq!(result.hospital.map(|h| h.name.as_str()), Some("east"));

        let reversed: Vec<_> = hospitals.iter().rev().cloned().collect();
        let result = resolve_nearest(query, &reversed);
        assert_eq!(result.hospital.map(|h| h.name.as_str()), Some("west"));
    }

    #[test]
    fn test_duplicate_records_keep_first() {
        let hospitals = vec![hospital("first", 28.0, 77.0), hospital("second", 28.0, 77.0)];
        let result = resolve_nearest(Coordinate::new(28.1, 77.1), &hospitals);
        assert_eq!(result.hospital.map(|h| h.name.as_str()), Some("first"));
    }

    #[test]
    fn test_hardcoded_user_location_two_hospitals() {
        let aiims = hospital("AIIMS", 28.5672, 77.2090);
        let safdarjung = hospital("Safdarjung", 28.5693, 77.2038);
        let query = Coordinate::new(28.6304, 77.2177);

        let d_aiims = haversine_distance(query, aiims.coordinate());
        let d_safdarjung = haversine_distance(query, safdarjung.coordinate());
        assert!((d_aiims - 7078.7).abs() < 1.0, "AIIMS at {}", d_aiims);
        assert!((d_safdarjung - 6928.2).abs() < 1.0, "Safdarjung at {}", d_safdarjung);
        assert!(d_safdarjung < d_aiims);

        let hospitals = vec![aiims, safdarjung];
        let result = resolve_nearest(query, &hospitals);
        assert_eq!(result.hospital.map(|h| h.name.as_str()), Some("Safdarjung"));
        assert_eq!(result.distance_meters, d_safdarjung);
    }

    #[test]
    fn test_nan_records_skipped() {
        let hospitals = vec![hospital("broken", f64::NAN, 77.0), hospital("ok", 28.0, 77.0)];
        let result = resolve_nearest(Coordinate::new(28.0, 77.0), &hospitals);
        assert_eq!(result.hospital.map(|h| h.name.as_str()), Some("ok"));
    }

    #[test]
    fn test_nan_query_yields_none() {
        let hospitals = vec![hospital("A", 28.0, 77.0)];
        let result = resolve_nearest(Coordinate::new(f64::NAN, 77.0), &hospitals);
        assert!(result.is_none());
        assert_eq!(result.distance_meters, f64::INFINITY);
    }
}
