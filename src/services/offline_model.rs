//! Approximate site model used when offline mode is on. No network calls.
//!
//! Irradiation: a 1000 kWh/m²/year baseline attenuated by `cos(|lat|)^1.5`
//! (floored at 0.2), spread evenly over the twelve months. Coast distance is
//! the nearest of a handful of reference coast points.

use crate::error::IrradiationError;
use crate::models::irradiation::{round_to, MonthlyIrradiation};
use crate::models::site::{coordinate_name, CoastDistance, SiteLocation, SiteSource};
use crate::services::geometry::{nearest_distance_km, GeoPoint};

const BASELINE_ANNUAL_KWH_M2: f64 = 1000.0;
const MIN_ATTENUATION: f64 = 0.2;

const REFERENCE_COAST_POINTS: [GeoPoint; 6] = [
    GeoPoint { lat: 0.0, lon: 0.0 },      // Gulf of Guinea
    GeoPoint { lat: 0.0, lon: -78.5 },    // Pacific coast, Ecuador
    GeoPoint { lat: 52.0, lon: 4.0 },     // North Sea, Netherlands
    GeoPoint { lat: -24.5, lon: -70.0 },  // Chile
    GeoPoint { lat: 33.0, lon: -118.0 },  // Los Angeles
    GeoPoint { lat: -29.0, lon: 17.0 },   // Namibia
];

pub fn annual_irradiation(lat: f64) -> f64 {
    let attenuation = lat.abs().to_radians().cos().powf(1.5).max(MIN_ATTENUATION);
    BASELINE_ANNUAL_KWH_M2 * attenuation
}

pub fn estimate_site(point: GeoPoint) -> Result<SiteLocation, IrradiationError> {
    let monthly = MonthlyIrradiation::from_totals([annual_irradiation(point.lat) / 12.0; 12])?;

    let distance = nearest_distance_km(point, &REFERENCE_COAST_POINTS)
        .map(|d| CoastDistance::Km(round_to(d, 2)))
        .unwrap_or(CoastDistance::BeyondSearchRadius);

    Ok(SiteLocation {
        id: "offline".to_string(),
        name: coordinate_name(point.lat, point.lon),
        latitude: point.lat,
        longitude: point.lon,
        distance_to_coast_km: distance,
        nearest_river: None,
        monthly,
        source: SiteSource::Offline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::irradiation_service::summarize;

    #[test]
    fn test_equator_gets_full_baseline() {
        assert!((annual_irradiation(0.0) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_polar_floor() {
        assert!((annual_irradiation(89.0) - 200.0).abs() < 1e-9);
        assert!((annual_irradiation(-90.0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_site_is_even_and_consistent() {
        let site = estimate_site(GeoPoint { lat: 52.52, lon: 13.405 }).unwrap();
        let s = summarize(&site.monthly);
        assert!((s.total_annual - annual_irradiation(52.52)).abs() < 1e-9);
        assert_eq!(site.source, SiteSource::Offline);
        // Berlin → nearest reference point is the Dutch coast
        let km = site.distance_to_coast_km.km().unwrap();
        assert!(km > 500.0 && km < 800.0, "got {km}");
    }

    #[test]
    fn test_reference_point_itself_is_zero() {
        let site = estimate_site(GeoPoint { lat: -29.0, lon: 17.0 }).unwrap();
        assert_eq!(site.distance_to_coast_km, CoastDistance::Km(0.0));
    }
}
