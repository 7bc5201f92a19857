//! Great-circle distance helpers used by the coastline search.

use serde::Deserialize;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Haversine distance in km. NaN inputs propagate.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Minimum distance from `origin` to any of `vertices`; `None` when there are none.
pub fn nearest_distance_km<'a, I>(origin: GeoPoint, vertices: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a GeoPoint>,
{
    vertices
        .into_iter()
        .map(|v| distance_km(origin.lat, origin.lon, v.lat, v.lon))
        .fold(None, |min: Option<f64>, d| match min {
            Some(m) if m <= d => Some(m),
            _ => Some(d),
        })
}
