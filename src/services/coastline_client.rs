use crate::error::FetchError;
use crate::models::wire::OverpassResponse;
use crate::services::geometry::GeoPoint;
use crate::services::location_service::CoastlineSource;

const PROVIDER: &str = "coastline";

/// Client for an Overpass interpreter, asking for `natural=coastline` ways.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    http: reqwest::Client,
    url: String,
}

impl OverpassClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self { http, url: url.into() }
    }
}

pub fn coastline_query(point: GeoPoint, radius_km: f64) -> String {
    let radius_m = (radius_km * 1000.0).round() as u64;
    format!(
        "[out:json];(way(around:{},{},{})[\"natural\"=\"coastline\"];);out geom;",
        radius_m, point.lat, point.lon
    )
}

impl CoastlineSource for OverpassClient {
    async fn coastline_vertices(
        &self,
        point: GeoPoint,
        radius_km: f64,
    ) -> Result<Vec<GeoPoint>, FetchError> {
        let query = coastline_query(point, radius_km);
        tracing::debug!(%query, "requesting coastline geometry");

        let response = self
            .http
            .post(&self.url)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|source| FetchError::Transport { provider: PROVIDER, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { provider: PROVIDER, status: status.as_u16() });
        }

        let body = response
            .json::<OverpassResponse>()
            .await
            .map_err(|e| FetchError::malformed(PROVIDER, e.to_string()))?;

        Ok(vertices_from(body))
    }
}

/// Flatten the geometry of every way element.
pub fn vertices_from(body: OverpassResponse) -> Vec<GeoPoint> {
    body.elements
        .into_iter()
        .filter(|el| el.kind == "way")
        .filter_map(|el| el.geometry)
        .flatten()
        .collect()
}
