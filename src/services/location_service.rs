//! Location lookup for an arbitrary coordinate.
//!
//! A live lookup runs the climatology and coastline fetches concurrently, each
//! under its own timeout, and joins them into one [`SiteLocation`]. Either
//! failure fails the whole lookup, so no partially-filled site ever escapes.
//! With offline mode on the approximate model answers instead.

use std::future::Future;
use std::time::Duration;

use crate::config::ProviderConfig;
use crate::error::FetchError;
use crate::models::irradiation::{round_to, MonthlyIrradiation};
use crate::models::site::{coordinate_name, CoastDistance, SiteLocation, SiteSource};
use crate::services::climatology_client::NasaPowerClient;
use crate::services::coastline_client::OverpassClient;
use crate::services::geometry::{nearest_distance_km, GeoPoint};
use crate::services::offline_model;

/// Source of monthly climatology: average daily irradiance (kWh/m²/day), Jan..Dec.
pub trait ClimatologySource: Send + Sync {
    fn daily_averages(
        &self,
        point: GeoPoint,
    ) -> impl Future<Output = Result<[f64; 12], FetchError>> + Send;
}

/// Source of coastline vertices within a radius of a point.
pub trait CoastlineSource: Send + Sync {
    fn coastline_vertices(
        &self,
        point: GeoPoint,
        radius_km: f64,
    ) -> impl Future<Output = Result<Vec<GeoPoint>, FetchError>> + Send;
}

pub type HttpLocationService = LocationService<NasaPowerClient, OverpassClient>;

pub struct LocationService<C, K> {
    climatology: C,
    coastline: K,
    radius_km: f64,
    timeout: Duration,
}

impl HttpLocationService {
    pub fn from_config(cfg: &ProviderConfig) -> Self {
        let http = reqwest::Client::new();
        LocationService::new(
            NasaPowerClient::new(http.clone(), cfg.climatology_url.clone()),
            OverpassClient::new(http, cfg.overpass_url.clone()),
            cfg.coast_search_radius_km,
            Duration::from_secs(cfg.timeout_s),
        )
    }
}

pub fn validate_coordinate(lat: f64, lon: f64) -> Result<GeoPoint, FetchError> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(FetchError::InvalidCoordinate(format!(
            "Latitude {} out of range [-90, 90]",
            lat
        )));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(FetchError::InvalidCoordinate(format!(
            "Longitude {} out of range [-180, 180]",
            lon
        )));
    }
    Ok(GeoPoint { lat, lon })
}

async fn with_timeout<T>(
    provider: &'static str,
    limit: Duration,
    fut: impl Future<Output = Result<T, FetchError>>,
) -> Result<T, FetchError> {
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout { provider, seconds: limit.as_secs() }),
    }
}

impl<C: ClimatologySource, K: CoastlineSource> LocationService<C, K> {
    pub fn new(climatology: C, coastline: K, radius_km: f64, timeout: Duration) -> Self {
        Self { climatology, coastline, radius_km, timeout }
    }

    /// Resolve a clicked coordinate, either live or through the offline model.
    pub async fn locate(&self, lat: f64, lon: f64, offline: bool) -> Result<SiteLocation, FetchError> {
        let point = validate_coordinate(lat, lon)?;
        if offline {
            tracing::info!(lat, lon, "offline mode: using approximate site model");
            return offline_model::estimate_site(point)
                .map_err(|e| FetchError::malformed("offline model", e.to_string()));
        }
        self.lookup(point).await
    }

    async fn lookup(&self, point: GeoPoint) -> Result<SiteLocation, FetchError> {
        let (daily, vertices) = tokio::join!(
            with_timeout("climatology", self.timeout, self.climatology.daily_averages(point)),
            with_timeout(
                "coastline",
                self.timeout,
                self.coastline.coastline_vertices(point, self.radius_km)
            ),
        );
        let daily = daily?;
        let vertices = vertices?;

        let monthly = MonthlyIrradiation::from_daily_averages(daily)
            .map_err(|e| FetchError::malformed("climatology", e.to_string()))?;

        #[cfg(feature = "verbose_log")]
        for (month, total) in monthly.iter() {
            tracing::debug!(month = month.label(), total, "live monthly irradiation");
        }

        let distance = match nearest_distance_km(point, &vertices) {
            Some(d) => CoastDistance::Km(round_to(d, 1)),
            None => CoastDistance::BeyondSearchRadius,
        };

        tracing::info!(
            lat = point.lat,
            lon = point.lon,
            coast = %distance,
            vertices = vertices.len(),
            "live lookup complete"
        );

        Ok(SiteLocation {
            id: "live".to_string(),
            name: coordinate_name(point.lat, point.lon),
            latitude: point.lat,
            longitude: point.lon,
            distance_to_coast_km: distance,
            nearest_river: None,
            monthly,
            source: SiteSource::Live,
        })
    }
}
