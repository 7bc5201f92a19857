use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::irradiation::IrradiationSummary;
use crate::models::site::SiteLocation;

// ─── Site report ─────────────────────────────────────────────────────────────

/// One bar of the monthly chart / one row of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MonthlyRow {
    pub month: String,
    /// Monthly total (kWh/m²/month)
    pub total_kwh_m2: f64,
    /// Monthly total / days in month (kWh/m²/day)
    pub per_day_kwh_m2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Feedstock {
    Seawater,
    Freshwater,
}

/// Water source recommendation for the electrolyzer.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FeedstockAdvice {
    pub recommended: Feedstock,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SiteReport {
    pub site: SiteLocation,
    pub summary: IrradiationSummary,
    pub monthly: Vec<MonthlyRow>,
    /// e.g. "50 km" or "More than 100 km"
    pub distance_to_coast_display: String,
    pub feedstock: FeedstockAdvice,
}

// ─── REST API response types ─────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogListing {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub total_annual_kwh_m2: f64,
    pub distance_to_coast_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_river_display: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LookupQuery {
    /// Latitude in degrees (-90..90)
    pub lat: f64,
    /// Longitude in degrees (-180..180)
    pub lon: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OfflineModeBody {
    pub offline_mode: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub catalog_sites: usize,
    pub offline_mode: bool,
    pub site_selected: bool,
}
