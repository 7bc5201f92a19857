use std::fmt;

use serde::ser::{Serialize, Serializer};
use utoipa::ToSchema;

use crate::models::irradiation::MonthlyIrradiation;

/// Distance from a site to the nearest coastline vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoastDistance {
    Km(f64),
    /// No coastline found inside the search radius.
    BeyondSearchRadius,
}

impl CoastDistance {
    pub fn km(&self) -> Option<f64> {
        match self {
            CoastDistance::Km(d) => Some(*d),
            CoastDistance::BeyondSearchRadius => None,
        }
    }
}

/// Serialized as a number, or `"More than 100"` for the sentinel.
impl Serialize for CoastDistance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CoastDistance::Km(d) => serializer.serialize_f64(*d),
            CoastDistance::BeyondSearchRadius => serializer.serialize_str("More than 100"),
        }
    }
}

impl fmt::Display for CoastDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoastDistance::Km(d) => write!(f, "{} km", d),
            CoastDistance::BeyondSearchRadius => write!(f, "More than 100 km"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, ToSchema)]
pub struct RiverDistance {
    pub river: String,
    pub km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SiteSource {
    /// Built-in catalog entry
    Catalog,
    /// Live climatology + coastline lookup
    Live,
    /// Approximate offline model
    Offline,
}

/// A location together with its monthly irradiation record.
#[derive(Debug, Clone, PartialEq, serde::Serialize, ToSchema)]
pub struct SiteLocation {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[schema(value_type = Object)]
    pub distance_to_coast_km: CoastDistance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_river: Option<RiverDistance>,
    #[schema(value_type = std::collections::HashMap<String, f64>)]
    pub monthly: MonthlyIrradiation,
    pub source: SiteSource,
}

/// Display name for a clicked coordinate.
pub fn coordinate_name(lat: f64, lon: f64) -> String {
    format!("Coordinates ({:.3}, {:.3})", lat, lon)
}
