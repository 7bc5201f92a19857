use std::collections::HashMap;

use serde::Deserialize;

use crate::services::geometry::GeoPoint;

// ─── NASA POWER climatology wire types ───────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ClimatologyResponse {
    pub properties: ClimatologyProperties,
}

#[derive(Debug, Deserialize)]
pub struct ClimatologyProperties {
    pub parameter: ClimatologyParameters,
}

#[derive(Debug, Deserialize)]
pub struct ClimatologyParameters {
    /// All-sky surface shortwave downward irradiance, kWh/m²/day, keyed `JAN`..`DEC` (+ `ANN`)
    #[serde(rename = "ALLSKY_SFC_SW_DWN")]
    pub allsky_sfc_sw_dwn: HashMap<String, f64>,
}

// ─── Overpass wire types ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub geometry: Option<Vec<GeoPoint>>,
}
