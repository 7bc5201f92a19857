use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A raw form value: a JSON number or the text typed into an input box.
/// Any other JSON value is kept as `Other` so that validation can name the field.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl FormValue {
    /// Parse to a finite number. Blank or non-numeric text yields `None`.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            FormValue::Number(n) => *n,
            FormValue::Text(s) => s.trim().parse::<f64>().ok()?,
            FormValue::Other(_) => return None,
        };
        n.is_finite().then_some(n)
    }
}

/// Body of `POST /api/sizing`. Every field is optional at the wire level so that
/// missing values are reported per field rather than as a body rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SizingRequest {
    /// Solar farm peak power (MW)
    pub solar_farm_peak_power_mw: Option<FormValue>,
    /// Battery storage capacity (MWh)
    pub battery_storage_capacity_mwh: Option<FormValue>,
    /// Annual solar irradiation (kWh/m²/year); defaults to the selected site's total
    pub annual_solar_irradiation_kwh_m2: Option<FormValue>,
    /// System performance ratio (0-1); defaults to the configured value
    pub performance_ratio: Option<FormValue>,
}

/// Validated sizing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct SizingInputs {
    pub solar_farm_peak_power_mw: f64,
    /// Collected and validated; does not influence the sizing formula.
    pub battery_storage_capacity_mwh: f64,
    pub annual_solar_irradiation_kwh_m2: f64,
    pub performance_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SizingRegime {
    /// Capacity factor at or above the threshold
    High,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SizingResult {
    pub solar_capacity_factor: f64,
    pub capacity_factor_percent: f64,
    pub regime: SizingRegime,
    /// Electrolyzer power / solar peak power
    pub sizing_ratio_used: f64,
    /// e.g. "1:2"
    pub ratio_label: String,
    pub suggested_electrolyzer_power_mw: f64,
    pub recommendation_reason: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SizingResponse {
    pub timestamp: DateTime<Utc>,
    pub inputs: SizingInputs,
    pub result: SizingResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_value_accepts_numbers_and_numeric_text() {
        let req: SizingRequest = serde_json::from_str(
            r#"{"solar_farm_peak_power_mw": 25, "performance_ratio": " 0.80 ", "battery_storage_capacity_mwh": "abc"}"#,
        )
        .unwrap();
        assert_eq!(req.solar_farm_peak_power_mw.unwrap().as_number(), Some(25.0));
        assert_eq!(req.performance_ratio.unwrap().as_number(), Some(0.8));
        assert_eq!(req.battery_storage_capacity_mwh.unwrap().as_number(), None);
        assert!(req.annual_solar_irradiation_kwh_m2.is_none());
    }

    #[test]
    fn test_form_value_rejects_infinite() {
        assert_eq!(FormValue::Text("1e400".into()).as_number(), None);
        assert_eq!(FormValue::Text("".into()).as_number(), None);
    }

    #[test]
    fn test_form_value_keeps_non_scalar_json() {
        let req: SizingRequest = serde_json::from_str(
            r#"{"solar_farm_peak_power_mw": true, "performance_ratio": [0.8], "battery_storage_capacity_mwh": {}}"#,
        )
        .unwrap();
        assert_eq!(req.solar_farm_peak_power_mw.unwrap().as_number(), None);
        assert_eq!(req.performance_ratio.unwrap().as_number(), None);
        assert_eq!(req.battery_storage_capacity_mwh.unwrap().as_number(), None);
    }
}
