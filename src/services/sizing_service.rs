/// ============================================================
///  Solar Capacity Factor & Electrolyzer Sizing
///
///   1. Boundary validation   – raw form values → SizingInputs
///   2. Capacity factor       – CF = (H_annual × PR) / 8760
///   3. Two-bucket classifier – CF ≥ 18 % → 1:2, otherwise 1:4
///   4. Recommendation        – P_el = P_peak × ratio + reason text
/// ============================================================

use crate::error::{AppError, ValidationError};
use crate::models::sizing::{
    FormValue, SizingInputs, SizingRegime, SizingRequest, SizingResult,
};

/// Hours in a non-leap year.
pub const HOURS_PER_YEAR: f64 = 8760.0;
/// Capacity factor at which the larger electrolyzer ratio applies (inclusive).
pub const CF_THRESHOLD: f64 = 0.18;
pub const HIGH_CF_RATIO: f64 = 0.5;
pub const LOW_CF_RATIO: f64 = 0.25;

// ─── Capacity factor ─────────────────────────────────────────

/// Solar capacity factor from annual irradiation (kWh/m²/year) and the system
/// performance ratio. Not clamped: a value above 1 signals bad input upstream.
pub fn capacity_factor(annual_irradiation_kwh_m2: f64, performance_ratio: f64) -> f64 {
    (annual_irradiation_kwh_m2 * performance_ratio) / HOURS_PER_YEAR
}

// ─── Classifier & recommender ────────────────────────────────

pub fn recommend(capacity_factor: f64, solar_farm_peak_power_mw: f64) -> SizingResult {
    let percent = capacity_factor * 100.0;

    let (regime, ratio, ratio_label, reason) = if capacity_factor >= CF_THRESHOLD {
        (
            SizingRegime::High,
            HIGH_CF_RATIO,
            "1:2",
            format!(
                "Your location has a high Solar Capacity Factor ({:.1}%). This indicates abundant and \
                 relatively consistent solar irradiation. A 1:2 ratio for the electrolyzer allows for \
                 higher overall hydrogen production by utilizing more of the available solar energy, \
                 which is cost-effective in such sunny regions. Battery storage provides a valuable \
                 buffer to optimize electrolyzer operation.",
                percent
            ),
        )
    } else {
        (
            SizingRegime::Low,
            LOW_CF_RATIO,
            "1:4",
            format!(
                "Your location has a lower Solar Capacity Factor ({:.1}%). This suggests more \
                 variability and lower average sunlight. A 1:4 ratio for the electrolyzer is more \
                 economically sound in this scenario. It prioritizes the efficient utilization of the \
                 expensive electrolyzer by running it more consistently on the available power, even \
                 if it means curtailing some peak solar output. The battery helps smooth the power \
                 input to the electrolyzer.",
                percent
            ),
        )
    };

    SizingResult {
        solar_capacity_factor: capacity_factor,
        capacity_factor_percent: percent,
        regime,
        sizing_ratio_used: ratio,
        ratio_label: ratio_label.to_string(),
        suggested_electrolyzer_power_mw: solar_farm_peak_power_mw * ratio,
        recommendation_reason: reason,
    }
}

/// CF then classification. Inputs must already be validated.
pub fn estimate(inputs: &SizingInputs) -> Result<SizingResult, AppError> {
    let cf = capacity_factor(
        inputs.annual_solar_irradiation_kwh_m2,
        inputs.performance_ratio,
    );
    let result = recommend(cf, inputs.solar_farm_peak_power_mw);

    if !result.solar_capacity_factor.is_finite() || !result.suggested_electrolyzer_power_mw.is_finite() {
        return Err(AppError::Computation(format!(
            "non-finite sizing result for {:?}",
            inputs
        )));
    }
    Ok(result)
}

// ─── Boundary validation ─────────────────────────────────────

fn number(value: Option<&FormValue>) -> Option<f64> {
    value.and_then(FormValue::as_number)
}

/// Validate a raw request, field by field in form order.
///
/// * `default_performance_ratio` – used when the ratio field is missing
/// * `selected_annual_irradiation` – prefill for a missing irradiation field
pub fn validate(
    req: &SizingRequest,
    default_performance_ratio: f64,
    selected_annual_irradiation: Option<f64>,
) -> Result<SizingInputs, ValidationError> {
    let peak = number(req.solar_farm_peak_power_mw.as_ref())
        .filter(|v| *v > 0.0)
        .ok_or_else(|| {
            ValidationError::new(
                "solar_farm_peak_power_mw",
                "Please enter a valid positive number for Solar Farm Peak Power (MW).",
            )
        })?;

    let battery = number(req.battery_storage_capacity_mwh.as_ref())
        .filter(|v| *v >= 0.0)
        .ok_or_else(|| {
            ValidationError::new(
                "battery_storage_capacity_mwh",
                "Please enter a valid non-negative number for Battery Storage Capacity (MWh).",
            )
        })?;

    let irradiation = match &req.annual_solar_irradiation_kwh_m2 {
        Some(v) => v.as_number(),
        None => selected_annual_irradiation,
    }
    .filter(|v| *v > 0.0)
    .ok_or_else(|| {
        ValidationError::new(
            "annual_solar_irradiation_kwh_m2",
            "Please enter a valid positive number for Average Annual Solar Irradiation (kWh/m²/year).",
        )
    })?;

    let ratio = match &req.performance_ratio {
        Some(v) => v.as_number(),
        None => Some(default_performance_ratio),
    }
    .filter(|v| *v > 0.0 && *v <= 1.0)
    .ok_or_else(|| {
        ValidationError::new(
            "performance_ratio",
            "Please enter a valid System Performance Ratio (between 0 and 1).",
        )
    })?;

    Ok(SizingInputs {
        solar_farm_peak_power_mw: peak,
        battery_storage_capacity_mwh: battery,
        annual_solar_irradiation_kwh_m2: irradiation,
        performance_ratio: ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(peak: f64, battery: f64, irradiation: f64, pr: f64) -> SizingRequest {
        SizingRequest {
            solar_farm_peak_power_mw: Some(FormValue::Number(peak)),
            battery_storage_capacity_mwh: Some(FormValue::Number(battery)),
            annual_solar_irradiation_kwh_m2: Some(FormValue::Number(irradiation)),
            performance_ratio: Some(FormValue::Number(pr)),
        }
    }

    #[test]
    fn test_capacity_factor_boundaries() {
        assert_eq!(capacity_factor(8760.0, 1.0), 1.0);
        assert!(capacity_factor(f64::EPSILON, 0.8) < 1e-15);
        // Not clamped
        assert!(capacity_factor(20_000.0, 1.0) > 1.0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let at = recommend(0.18, 10.0);
        assert_eq!(at.regime, SizingRegime::High);
        assert_eq!(at.sizing_ratio_used, 0.5);

        let below = recommend(0.179999, 10.0);
        assert_eq!(below.regime, SizingRegime::Low);
        assert_eq!(below.sizing_ratio_used, 0.25);
    }

    #[test]
    fn test_munich_like_site() {
        let inputs = validate(&req(25.0, 13.4, 1150.0, 0.80), 0.80, None).unwrap();
        let r = estimate(&inputs).unwrap();
        assert!((r.solar_capacity_factor - 0.105022831).abs() < 1e-6);
        assert_eq!(r.regime, SizingRegime::Low);
        assert_eq!(r.ratio_label, "1:4");
        assert_eq!(r.suggested_electrolyzer_power_mw, 6.25);
        assert!(r.recommendation_reason.contains("(10.5%)"));
    }

    #[test]
    fn test_arandis_like_site() {
        let inputs = validate(&req(25.0, 13.4, 2333.0, 0.80), 0.80, None).unwrap();
        let r = estimate(&inputs).unwrap();
        assert!((r.solar_capacity_factor - 0.213059).abs() < 1e-5);
        assert_eq!(r.regime, SizingRegime::High);
        assert_eq!(r.ratio_label, "1:2");
        assert_eq!(r.suggested_electrolyzer_power_mw, 12.5);
        assert!(r.recommendation_reason.contains("(21.3%)"));
    }

    #[test]
    fn test_recommend_is_referentially_transparent() {
        assert_eq!(recommend(0.2131, 25.0), recommend(0.2131, 25.0));
        assert_eq!(recommend(0.05, 3.0), recommend(0.05, 3.0));
    }

    #[test]
    fn test_battery_does_not_change_result() {
        let a = estimate(&validate(&req(25.0, 0.0, 1800.0, 0.8), 0.8, None).unwrap()).unwrap();
        let b = estimate(&validate(&req(25.0, 500.0, 1800.0, 0.8), 0.8, None).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_performance_ratio_above_one_rejected() {
        let err = validate(&req(25.0, 13.4, 1150.0, 1.5), 0.8, None).unwrap_err();
        assert_eq!(err.field, "performance_ratio");
    }

    #[test]
    fn test_field_errors_in_form_order() {
        assert_eq!(
            validate(&req(0.0, -1.0, 0.0, 0.0), 0.8, None).unwrap_err().field,
            "solar_farm_peak_power_mw"
        );
        assert_eq!(
            validate(&req(1.0, -1.0, 0.0, 0.0), 0.8, None).unwrap_err().field,
            "battery_storage_capacity_mwh"
        );
        assert_eq!(
            validate(&req(1.0, 0.0, 0.0, 0.0), 0.8, None).unwrap_err().field,
            "annual_solar_irradiation_kwh_m2"
        );
        assert_eq!(
            validate(&req(1.0, 0.0, 1.0, 0.0), 0.8, None).unwrap_err().field,
            "performance_ratio"
        );
    }

    #[test]
    fn test_non_numeric_text_rejected() {
        let mut r = req(25.0, 13.4, 1150.0, 0.8);
        r.solar_farm_peak_power_mw = Some(FormValue::Text("twenty".into()));
        assert_eq!(validate(&r, 0.8, None).unwrap_err().field, "solar_farm_peak_power_mw");
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let r = SizingRequest {
            solar_farm_peak_power_mw: Some(FormValue::Text("25".into())),
            battery_storage_capacity_mwh: Some(FormValue::Number(0.0)),
            annual_solar_irradiation_kwh_m2: None,
            performance_ratio: None,
        };
        let inputs = validate(&r, 0.8, Some(2885.0)).unwrap();
        assert_eq!(inputs.annual_solar_irradiation_kwh_m2, 2885.0);
        assert_eq!(inputs.performance_ratio, 0.8);

        let err = validate(&r, 0.8, None).unwrap_err();
        assert_eq!(err.field, "annual_solar_irradiation_kwh_m2");
    }
}
