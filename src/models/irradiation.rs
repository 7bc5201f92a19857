use serde::ser::{Serialize, SerializeMap, Serializer};
use utoipa::ToSchema;

use crate::error::IrradiationError;
use crate::models::month::Month;

/// Twelve monthly irradiation totals (kWh/m² per month), Jan..Dec.
///
/// Every value is finite and non-negative; the constructors reject anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyIrradiation {
    values: [f64; 12],
}

impl MonthlyIrradiation {
    /// Build from monthly totals (catalog data).
    pub fn from_totals(values: [f64; 12]) -> Result<Self, IrradiationError> {
        for month in Month::ALL {
            let value = values[month.index()];
            if !value.is_finite() || value < 0.0 {
                return Err(IrradiationError { month: month.label(), value });
            }
        }
        Ok(Self { values })
    }

    /// Build from one average-daily value (kWh/m²/day) per month, as delivered by a
    /// climatology feed. Each total is `daily * days_in_month` rounded to 0.1.
    pub fn from_daily_averages(daily: [f64; 12]) -> Result<Self, IrradiationError> {
        let mut totals = [0.0; 12];
        for month in Month::ALL {
            let i = month.index();
            totals[i] = round_to(daily[i] * month.days() as f64, 1);
        }
        Self::from_totals(totals)
    }

    pub fn get(&self, month: Month) -> f64 {
        self.values[month.index()]
    }

    pub fn values(&self) -> &[f64; 12] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        Month::ALL.into_iter().map(move |m| (m, self.values[m.index()]))
    }
}

/// Ordered `{"Jan": v, ..., "Dec": v}` map.
impl Serialize for MonthlyIrradiation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(12))?;
        for (month, value) in self.iter() {
            map.serialize_entry(month.label(), &value)?;
        }
        map.end()
    }
}

/// Annual statistics derived from a [`MonthlyIrradiation`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, ToSchema)]
pub struct IrradiationSummary {
    /// Sum of the twelve monthly totals (kWh/m²/year)
    pub total_annual: f64,
    /// total_annual / 12 (kWh/m²/month)
    pub average_monthly: f64,
    /// total_annual / 365 (kWh/m²/day)
    pub average_daily: f64,
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_and_nan() {
        let mut v = [100.0; 12];
        v[3] = -1.0;
        let err = MonthlyIrradiation::from_totals(v).unwrap_err();
        assert_eq!(err.month, "Apr");

        let mut v = [100.0; 12];
        v[11] = f64::NAN;
        assert!(MonthlyIrradiation::from_totals(v).is_err());
    }

    #[test]
    fn test_daily_averages_weighted_by_day_count() {
        let m = MonthlyIrradiation::from_daily_averages([6.0; 12]).unwrap();
        assert_eq!(m.get(Month::Jan), 186.0);
        assert_eq!(m.get(Month::Feb), 168.0);
        assert_eq!(m.get(Month::Apr), 180.0);
    }

    #[test]
    fn test_daily_averages_rounded_to_one_decimal() {
        let mut daily = [5.0; 12];
        daily[0] = 5.123; // 158.813
        let m = MonthlyIrradiation::from_daily_averages(daily).unwrap();
        assert_eq!(m.get(Month::Jan), 158.8);
    }

    #[test]
    fn test_serializes_as_ordered_month_map() {
        let m = MonthlyIrradiation::from_totals([
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
        ])
        .unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.starts_with(r#"{"Jan":1.0,"Feb":2.0"#));
        assert!(json.ends_with(r#""Dec":12.0}"#));
    }
}
