use crate::models::irradiation::{IrradiationSummary, MonthlyIrradiation};
use crate::models::month::{Month, DAYS_IN_YEAR};
use crate::models::report::MonthlyRow;

/// Annual total, monthly average and daily average of a monthly record.
pub fn summarize(monthly: &MonthlyIrradiation) -> IrradiationSummary {
    let total_annual: f64 = monthly.values().iter().sum();
    IrradiationSummary {
        total_annual,
        average_monthly: total_annual / 12.0,
        average_daily: total_annual / DAYS_IN_YEAR as f64,
    }
}

/// Average daily irradiation within one month (kWh/m²/day).
pub fn per_day(monthly: &MonthlyIrradiation, month: Month) -> f64 {
    monthly.get(month) / month.days() as f64
}

/// Chart/table rows, Jan..Dec.
pub fn monthly_rows(monthly: &MonthlyIrradiation) -> Vec<MonthlyRow> {
    monthly
        .iter()
        .map(|(month, total)| MonthlyRow {
            month: month.label().to_string(),
            total_kwh_m2: total,
            per_day_kwh_m2: per_day(monthly, month),
        })
        .collect()
}
