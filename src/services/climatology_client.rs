use std::collections::HashMap;

use crate::error::FetchError;
use crate::models::month::Month;
use crate::models::wire::ClimatologyResponse;
use crate::services::geometry::GeoPoint;
use crate::services::location_service::ClimatologySource;

const PROVIDER: &str = "climatology";

/// Client for the NASA POWER climatology point endpoint.
#[derive(Debug, Clone)]
pub struct NasaPowerClient {
    http: reqwest::Client,
    base_url: String,
}

impl NasaPowerClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    fn url(&self, point: GeoPoint) -> String {
        format!(
            "{}?parameters=ALLSKY_SFC_SW_DWN&community=RE&longitude={}&latitude={}&format=JSON",
            self.base_url, point.lon, point.lat
        )
    }
}

impl ClimatologySource for NasaPowerClient {
    async fn daily_averages(&self, point: GeoPoint) -> Result<[f64; 12], FetchError> {
        let url = self.url(point);
        tracing::debug!(%url, "requesting climatology");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport { provider: PROVIDER, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { provider: PROVIDER, status: status.as_u16() });
        }

        let body = response
            .json::<ClimatologyResponse>()
            .await
            .map_err(|e| FetchError::malformed(PROVIDER, e.to_string()))?;

        daily_averages_from(&body.properties.parameter.allsky_sfc_sw_dwn)
    }
}

/// Pick the twelve `JAN`..`DEC` values out of a climatology parameter map.
/// The annual `ANN` entry is ignored; negative values are fill markers for missing data.
pub fn daily_averages_from(values: &HashMap<String, f64>) -> Result<[f64; 12], FetchError> {
    let mut daily = [0.0; 12];
    for month in Month::ALL {
        let key = month.climatology_key();
        let value = *values
            .get(key)
            .ok_or_else(|| FetchError::malformed(PROVIDER, format!("missing month {key}")))?;
        if !value.is_finite() || value < 0.0 {
            return Err(FetchError::malformed(PROVIDER, format!("invalid value {value} for {key}")));
        }
        daily[month.index()] = value;
    }
    Ok(daily)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::wire::ClimatologyResponse;

    const SAMPLE: &str = r#"{
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [14.91, -22.58, 600.0] },
        "properties": { "parameter": { "ALLSKY_SFC_SW_DWN": {
            "JAN": 7.1, "FEB": 6.8, "MAR": 6.3, "APR": 5.7, "MAY": 5.1, "JUN": 4.8,
            "JUL": 5.0, "AUG": 5.8, "SEP": 6.7, "OCT": 7.3, "NOV": 7.5, "DEC": 7.4,
            "ANN": 6.3
        } } }
    }"#;

    #[test]
    fn test_parses_sample_payload() {
        let body: ClimatologyResponse = serde_json::from_str(SAMPLE).unwrap();
        let daily = daily_averages_from(&body.properties.parameter.allsky_sfc_sw_dwn).unwrap();
        assert_eq!(daily[0], 7.1);
        assert_eq!(daily[11], 7.4);
    }

    #[test]
    fn test_missing_month_is_malformed() {
        let mut values: HashMap<String, f64> =
            Month::ALL.iter().map(|m| (m.climatology_key().to_string(), 5.0)).collect();
        values.remove("AUG");
        let err = daily_averages_from(&values).unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload { .. }));
        assert!(err.to_string().contains("AUG"));
    }

    #[test]
    fn test_fill_value_is_malformed() {
        let mut values: HashMap<String, f64> =
            Month::ALL.iter().map(|m| (m.climatology_key().to_string(), 5.0)).collect();
        values.insert("MAR".to_string(), -999.0);
        assert!(daily_averages_from(&values).is_err());
    }

    #[test]
    fn test_url_carries_coordinate() {
        let client = NasaPowerClient::new(reqwest::Client::new(), "http://localhost/clim");
        let url = client.url(GeoPoint { lat: -22.5, lon: 14.9 });
        assert!(url.starts_with("http://localhost/clim?parameters=ALLSKY_SFC_SW_DWN"));
        assert!(url.contains("longitude=14.9&latitude=-22.5"));
    }
}
