//! Built-in catalog of very sunny sites, selectable without any network call.
//! Monthly values are totals in kWh/m².

use crate::error::IrradiationError;
use crate::models::irradiation::MonthlyIrradiation;
use crate::models::site::{CoastDistance, RiverDistance, SiteLocation, SiteSource};

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    lat: f64,
    lon: f64,
    monthly: [f64; 12],
    coast_km: f64,
    nile_km: Option<f64>,
}

static ENTRIES: [CatalogEntry; 8] = [
    CatalogEntry {
        id: "upington",
        name: "Upington, South Africa",
        lat: -28.4511,
        lon: 21.256,
        monthly: [220.0, 210.0, 230.0, 250.0, 270.0, 280.0, 275.0, 260.0, 240.0, 230.0, 215.0, 205.0],
        coast_km: 350.0,
        nile_km: None,
    },
    CatalogEntry {
        id: "yuma",
        name: "Yuma, Arizona",
        lat: 32.6927,
        lon: -114.6277,
        monthly: [240.0, 230.0, 260.0, 280.0, 300.0, 310.0, 305.0, 290.0, 270.0, 260.0, 245.0, 235.0],
        coast_km: 90.0,
        nile_km: None,
    },
    CatalogEntry {
        id: "phoenix",
        name: "Phoenix, Arizona",
        lat: 33.4484,
        lon: -112.074,
        monthly: [230.0, 220.0, 250.0, 270.0, 290.0, 300.0, 295.0, 280.0, 260.0, 250.0, 235.0, 225.0],
        coast_km: 120.0,
        nile_km: None,
    },
    CatalogEntry {
        id: "aswan",
        name: "Aswan, Egypt",
        lat: 24.0889,
        lon: 32.8998,
        monthly: [280.0, 270.0, 300.0, 320.0, 340.0, 350.0, 345.0, 330.0, 310.0, 300.0, 285.0, 275.0],
        coast_km: 700.0,
        nile_km: Some(5.0),
    },
    CatalogEntry {
        id: "luxor",
        name: "Luxor, Egypt",
        lat: 25.6872,
        lon: 32.6396,
        monthly: [275.0, 265.0, 295.0, 315.0, 335.0, 345.0, 340.0, 325.0, 305.0, 295.0, 280.0, 270.0],
        coast_km: 650.0,
        nile_km: Some(2.0),
    },
    CatalogEntry {
        id: "atacama",
        name: "Atacama Desert, Chile",
        lat: -24.5,
        lon: -69.25,
        monthly: [310.0, 300.0, 320.0, 330.0, 350.0, 360.0, 355.0, 340.0, 320.0, 310.0, 295.0, 285.0],
        coast_km: 60.0,
        nile_km: None,
    },
    CatalogEntry {
        id: "keetmanshoop",
        name: "Keetmanshoop, Namibia",
        lat: -26.5733,
        lon: 18.1326,
        monthly: [210.0, 200.0, 220.0, 240.0, 260.0, 270.0, 265.0, 250.0, 230.0, 220.0, 205.0, 195.0],
        coast_km: 420.0,
        nile_km: None,
    },
    CatalogEntry {
        id: "arandis",
        name: "Arandis, Erongo Region, Namibia",
        lat: -22.5767,
        lon: 14.9097,
        monthly: [220.0, 210.0, 230.0, 250.0, 270.0, 280.0, 275.0, 260.0, 240.0, 230.0, 215.0, 205.0],
        coast_km: 50.0,
        nile_km: None,
    },
];

impl CatalogEntry {
    fn to_site(&self) -> Result<SiteLocation, IrradiationError> {
        Ok(SiteLocation {
            id: self.id.to_string(),
            name: self.name.to_string(),
            latitude: self.lat,
            longitude: self.lon,
            distance_to_coast_km: CoastDistance::Km(self.coast_km),
            nearest_river: self.nile_km.map(|km| RiverDistance { river: "Nile".to_string(), km }),
            monthly: MonthlyIrradiation::from_totals(self.monthly)?,
            source: SiteSource::Catalog,
        })
    }
}

/// All catalog sites, in display order.
pub fn sites() -> Result<Vec<SiteLocation>, IrradiationError> {
    ENTRIES.iter().map(CatalogEntry::to_site).collect()
}

pub fn find(id: &str) -> Result<Option<SiteLocation>, IrradiationError> {
    ENTRIES
        .iter()
        .find(|e| e.id.eq_ignore_ascii_case(id))
        .map(CatalogEntry::to_site)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::irradiation_service::summarize;

    #[test]
    fn test_catalog_is_valid() {
        let all = sites().unwrap();
        assert_eq!(all.len(), 8);
        for site in &all {
            assert!((-90.0..=90.0).contains(&site.latitude));
            assert!((-180.0..=180.0).contains(&site.longitude));
            assert!(summarize(&site.monthly).total_annual > 0.0);
        }
    }

    #[test]
    fn test_only_egyptian_sites_have_river_distance() {
        let with_river: Vec<String> = sites()
            .unwrap()
            .into_iter()
            .filter(|s| s.nearest_river.is_some())
            .map(|s| s.id)
            .collect();
        assert_eq!(with_river, vec!["aswan", "luxor"]);
    }

    #[test]
    fn test_find_by_id() {
        let luxor = find("Luxor").unwrap().unwrap();
        assert_eq!(luxor.nearest_river.unwrap().km, 2.0);
        assert!(find("munich").unwrap().is_none());
    }
}
