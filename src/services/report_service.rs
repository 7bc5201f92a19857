use crate::models::report::{CatalogListing, Feedstock, FeedstockAdvice, SiteReport};
use crate::models::site::SiteLocation;
use crate::services::irradiation_service::{monthly_rows, summarize};

/// Seawater within this distance is worth desalinating on site.
pub const SEAWATER_MAX_DISTANCE_KM: f64 = 10.0;

pub fn feedstock_advice(site: &SiteLocation) -> FeedstockAdvice {
    let seawater = site
        .distance_to_coast_km
        .km()
        .is_some_and(|d| d <= SEAWATER_MAX_DISTANCE_KM);

    let mut note = if seawater {
        format!(
            "Seawater is {} away. Within ~10 km it is generally optimal and cost-effective \
             with an integrated desalination plant on site.",
            site.distance_to_coast_km
        )
    } else {
        format!(
            "Nearest sea: {}. Beyond ~10 km it is more profitable to use freshwater with its \
             respective treatment facilities and transport infrastructure.",
            site.distance_to_coast_km
        )
    };

    if let Some(river) = &site.nearest_river {
        note.push_str(&format!(" The {} is {} km away as a freshwater source.", river.river, river.km));
    }

    FeedstockAdvice {
        recommended: if seawater { Feedstock::Seawater } else { Feedstock::Freshwater },
        note,
    }
}

pub fn build_report(site: SiteLocation) -> SiteReport {
    SiteReport {
        summary: summarize(&site.monthly),
        monthly: monthly_rows(&site.monthly),
        distance_to_coast_display: site.distance_to_coast_km.to_string(),
        feedstock: feedstock_advice(&site),
        site,
    }
}

pub fn listing(site: &SiteLocation) -> CatalogListing {
    CatalogListing {
        id: site.id.clone(),
        name: site.name.clone(),
        latitude: site.latitude,
        longitude: site.longitude,
        total_annual_kwh_m2: summarize(&site.monthly).total_annual,
        distance_to_coast_display: site.distance_to_coast_km.to_string(),
        nearest_river_display: site
            .nearest_river
            .as_ref()
            .map(|r| format!("Distance to {}: {} km", r.river, r.km)),
    }
}
