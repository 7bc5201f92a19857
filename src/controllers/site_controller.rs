use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::AppError;
use crate::models::report::{CatalogListing, LookupQuery, SiteReport};
use crate::services::{catalog, report_service};
use crate::shared_state::AppState;

/// GET /api/sites
/// List the built-in catalog of sunny sites
///
/// Each entry carries its annual irradiation total and coast distance so that
/// markers can be rendered without any network call.
#[utoipa::path(
    get,
    path = "/api/sites",
    responses(
        (status = 200, description = "Catalog sites", body = Vec<CatalogListing>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_sites() -> Result<Json<Vec<CatalogListing>>, AppError> {
    let sites = catalog::sites()?;
    Ok(Json(sites.iter().map(report_service::listing).collect()))
}

/// GET /api/sites/{id}/report
/// Report for a catalog site
///
/// Returns monthly chart rows, the irradiation summary and feedstock advice,
/// and makes the site the current selection.
#[utoipa::path(
    get,
    path = "/api/sites/{id}/report",
    params(
        ("id" = String, Path, description = "Catalog site id, e.g. `arandis`")
    ),
    responses(
        (status = 200, description = "Site report", body = SiteReport),
        (status = 404, description = "Site not found")
    )
)]
pub async fn get_site_report(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SiteReport>, AppError> {
    let site = catalog::find(&id)?.ok_or_else(|| AppError::NotFound(format!("Site '{id}'")))?;
    state.select(site.clone());
    Ok(Json(report_service::build_report(site)))
}

/// GET /api/lookup?lat=&lon=
/// Look up an arbitrary coordinate
///
/// Fetches climatology and nearest-coastline distance concurrently (or uses the
/// approximate offline model when offline mode is on). On success the site
/// becomes the current selection; on failure the selection is left untouched.
#[utoipa::path(
    get,
    path = "/api/lookup",
    params(LookupQuery),
    responses(
        (status = 200, description = "Report for the clicked coordinate", body = SiteReport),
        (status = 400, description = "Coordinate out of range"),
        (status = 502, description = "Climatology or coastline provider failed"),
        (status = 504, description = "Provider timed out")
    )
)]
pub async fn lookup_site(
    Query(query): Query<LookupQuery>,
    State(state): State<AppState>,
) -> Result<Json<SiteReport>, AppError> {
    let site = state
        .locator
        .locate(query.lat, query.lon, state.is_offline())
        .await?;
    state.select(site.clone());
    Ok(Json(report_service::build_report(site)))
}

/// GET /api/selection
/// Report for the currently selected site
#[utoipa::path(
    get,
    path = "/api/selection",
    responses(
        (status = 200, description = "Selected site report", body = SiteReport),
        (status = 404, description = "No site selected yet")
    )
)]
pub async fn get_selection(State(state): State<AppState>) -> Result<Json<SiteReport>, AppError> {
    state
        .selected()
        .map(|site| Json(report_service::build_report(site)))
        .ok_or_else(|| AppError::NotFound("Selected site".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::config::ProviderConfig;
    use crate::models::site::SiteSource;
    use crate::services::location_service::HttpLocationService;

    fn state() -> AppState {
        AppState::new(false, HttpLocationService::from_config(&ProviderConfig::default()))
    }

    #[tokio::test]
    async fn test_listing_covers_catalog() {
        let Json(listing) = list_sites().await.unwrap();
        assert_eq!(listing.len(), 8);
        assert!(listing.iter().any(|l| l.id == "aswan" && l.nearest_river_display.is_some()));
    }

    #[tokio::test]
    async fn test_report_fetch_becomes_selection() {
        let s = state();
        assert!(get_selection(State(s.clone())).await.is_err());

        let Json(report) = get_site_report(Path("luxor".to_string()), State(s.clone()))
            .await
            .unwrap();
        assert_eq!(report.site.id, "luxor");

        let Json(selected) = get_selection(State(s)).await.unwrap();
        assert_eq!(selected.site.id, "luxor");
        assert_eq!(selected.summary, report.summary);
    }

    #[tokio::test]
    async fn test_unknown_site_keeps_selection() {
        let s = state();
        get_site_report(Path("aswan".to_string()), State(s.clone())).await.unwrap();

        let err = get_site_report(Path("atlantis".to_string()), State(s.clone()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(s.selected().unwrap().id, "aswan");
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_selection() {
        let s = state();
        get_site_report(Path("aswan".to_string()), State(s.clone())).await.unwrap();

        let err = lookup_site(Query(LookupQuery { lat: 123.0, lon: 10.0 }), State(s.clone()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let Json(selected) = get_selection(State(s)).await.unwrap();
        assert_eq!(selected.site.id, "aswan");
    }

    #[tokio::test]
    async fn test_offline_lookup_becomes_selection() {
        let s = state();
        s.set_offline(true);

        let Json(report) = lookup_site(Query(LookupQuery { lat: 52.52, lon: 13.405 }), State(s.clone()))
            .await
            .unwrap();
        assert_eq!(report.site.source, SiteSource::Offline);
        assert_eq!(report.monthly.len(), 12);

        let selected = s.selected().unwrap();
        assert_eq!(selected.source, SiteSource::Offline);
        assert_eq!(selected.name, "Coordinates (52.520, 13.405)");
    }
}
