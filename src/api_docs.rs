use utoipa::OpenApi;
use crate::controllers::{site_controller, sizing_controller, system_controller};
use crate::models::{irradiation, report, site, sizing};

#[derive(OpenApi)]
#[openapi(
    paths(
        system_controller::get_health,
        system_controller::get_offline_mode,
        system_controller::set_offline_mode,
        site_controller::list_sites,
        site_controller::get_site_report,
        site_controller::lookup_site,
        site_controller::get_selection,
        sizing_controller::compute_sizing,
        sizing_controller::get_last_sizing
    ),
    components(
        schemas(
            report::CatalogListing,
            report::SiteReport,
            report::MonthlyRow,
            report::FeedstockAdvice,
            report::Feedstock,
            report::HealthStatus,
            report::OfflineModeBody,
            site::SiteLocation,
            site::SiteSource,
            site::RiverDistance,
            irradiation::IrradiationSummary,
            sizing::FormValue,
            sizing::SizingRequest,
            sizing::SizingInputs,
            sizing::SizingRegime,
            sizing::SizingResult,
            sizing::SizingResponse
        )
    ),
    tags(
        (name = "electrolyzer-sizing", description = "Solar capacity factor & electrolyzer sizing API")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/health",
            "/api/sites",
            "/api/sites/{id}/report",
            "/api/lookup",
            "/api/selection",
            "/api/sizing",
            "/api/sizing/last",
            "/api/settings/offline-mode",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
