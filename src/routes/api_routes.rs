use axum::{routing::{get, post}, Router};
use crate::controllers::site_controller::{
    // Sites & lookup
    list_sites, get_site_report, lookup_site, get_selection,
};
use crate::controllers::sizing_controller::{compute_sizing, get_last_sizing};
use crate::controllers::system_controller::{get_health, get_offline_mode, set_offline_mode};
use crate::shared_state::SharedState;

/// Build the `/api/*` sub-router.
/// Handlers extract `State<AppState>` and/or `State<Config>` via
/// `FromRef<SharedState>`; a single `.with_state(shared)` covers both.
pub fn api_routes(shared: SharedState) -> Router {
    Router::new()
        .route("/health",                  get(get_health))
        .route("/sites",                   get(list_sites))
        .route("/sites/{id}/report",       get(get_site_report))
        .route("/lookup",                  get(lookup_site))
        .route("/selection",               get(get_selection))
        .route("/sizing",                  post(compute_sizing))
        .route("/sizing/last",             get(get_last_sizing))
        .route("/settings/offline-mode",   get(get_offline_mode).post(set_offline_mode))
        .with_state(shared)
}
