use axum::{extract::State, Json};

use crate::error::AppError;
use crate::models::report::{HealthStatus, OfflineModeBody};
use crate::services::catalog;
use crate::shared_state::AppState;

/// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service health", body = HealthStatus)
    )
)]
pub async fn get_health(State(state): State<AppState>) -> Result<Json<HealthStatus>, AppError> {
    Ok(Json(HealthStatus {
        status: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        catalog_sites: catalog::sites()?.len(),
        offline_mode: state.is_offline(),
        site_selected: state.selected().is_some(),
    }))
}

/// GET /api/settings/offline-mode
#[utoipa::path(
    get,
    path = "/api/settings/offline-mode",
    responses(
        (status = 200, description = "Current offline mode", body = OfflineModeBody)
    )
)]
pub async fn get_offline_mode(State(state): State<AppState>) -> Json<OfflineModeBody> {
    Json(OfflineModeBody { offline_mode: state.is_offline() })
}

/// POST /api/settings/offline-mode
/// Toggle offline mode
///
/// While on, coordinate lookups use the approximate model instead of the
/// climatology and coastline providers.
#[utoipa::path(
    post,
    path = "/api/settings/offline-mode",
    request_body = OfflineModeBody,
    responses(
        (status = 200, description = "Updated offline mode", body = OfflineModeBody)
    )
)]
pub async fn set_offline_mode(
    State(state): State<AppState>,
    Json(body): Json<OfflineModeBody>,
) -> Json<OfflineModeBody> {
    state.set_offline(body.offline_mode);
    tracing::info!(offline_mode = body.offline_mode, "offline mode changed");
    Json(OfflineModeBody { offline_mode: state.is_offline() })
}
