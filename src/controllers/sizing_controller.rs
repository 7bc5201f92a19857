use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::config::Config;
use crate::error::{AppError, ValidationError};
use crate::models::sizing::{SizingRequest, SizingResponse};
use crate::services::{irradiation_service, sizing_service};
use crate::shared_state::AppState;

/// POST /api/sizing
/// Recommend an electrolyzer power rating
///
/// Validates the form values, computes the solar capacity factor and applies
/// the two-bucket sizing rule. A missing irradiation value is taken from the
/// selected site's annual total; a missing performance ratio defaults to the
/// configured value. Any failure, including an unreadable body, clears the
/// previously stored result.
#[utoipa::path(
    post,
    path = "/api/sizing",
    request_body = SizingRequest,
    responses(
        (status = 200, description = "Sizing recommendation", body = SizingResponse),
        (status = 400, description = "Invalid input; `field` names the offending value, or `body` when the JSON itself is unreadable"),
        (status = 500, description = "Computation failed")
    )
)]
pub async fn compute_sizing(
    State(state): State<AppState>,
    State(config): State<Config>,
    payload: Result<Json<SizingRequest>, JsonRejection>,
) -> Result<Json<SizingResponse>, AppError> {
    let selected_total = state
        .selected()
        .map(|site| irradiation_service::summarize(&site.monthly).total_annual);

    let outcome = payload
        .map_err(|rejection| {
            ValidationError::new(
                "body",
                format!("The sizing form could not be read: {}", rejection.body_text()),
            )
        })
        .and_then(|Json(request)| {
            sizing_service::validate(
                &request,
                config.sizing.default_performance_ratio,
                selected_total,
            )
        })
        .map_err(AppError::from)
        .and_then(|inputs| {
            sizing_service::estimate(&inputs).map(|result| SizingResponse {
                timestamp: chrono::Utc::now(),
                inputs,
                result,
            })
        });

    match outcome {
        Ok(response) => {
            tracing::info!(
                cf_percent = response.result.capacity_factor_percent,
                ratio = %response.result.ratio_label,
                power_mw = response.result.suggested_electrolyzer_power_mw,
                "sizing computed"
            );
            state.set_last_sizing(response.clone());
            Ok(Json(response))
        }
        Err(e) => {
            state.clear_last_sizing();
            Err(e)
        }
    }
}

/// GET /api/sizing/last
/// Last successful sizing result
#[utoipa::path(
    get,
    path = "/api/sizing/last",
    responses(
        (status = 200, description = "Last sizing result", body = SizingResponse),
        (status = 404, description = "No result available")
    )
)]
pub async fn get_last_sizing(State(state): State<AppState>) -> Result<Json<SizingResponse>, AppError> {
    state
        .last_sizing()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Sizing result".to_string()))
}
