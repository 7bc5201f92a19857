use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Rejected monthly irradiation value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("irradiation for {month} must be a finite non-negative value, got {value}")]
pub struct IrradiationError {
    pub month: &'static str,
    pub value: f64,
}

/// User input that failed boundary validation. `field` names the offending form field.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Failure of a location data provider (climatology or coastline).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} responded with HTTP {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("{provider} returned a malformed payload: {reason}")]
    MalformedPayload { provider: &'static str, reason: String },

    #[error("{provider} did not respond within {seconds}s")]
    Timeout { provider: &'static str, seconds: u64 },
}

impl FetchError {
    pub fn malformed(provider: &'static str, reason: impl Into<String>) -> Self {
        FetchError::MalformedPayload { provider, reason: reason.into() }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by the HTTP layer, each converted to a single user-facing message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("computation failed: {0}")]
    Computation(String),

    #[error("{0} not found")]
    NotFound(String),
}

impl From<IrradiationError> for AppError {
    fn from(e: IrradiationError) -> Self {
        AppError::Computation(e.to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Fetch(FetchError::InvalidCoordinate(_)) => StatusCode::BAD_REQUEST,
            AppError::Fetch(FetchError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Fetch(_) => StatusCode::BAD_GATEWAY,
            AppError::Computation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.message.clone(),
            AppError::Fetch(FetchError::InvalidCoordinate(reason)) => reason.clone(),
            AppError::Fetch(e) => {
                format!("Could not retrieve solar or coastline data for this location ({e}).")
            }
            AppError::Computation(_) => {
                "An error occurred during calculation. Please check your inputs.".to_string()
            }
            AppError::NotFound(what) => format!("{what} not found"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Computation(detail) => tracing::error!(%detail, "computation failed"),
            AppError::Fetch(e) => tracing::warn!(error = %e, "location lookup failed"),
            _ => tracing::debug!(error = %self, "request rejected"),
        }

        let body = match &self {
            AppError::Validation(e) => serde_json::json!({
                "error": self.user_message(),
                "field": e.field,
            }),
            _ => serde_json::json!({ "error": self.user_message() }),
        };
        (self.status(), Json(body)).into_response()
    }
}
