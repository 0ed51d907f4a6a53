//! HTTP layer exposing the prediction endpoint.

use crate::metrics::ServiceMetrics;
use crate::service::{RecommendError, RecommendationService};
use crate::types::profile::StudentProfile;
use crate::types::recommendation::Recommendation;
use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Shared per-request state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecommendationService>,
    pub metrics: Arc<ServiceMetrics>,
}

/// Error body returned on any non-2xx response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

/// HTTP error with a structured body
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        let status = match &err {
            RecommendError::InvalidProfile(_) => StatusCode::BAD_REQUEST,
            RecommendError::Inference(_) | RecommendError::UnmappedLabel(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Build the application router.
pub fn router(service: Arc<RecommendationService>, metrics: Arc<ServiceMetrics>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .with_state(AppState { service, metrics })
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind_addr: &str, app: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .context(format!("Failed to bind {}", bind_addr))?;

    info!(addr = %bind_addr, "Listening for prediction requests");

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}

async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<StudentProfile>, JsonRejection>,
) -> Result<Json<Recommendation>, ApiError> {
    let start = Instant::now();

    let Json(profile) = payload.map_err(|rejection| {
        state.metrics.record_rejection();
        warn!(reason = %rejection.body_text(), "Rejected malformed student profile");
        ApiError::bad_request(format!("malformed student profile: {}", rejection.body_text()))
    })?;

    match state.service.recommend(&profile) {
        Ok(recommendation) => {
            let elapsed = start.elapsed();
            state
                .metrics
                .record_request(elapsed, recommendation.prediction_label);

            debug!(
                label = recommendation.prediction_label,
                processing_time_us = elapsed.as_micros() as u64,
                "Recommendation served"
            );

            Ok(Json(recommendation))
        }
        Err(err @ RecommendError::InvalidProfile(_)) => {
            state.metrics.record_rejection();
            warn!(reason = %err, "Rejected out-of-range student profile");
            Err(ApiError::from(err))
        }
        Err(err) => {
            state.metrics.record_failure();
            error!(error = %err, "Recommendation failed");
            Err(ApiError::from(err))
        }
    }
}

async fn health() -> Json<HealthResponse> {
    // Startup fails without a model, so reaching this handler implies loaded.
    Json(HealthResponse {
        status: "ok".to_string(),
        model_loaded: true,
    })
}
