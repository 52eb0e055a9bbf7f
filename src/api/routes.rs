use axum::{
    routing::{get, post},
    Router,
    extract::{Json, State},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use std::time::Instant;

use crate::error::{Result, AppError};
use crate::api::models::{InfoResponse, SummarizeRequest, SummarizeResult};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(info_handler))
        .route("/summarize", post(summarize_handler))
        // Mirrors the caller's origin, method and headers so credentials stay allowed.
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        message: state.gateway.info().to_string(),
    })
}

async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResult>> {
    tracing::info!(url = %req.url, "processing summarize request");
    let start_time = Instant::now();

    // Overall bound on top of the per-call client timeouts
    let result = tokio::time::timeout(
        state.config.request_timeout,
        state.gateway.summarize(&req.url),
    )
    .await;

    let elapsed = start_time.elapsed();
    match result {
        Ok(Ok(summary)) => {
            tracing::info!(url = %req.url, ?elapsed, "request completed");
            Ok(Json(SummarizeResult { summary }))
        }
        Ok(Err(err)) => {
            tracing::warn!(url = %req.url, ?elapsed, status = %err.status(), error = %err, "request failed");
            Err(err)
        }
        Err(_) => {
            tracing::error!(url = %req.url, ?elapsed, "request timed out");
            Err(AppError::Unexpected("request processing timed out".to_string()))
        }
    }
}
