//! HTTP gateway (Axum) over the scoring engine.
//!
//! Owns request parsing and status mapping only; all scoring lives in
//! [`scoring`](crate::scoring) and [`ranking`](crate::ranking).

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{
    analyze_product_handler, compare_features_handler, rank_products_handler,
    rescore_description_handler,
};
pub use state::AppState;

pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/api/analyze-product", post(analyze_product_handler))
        .route("/api/rank-products", post(rank_products_handler))
        .route("/api/compare-features", post(compare_features_handler))
        .route("/api/rescore-description", post(rescore_description_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub embedder_mode: &'static str,
    pub embedding_dim: usize,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let embedder = state.scorer.embedder();
    let embedder_mode = if embedder.is_stub() { "stub" } else { "model" };

    (
        StatusCode::OK,
        Json(ReadyResponse {
            status: "ok",
            embedder_mode,
            embedding_dim: embedder.dimension(),
        }),
    )
        .into_response()
}
