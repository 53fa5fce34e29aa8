use std::sync::Arc;

use axum::{Json, extract::State};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::constants::SURFACED_QUERY_COUNT;
use crate::features::{FeatureReport, compare_features};
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{AnalysisResponse, CohortRequest, RescoreRequest};
use crate::gateway::state::AppState;
use crate::hashing::product_fingerprint;
use crate::product::Product;
use crate::ranking::CohortRanking;
use crate::scoring::RewriteComparison;

/// Descriptions shorter than this (chars) are rejected before scoring.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

#[instrument(skip(state, request))]
pub async fn analyze_product_handler(
    State(state): State<AppState>,
    Json(request): Json<serde_json::Value>,
) -> Result<Json<AnalysisResponse>, GatewayError> {
    let product: Product = parse_request(request)?;
    check_description("description", &product.description)?;
    debug!(product = product_fingerprint(&product), "Analyzing product");

    let scorer = Arc::clone(&state.scorer);
    let (product, analysis) = run_blocking(move || {
        let analysis = scorer.analyze(&product)?;
        Ok((product, analysis))
    })
    .await?;

    let mut generated_queries = analysis.queries;
    generated_queries.truncate(SURFACED_QUERY_COUNT);

    Ok(Json(AnalysisResponse {
        product,
        ai_visibility_score: analysis.score,
        score_breakdown: analysis.breakdown,
        weakness_analysis: analysis.weaknesses,
        generated_queries,
    }))
}

#[instrument(skip(state, request))]
pub async fn rank_products_handler(
    State(state): State<AppState>,
    Json(request): Json<serde_json::Value>,
) -> Result<Json<CohortRanking>, GatewayError> {
    let request: CohortRequest = parse_request(request)?;
    if request.competitors.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "at least one competitor is required".to_string(),
        ));
    }
    check_description("product.description", &request.product.description)?;
    for competitor in &request.competitors {
        check_description("competitors[].description", &competitor.description)?;
    }

    let ranking = state
        .ranker
        .rank_against_cohort_concurrent(&request.product, &request.competitors)
        .await?;

    Ok(Json(ranking))
}

#[instrument(skip(request))]
pub async fn compare_features_handler(
    Json(request): Json<serde_json::Value>,
) -> Result<Json<FeatureReport>, GatewayError> {
    let request: CohortRequest = parse_request(request)?;
    Ok(Json(compare_features(&request.product, &request.competitors)))
}

#[instrument(skip(state, request))]
pub async fn rescore_description_handler(
    State(state): State<AppState>,
    Json(request): Json<serde_json::Value>,
) -> Result<Json<RewriteComparison>, GatewayError> {
    let request: RescoreRequest = parse_request(request)?;
    check_description("product.description", &request.product.description)?;
    check_description("rewritten_description", &request.rewritten_description)?;

    let scorer = Arc::clone(&state.scorer);
    let comparison = run_blocking(move || {
        Ok(scorer.rescore_rewrite(&request.product, &request.rewritten_description)?)
    })
    .await?;

    Ok(Json(comparison))
}

pub(crate) fn parse_request<T: DeserializeOwned>(
    request: serde_json::Value,
) -> Result<T, GatewayError> {
    serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))
}

pub(crate) fn check_description(field: &str, description: &str) -> Result<(), GatewayError> {
    let chars = description.chars().count();
    if chars < MIN_DESCRIPTION_CHARS {
        return Err(GatewayError::InvalidRequest(format!(
            "{} must be at least {} characters (got {})",
            field, MIN_DESCRIPTION_CHARS, chars
        )));
    }
    Ok(())
}

/// Runs CPU-bound scoring on the blocking pool.
async fn run_blocking<T, F>(f: F) -> Result<T, GatewayError>
where
    F: FnOnce() -> Result<T, GatewayError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| GatewayError::InternalError(format!("Scoring task failed: {}", e)))?
}
