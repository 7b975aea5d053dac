//! Axum request handlers.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use super::error::ApiResult;
use crate::algorithm::assess;
use crate::models::{ScoreResult, ZScoreRequest};
use crate::reference::ReferenceStore;

/// Compute a z-score and classification
///
/// `POST /zscore` with `{sex, indicator, years, months, length, weight}`.
pub async fn compute_zscore(
    State(store): State<Arc<ReferenceStore>>,
    Json(request): Json<ZScoreRequest>,
) -> ApiResult<Json<ScoreResult>> {
    log::info!("POST /zscore - payload: {request:?}");
    let result = assess(&store, &request)?;
    Ok(Json(result))
}

/// Liveness report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Number of loaded reference tables
    pub tables: usize,
}

/// `GET /health`
pub async fn health(State(store): State<Arc<ReferenceStore>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        tables: store.len(),
    })
}
