//! HTTP API for WHO growth z-scores.
//!
//! ## Endpoints
//!
//! - `POST /zscore` - Compute a z-score and classification
//! - `GET /health` - Report service status and loaded table count

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

pub use error::{ApiError, ErrorResponse};
pub use handlers::HealthResponse;

use crate::reference::ReferenceStore;

/// Create the API router over a loaded reference store
pub fn create_router(store: Arc<ReferenceStore>) -> Router {
    Router::new()
        .route("/zscore", post(handlers::compute_zscore))
        .route("/health", get(handlers::health))
        .with_state(store)
}
