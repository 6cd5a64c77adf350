//! Hash endpoint handler.

use std::str::FromStr;
use std::time::{Duration, Instant};

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use cachesum_types::digest::DigestAlgorithm;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for computing a hash.
#[derive(Debug, Deserialize)]
pub struct HashRequest {
    pub input: String,
    pub algorithm: String,
}

/// Response payload.
#[derive(Debug, Serialize)]
pub struct HashResponse {
    pub hash: String,
    pub algorithm: String,
}

/// POST /api/v1/hash - Return the digest of `input` under `algorithm`,
/// computing and caching it on a miss.
pub async fn compute_hash(
    State(state): State<AppState>,
    Json(body): Json<HashRequest>,
) -> Result<Json<ApiResponse<HashResponse>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    // Invalid arguments never reach the orchestrator.
    if body.input.is_empty() {
        return Err(AppError::Validation("input is required".to_string()));
    }
    let algorithm = DigestAlgorithm::from_str(&body.algorithm)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // Bound the in-flight store calls by the configured timeout.
    let cancel = CancellationToken::new();
    let timeout = Duration::from_millis(state.config.cache.store_timeout_ms);
    let timer = cancel.clone();
    let timeout_task = tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        timer.cancel();
    });

    let result = state
        .digest_service
        .compute_or_fetch(&body.input, algorithm, &cancel)
        .await;
    timeout_task.abort();
    let digest = result?;

    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(
        HashResponse {
            hash: digest.digest().to_string(),
            algorithm: digest.algorithm().as_str().to_string(),
        },
        request_id,
        elapsed,
    )))
}
