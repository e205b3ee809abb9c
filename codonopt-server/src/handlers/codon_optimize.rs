use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use codonopt_core::validate_request;
use codonopt_model::{CodonOptimizeRequest, CodonOptimizeResponse};
use tracing::{Level, debug};

use crate::infra::{app_state::AppState, errors::AppResult};

/// Codon-optimize a batch of sequences
///
/// # Request
///
/// ```json
/// {
///   "sequences": [
///     { "name": "gfp", "type": "DNA", "seq": "ATGAAACGTTAA" },
///     { "name": "pep", "type": "Protein", "seq": "MKR*" }
///   ]
/// }
/// ```
///
/// # Response
///
/// - `200 OK` with one entry per input sequence, in request order
/// - `400 Bad Request` for malformed JSON
/// - `415 Unsupported Media Type` without a JSON content type
/// - `422 Unprocessable Entity` for missing fields or bad residues
/// - `500 Internal Server Error` when any sequence cannot be optimized;
///   no partial result is returned
pub async fn codon_optimize_handler(
    State(state): State<AppState>,
    payload: Result<Json<CodonOptimizeRequest>, JsonRejection>,
) -> AppResult<Json<CodonOptimizeResponse>> {
    let Json(request) = payload?;
    validate_request(&request)?;

    let optimizer = Arc::clone(state.optimizer());
    let response = tokio::task::spawn_blocking(move || {
        optimizer.optimize_batch(&request)
    })
    .await??;

    if tracing::enabled!(Level::DEBUG) {
        match serde_json::to_string(&response) {
            Ok(body) => debug!(%body, "codon_optimize response"),
            Err(err) => debug!(error = %err, "response not serializable"),
        }
    }

    Ok(Json(response))
}
