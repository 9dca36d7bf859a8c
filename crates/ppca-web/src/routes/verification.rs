//! Verification route handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use ppca_core::{Operation, VerificationResult};
use serde_json::Value;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use super::{failure, submission, ApiError};
use crate::state::AppState;

/// `POST /verify` with `{code, suite}`.
pub async fn verify_code(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<VerificationResult>, ApiError> {
    let request = submission(body)?;
    let span = info_span!("verify", request_id = %Uuid::new_v4(), suite = %request.suite());

    let result = state
        .analyzer
        .verify(&request)
        .instrument(span)
        .await
        .map_err(|e| failure(Operation::Verify, e))?;

    Ok(Json(result))
}
