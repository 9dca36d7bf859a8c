//! Analysis route handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use ppca_core::{AnalysisResult, Operation};
use serde_json::Value;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use super::{failure, submission, ApiError};
use crate::state::AppState;

/// `POST /analyze` with `{code, suite}`.
pub async fn analyze_code(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let request = submission(body)?;
    let span = info_span!("analyze", request_id = %Uuid::new_v4(), suite = %request.suite());

    let result = state
        .analyzer
        .analyze(&request)
        .instrument(span.clone())
        .await
        .map_err(|e| failure(Operation::Analyze, e))?;

    span.in_scope(|| {
        info!(
            has_errors = result.has_errors,
            errors = result.errors.len(),
            severity = result.severity.as_str(),
            "Analysis complete"
        )
    });
    Ok(Json(result))
}
