//! Route handlers.

pub mod analysis;
pub mod health;
pub mod verification;

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use ppca_core::{AnalyzerError, CodeRequest, Operation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

pub const NO_DATA_MESSAGE: &str = "No data provided";

/// Body of every non-200 response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody { error: message.into() }))
}

/// Validate a `{code, suite}` body.
///
/// Missing, unreadable or empty JSON counts as no data. Non-string
/// fields count as absent.
pub(crate) fn submission(body: Result<Json<Value>, JsonRejection>) -> Result<CodeRequest, ApiError> {
    let fields = match body {
        Ok(Json(Value::Object(fields))) if !fields.is_empty() => fields,
        Ok(_) => return Err(error_response(StatusCode::BAD_REQUEST, NO_DATA_MESSAGE)),
        Err(rejection) => {
            debug!(error = %rejection, "Rejected request body");
            return Err(error_response(StatusCode::BAD_REQUEST, NO_DATA_MESSAGE));
        }
    };

    CodeRequest::from_fields(
        fields.get("code").and_then(Value::as_str),
        fields.get("suite").and_then(Value::as_str),
    )
    .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))
}

/// Map a pipeline error to its HTTP response.
pub(crate) fn failure(operation: Operation, err: AnalyzerError) -> ApiError {
    if err.is_validation() {
        return error_response(StatusCode::BAD_REQUEST, err.to_string());
    }
    error!(operation = operation.as_str(), error = %err, "Request failed");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("An error occurred during {}: {}", operation.noun(), err),
    )
}
