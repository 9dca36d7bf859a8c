//! Verification domain models.

use serde::{Deserialize, Serialize};

/// Result of `POST /verify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub is_valid: bool,
    pub message: String,
    pub remaining_issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub notes: Vec<String>,
}
