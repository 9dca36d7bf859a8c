//! Analysis domain models.

use serde::{Deserialize, Serialize};

/// How serious the problems found in a snippet are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// Result of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub has_errors: bool,
    pub errors: Vec<String>,
    pub corrected_code: String,
    pub changes: Vec<String>,
    pub explanation: String,
    pub best_practices: Vec<String>,
    pub severity: Severity,
}
