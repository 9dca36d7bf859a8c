//! Code analysis: error detection and correction.

pub mod model;

use crate::normalize::{FallbackContext, FieldDefault, FieldSpec, Normalized, Schema};

pub use model::{AnalysisResult, Severity};

/// Fields and defaults of an analysis result, in wire order.
pub const ANALYSIS_SCHEMA: &Schema = &[
    FieldSpec { name: "has_errors", default: FieldDefault::Bool(false) },
    FieldSpec { name: "errors", default: FieldDefault::List },
    FieldSpec { name: "corrected_code", default: FieldDefault::Text("") },
    FieldSpec { name: "changes", default: FieldDefault::List },
    FieldSpec { name: "explanation", default: FieldDefault::Text("No explanation available.") },
    FieldSpec { name: "best_practices", default: FieldDefault::List },
    FieldSpec {
        name: "severity",
        default: FieldDefault::OneOf { allowed: &["low", "medium", "high"], fallback: "low" },
    },
];

impl Normalized for AnalysisResult {
    fn schema() -> &'static Schema {
        ANALYSIS_SCHEMA
    }

    /// Conservative "nothing found" answer that echoes the submitted code
    /// and quotes what the model actually said.
    fn fallback(ctx: &FallbackContext<'_>) -> Self {
        Self {
            has_errors: false,
            errors: Vec::new(),
            corrected_code: ctx.request.code().to_string(),
            changes: Vec::new(),
            explanation: format!(
                "Analysis completed but response format was unexpected. Raw response: {}...",
                ctx.excerpt()
            ),
            best_practices: Vec::new(),
            severity: Severity::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, DEFAULT_EXCERPT_CHARS};
    use crate::request::CodeRequest;
    use crate::suite::Suite;

    fn run(raw: &str) -> AnalysisResult {
        let request = CodeRequest::new("Patch(Orders, Defaults(Orders), {Title: \"x\"})", Suite::PowerApps).unwrap();
        normalize(&request, raw, DEFAULT_EXCERPT_CHARS)
    }

    #[test]
    fn test_complete_reply_preserved() {
        let raw = r#"{
            "has_errors": true,
            "errors": ["Missing closing parenthesis"],
            "corrected_code": "Sum(Sales[Amount])",
            "changes": ["Added )"],
            "explanation": "Sums the sales amount.",
            "best_practices": ["Use measures"],
            "severity": "medium"
        }"#;
        let result = run(raw);
        assert!(result.has_errors);
        assert_eq!(result.errors, vec!["Missing closing parenthesis"]);
        assert_eq!(result.corrected_code, "Sum(Sales[Amount])");
        assert_eq!(result.changes, vec!["Added )"]);
        assert_eq!(result.explanation, "Sums the sales amount.");
        assert_eq!(result.best_practices, vec!["Use measures"]);
        assert_eq!(result.severity, Severity::Medium);
    }

    #[test]
    fn test_missing_severity_defaults_to_low() {
        let raw = r#"{"has_errors": true, "errors": ["e"], "corrected_code": "c", "changes": ["x"], "explanation": "why", "best_practices": ["bp"]}"#;
        let result = run(raw);
        assert_eq!(result.severity, Severity::Low);
        assert!(result.has_errors);
        assert_eq!(result.errors, vec!["e"]);
        assert_eq!(result.corrected_code, "c");
        assert_eq!(result.changes, vec!["x"]);
        assert_eq!(result.explanation, "why");
        assert_eq!(result.best_practices, vec!["bp"]);
    }

    #[test]
    fn test_half_empty_reply_is_completed() {
        let result = run(r#"{"has_errors": true, "errors": ["Unknown function"]}"#);
        assert!(result.has_errors);
        assert_eq!(result.corrected_code, "");
        assert_eq!(result.explanation, "No explanation available.");
        assert!(result.changes.is_empty());
        assert!(result.best_practices.is_empty());
    }

    #[test]
    fn test_prose_reply_falls_back() {
        let result = run("Sure, here's the analysis: looks fine!");
        assert!(!result.has_errors);
        assert!(result.errors.is_empty());
        assert!(result.changes.is_empty());
        assert!(result.best_practices.is_empty());
        assert_eq!(result.severity, Severity::Low);
        assert!(result.corrected_code.starts_with("Patch(Orders"));
        assert!(result
            .explanation
            .contains("Raw response: Sure, here's the analysis: looks fine!..."));
    }

    #[test]
    fn test_fallback_quotes_trimmed_reply() {
        let result = run("\n\n   Sure, looks fine!");
        assert!(result.explanation.ends_with("Raw response: Sure, looks fine!..."));
    }

    #[test]
    fn test_fallback_quotes_inside_of_malformed_fence() {
        let result = run("```json\n{not json}\n```");
        assert!(result.explanation.ends_with("Raw response: {not json}..."));
    }

    #[test]
    fn test_structured_errors_survive() {
        let raw = r#"{"has_errors": true, "errors": [{"line": 3, "message": "Missing )"}], "changes": [{"before": "a", "after": "b"}]}"#;
        let result = run(raw);
        assert!(result.has_errors);
        assert_eq!(result.errors, vec![r#"{"line":3,"message":"Missing )"}"#]);
        assert_eq!(result.changes, vec![r#"{"after":"b","before":"a"}"#]);
    }

    #[test]
    fn test_fallback_excerpt_is_truncated() {
        let raw = "x".repeat(500);
        let result = run(&raw);
        let quoted = result.explanation.split("Raw response: ").nth(1).unwrap();
        assert_eq!(quoted, format!("{}...", "x".repeat(200)));
    }

    #[test]
    fn test_empty_reply_falls_back() {
        let result = run("");
        assert_eq!(result.severity, Severity::Low);
        assert!(result.explanation.starts_with("Analysis completed but response format was unexpected."));
    }

    #[test]
    fn test_serialized_shape_has_all_fields() {
        let value = serde_json::to_value(run("{}")).unwrap();
        let obj = value.as_object().unwrap();
        for field in ANALYSIS_SCHEMA {
            assert!(obj.contains_key(field.name), "missing {}", field.name);
        }
        assert_eq!(obj["severity"], "low");
    }
}
