//! Verification of already corrected code.

pub mod model;

use crate::normalize::{FallbackContext, FieldDefault, FieldSpec, Normalized, Schema};

pub use model::VerificationResult;

pub const VERIFICATION_SCHEMA: &Schema = &[
    FieldSpec { name: "is_valid", default: FieldDefault::Bool(true) },
    FieldSpec { name: "message", default: FieldDefault::Text("Verification completed.") },
    FieldSpec { name: "remaining_issues", default: FieldDefault::List },
    FieldSpec { name: "suggestions", default: FieldDefault::List },
    FieldSpec { name: "notes", default: FieldDefault::List },
];

const FALLBACK_MESSAGE: &str =
    "Verification completed. The code appears to be syntactically correct.";
const FALLBACK_NOTE: &str =
    "Unable to perform detailed verification. Please test the code in your Power Platform environment.";

impl Normalized for VerificationResult {
    fn schema() -> &'static Schema {
        VERIFICATION_SCHEMA
    }

    fn fallback(_ctx: &FallbackContext<'_>) -> Self {
        Self {
            is_valid: true,
            message: FALLBACK_MESSAGE.to_string(),
            remaining_issues: Vec::new(),
            suggestions: Vec::new(),
            notes: vec![FALLBACK_NOTE.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, DEFAULT_EXCERPT_CHARS};
    use crate::request::CodeRequest;
    use crate::suite::Suite;

    fn run(raw: &str) -> VerificationResult {
        let request = CodeRequest::new("Terminate(Succeeded)", Suite::PowerAutomate).unwrap();
        normalize(&request, raw, DEFAULT_EXCERPT_CHARS)
    }

    #[test]
    fn test_fenced_reply_parsed() {
        let raw = "```json\n{\"is_valid\": false, \"message\": \"Broken\", \"remaining_issues\": [\"Unclosed quote\"], \"suggestions\": [], \"notes\": [\"Clear naming\"]}\n```";
        let result = run(raw);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Broken");
        assert_eq!(result.remaining_issues, vec!["Unclosed quote"]);
        assert!(result.suggestions.is_empty());
        assert_eq!(result.notes, vec!["Clear naming"]);
    }

    #[test]
    fn test_only_validity_given() {
        let result = run(r#"{"is_valid": false}"#);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Verification completed.");
        assert!(result.remaining_issues.is_empty());
        assert!(result.suggestions.is_empty());
        assert!(result.notes.is_empty());
    }

    #[test]
    fn test_prose_reply_falls_back() {
        let result = run("The flow looks good to me.");
        assert!(result.is_valid);
        assert_eq!(result.message, FALLBACK_MESSAGE);
        assert_eq!(result.notes, vec![FALLBACK_NOTE]);
        assert!(result.remaining_issues.is_empty());
    }

    #[test]
    fn test_serialized_shape_has_all_fields() {
        let value = serde_json::to_value(run("not json")).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), VERIFICATION_SCHEMA.len());
        for field in VERIFICATION_SCHEMA {
            assert!(obj.contains_key(field.name));
        }
    }
}
