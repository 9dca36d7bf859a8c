//! Validated submissions and the two operations run on them.

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::suite::Suite;

/// Message returned for a missing or blank code field.
pub const MISSING_CODE_MESSAGE: &str = "Code is required";

/// What the caller wants done with a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Analyze,
    Verify,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Analyze => "analyze",
            Operation::Verify => "verify",
        }
    }

    /// Sampling temperature sent upstream.
    pub fn temperature(&self) -> f32 {
        match self {
            Operation::Analyze => 0.3,
            Operation::Verify => 0.2,
        }
    }

    /// Output token budget sent upstream.
    pub fn max_tokens(&self) -> u32 {
        match self {
            Operation::Analyze => 2000,
            Operation::Verify => 1500,
        }
    }

    /// Noun used in user-facing failure messages ("during analysis").
    pub fn noun(&self) -> &'static str {
        match self {
            Operation::Analyze => "analysis",
            Operation::Verify => "verification",
        }
    }

    pub(crate) fn error_context(&self) -> &'static str {
        match self {
            Operation::Analyze => "",
            Operation::Verify => " during verification",
        }
    }
}

/// A code snippet plus the suite it belongs to.
///
/// Only constructible through validation: `code` is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRequest {
    code: String,
    suite: Suite,
}

pub type AnalysisRequest = CodeRequest;
pub type VerificationRequest = CodeRequest;

impl CodeRequest {
    pub fn new(code: &str, suite: Suite) -> AnalyzerResult<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AnalyzerError::validation(MISSING_CODE_MESSAGE));
        }
        Ok(Self {
            code: code.to_string(),
            suite,
        })
    }

    /// Validate raw, possibly absent, fields from a request body.
    ///
    /// Code is checked before suite.
    pub fn from_fields(code: Option<&str>, suite: Option<&str>) -> AnalyzerResult<Self> {
        let code = code.map(str::trim).unwrap_or_default();
        if code.is_empty() {
            return Err(AnalyzerError::validation(MISSING_CODE_MESSAGE));
        }
        let suite = Suite::parse(suite.unwrap_or_default())?;
        Self::new(code, suite)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn suite(&self) -> Suite {
        self.suite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::INVALID_SUITE_MESSAGE;

    #[test]
    fn test_from_fields_trims_code() {
        let req = CodeRequest::from_fields(Some("  Sum(Sales[Amount])\n"), Some("power_bi")).unwrap();
        assert_eq!(req.code(), "Sum(Sales[Amount])");
        assert_eq!(req.suite(), Suite::PowerBi);
    }

    #[test]
    fn test_blank_code_rejected_first() {
        let err = CodeRequest::from_fields(Some("  \n\t"), Some("power_excel")).unwrap_err();
        assert_eq!(err.to_string(), MISSING_CODE_MESSAGE);

        let err = CodeRequest::from_fields(None, None).unwrap_err();
        assert_eq!(err.to_string(), MISSING_CODE_MESSAGE);
    }

    #[test]
    fn test_missing_suite_rejected() {
        let err = CodeRequest::from_fields(Some("Navigate(Home)"), None).unwrap_err();
        assert_eq!(err.to_string(), INVALID_SUITE_MESSAGE);
    }

    #[test]
    fn test_operation_parameters() {
        assert_eq!(Operation::Analyze.max_tokens(), 2000);
        assert_eq!(Operation::Verify.max_tokens(), 1500);
        assert!(Operation::Verify.temperature() < Operation::Analyze.temperature());
    }
}
