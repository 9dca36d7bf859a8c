//! The analyze/verify pipeline: prompt, one completion call, normalization.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::analysis::AnalysisResult;
use crate::completion::{CompletionBackend, CompletionRequest};
use crate::error::{AnalyzerError, AnalyzerResult, UpstreamError};
use crate::normalize::{self, Normalized, DEFAULT_EXCERPT_CHARS};
use crate::prompt;
use crate::request::{AnalysisRequest, CodeRequest, Operation, VerificationRequest};
use crate::verification::VerificationResult;

/// Tunables of the pipeline.
#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    /// Upper bound on a single completion call.
    pub upstream_timeout: Duration,
    /// Characters of an unparseable reply quoted in the fallback object.
    pub excerpt_chars: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            upstream_timeout: Duration::from_secs(60),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

/// Runs submissions through the completion backend.
///
/// Holds no per-request state; clones share the backend.
#[derive(Clone)]
pub struct CodeAnalyzer {
    backend: Arc<dyn CompletionBackend>,
    settings: AnalyzerSettings,
}

impl CodeAnalyzer {
    pub fn new(backend: Arc<dyn CompletionBackend>, settings: AnalyzerSettings) -> Self {
        Self { backend, settings }
    }

    /// Find errors in a snippet and propose a corrected version.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalyzerResult<AnalysisResult> {
        self.run(Operation::Analyze, request).await
    }

    /// Check whether (corrected) code is valid.
    pub async fn verify(&self, request: &VerificationRequest) -> AnalyzerResult<VerificationResult> {
        self.run(Operation::Verify, request).await
    }

    async fn run<T: Normalized>(&self, operation: Operation, request: &CodeRequest) -> AnalyzerResult<T> {
        info!(
            operation = operation.as_str(),
            suite = %request.suite(),
            code_len = request.code().len(),
            "Running completion pipeline"
        );

        let raw = self.invoke(operation, request).await?;
        debug!(operation = operation.as_str(), raw = %raw, "Raw completion reply");

        Ok(normalize::normalize(request, &raw, self.settings.excerpt_chars))
    }

    async fn invoke(&self, operation: Operation, request: &CodeRequest) -> AnalyzerResult<String> {
        let completion = CompletionRequest {
            messages: prompt::build(operation, request).into_messages(),
            temperature: operation.temperature(),
            max_tokens: operation.max_tokens(),
        };

        let timeout = self.settings.upstream_timeout;
        let outcome = match tokio::time::timeout(timeout, self.backend.complete(completion)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout { secs: timeout.as_secs() }),
        };

        outcome.map_err(|source| {
            warn!(operation = operation.as_str(), error = %source, "Completion call failed");
            AnalyzerError::Upstream {
                provider: self.backend.provider().to_string(),
                operation,
                source,
            }
        })
    }
}
