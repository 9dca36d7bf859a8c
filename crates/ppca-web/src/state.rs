//! Application state.

use ppca_core::{CodeAnalyzer, GroqClient, ServiceConfig};
use std::sync::Arc;

/// Application state shared across handlers.
///
/// Immutable after startup; every request runs its own pipeline.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: CodeAnalyzer,
}

impl AppState {
    pub fn new(analyzer: CodeAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Build the state for a Groq-backed server.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let backend = Arc::new(GroqClient::new(config.groq_settings()));
        Self::new(CodeAnalyzer::new(backend, config.analyzer_settings()))
    }
}
