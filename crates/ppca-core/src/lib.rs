//! PPCA Core Library
//!
//! Prompt construction, the completion backend seam and reply
//! normalization for the Power Platform Code Analyzer.

pub mod analysis;
pub mod analyzer;
pub mod completion;
pub mod config;
pub mod error;
pub mod normalize;
pub mod prompt;
pub mod request;
pub mod suite;
pub mod verification;

pub use analysis::{AnalysisResult, Severity};
pub use analyzer::{AnalyzerSettings, CodeAnalyzer};
pub use completion::{CompletionBackend, CompletionRequest, GroqClient};
pub use config::ServiceConfig;
pub use error::{AnalyzerError, AnalyzerResult, UpstreamError};
pub use request::{AnalysisRequest, CodeRequest, Operation, VerificationRequest};
pub use suite::Suite;
pub use verification::VerificationResult;
