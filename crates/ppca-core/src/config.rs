//! Service configuration.
//!
//! Built once at process start from defaults, an optional TOML file and
//! command-line/environment overrides, then passed explicitly to the
//! components that need it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::analyzer::AnalyzerSettings;
use crate::completion::groq::{self, GroqSettings};
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::normalize::DEFAULT_EXCERPT_CHARS;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "ppca.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Credential for the completion API. The server starts without it.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub provider_name: String,
    pub host: String,
    pub port: u16,
    pub upstream_timeout_secs: u64,
    pub excerpt_chars: usize,
    /// Front-end assets served for non-API routes.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: groq::DEFAULT_MODEL.to_string(),
            base_url: groq::DEFAULT_BASE_URL.to_string(),
            provider_name: groq::DEFAULT_PROVIDER.to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            upstream_timeout_secs: 60,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            static_dir: None,
        }
    }
}

impl ServiceConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> AnalyzerResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| AnalyzerError::config(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `ppca.toml` in the
    /// working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> AnalyzerResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !candidate.exists() {
                    debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        debug!(path = %path.display(), "Loading config file");
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> AnalyzerResult<()> {
        if self.upstream_timeout_secs == 0 {
            return Err(AnalyzerError::config("upstream_timeout_secs must be greater than zero"));
        }
        if self.model.trim().is_empty() {
            return Err(AnalyzerError::config("model must not be empty"));
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn groq_settings(&self) -> GroqSettings {
        GroqSettings {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            provider: self.provider_name.clone(),
            timeout: self.upstream_timeout(),
        }
    }

    pub fn analyzer_settings(&self) -> AnalyzerSettings {
        AnalyzerSettings {
            upstream_timeout: self.upstream_timeout(),
            excerpt_chars: self.excerpt_chars,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
