//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ppca_core::ServiceConfig;
use std::path::PathBuf;
use tracing::debug;

pub mod check;
pub mod serve;

/// Power Platform Code Analyzer - LLM-backed analysis of Power Platform code
#[derive(Parser)]
#[command(name = "ppca")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./ppca.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),

    /// Analyze a snippet for errors and print a corrected version
    Analyze(check::CheckArgs),

    /// Verify that a (corrected) snippet is valid
    Verify(check::CheckArgs),
}

/// Completion API settings shared by every command.
#[derive(Args, Clone, Default)]
pub struct UpstreamArgs {
    /// API key for the completion provider
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier
    #[arg(long, env = "PPCA_MODEL")]
    pub model: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "PPCA_BASE_URL")]
    pub base_url: Option<String>,

    /// Seconds to wait for a completion before failing
    #[arg(long, env = "PPCA_UPSTREAM_TIMEOUT")]
    pub timeout: Option<u64>,
}

impl UpstreamArgs {
    /// Override `config` with every flag that was given.
    pub fn apply(&self, config: &mut ServiceConfig) {
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            config.upstream_timeout_secs = secs;
        }
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = ServiceConfig::load(self.config.as_deref())
            .context("Failed to load configuration")?;
        debug!(config_file = ?self.config, model = %config.model, "Configuration loaded");

        match self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Analyze(args) => check::execute(ppca_core::Operation::Analyze, args, config).await,
            Commands::Verify(args) => check::execute(ppca_core::Operation::Verify, args, config).await,
        }
    }
}
