//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use ppca_core::ServiceConfig;
use std::path::PathBuf;

use super::UpstreamArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PPCA_PORT")]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long, env = "PPCA_HOST")]
    pub host: Option<String>,

    /// Directory with front-end assets served at /
    #[arg(long, env = "PPCA_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    #[command(flatten)]
    pub upstream: UpstreamArgs,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (default: ./ppca-serve.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl ServeArgs {
    pub fn apply(&self, config: &mut ServiceConfig) {
        self.upstream.apply(config);
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(dir) = &self.static_dir {
            config.static_dir = Some(dir.clone());
        }
    }
}

pub async fn execute(args: ServeArgs, mut config: ServiceConfig) -> Result<()> {
    args.apply(&mut config);
    config.validate()?;

    println!();
    println!(
        "  {} {}",
        "PPCA".cyan().bold(),
        "Power Platform Code Analyzer".bold()
    );
    println!();
    println!("  {}   http://{}/analyze", "Analyze".green(), config.bind_addr());
    println!("  {}    http://{}/verify", "Verify".green(), config.bind_addr());
    println!("  {}    http://{}/health", "Health".green(), config.bind_addr());
    println!("  {}     {}", "Model".green(), config.model);
    if !config.has_api_key() {
        println!();
        println!(
            "  {} {}",
            "!".yellow().bold(),
            "GROQ_API_KEY is not set. Set it in the environment or in ppca.toml.".yellow()
        );
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    ppca_web::run_server(&config).await?;

    Ok(())
}
