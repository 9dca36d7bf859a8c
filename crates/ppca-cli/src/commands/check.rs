//! One-shot analyze/verify commands.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use ppca_core::{CodeAnalyzer, CodeRequest, GroqClient, Operation, ServiceConfig, Suite};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::UpstreamArgs;
use crate::output;

#[derive(Args)]
pub struct CheckArgs {
    /// File containing the code, or - for stdin
    pub file: PathBuf,

    /// Suite the code belongs to (power_apps, power_bi, power_automate)
    #[arg(short, long, value_parser = parse_suite)]
    pub suite: Suite,

    /// Print the raw JSON result
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub upstream: UpstreamArgs,
}

fn parse_suite(s: &str) -> Result<Suite, String> {
    Suite::parse(s).map_err(|_| {
        let known: Vec<&str> = Suite::ALL.iter().map(|s| s.as_str()).collect();
        format!("expected one of: {}", known.join(", "))
    })
}

fn read_code(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut code = String::new();
        std::io::stdin()
            .read_to_string(&mut code)
            .context("Failed to read code from stdin")?;
        return Ok(code);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub async fn execute(operation: Operation, args: CheckArgs, mut config: ServiceConfig) -> Result<()> {
    args.upstream.apply(&mut config);
    config.validate()?;

    if !config.has_api_key() {
        anyhow::bail!(
            "GROQ_API_KEY environment variable not set.\n\
             Set it with: export GROQ_API_KEY=your-key"
        );
    }

    let code = read_code(&args.file)?;
    let request = CodeRequest::new(&code, args.suite)?;

    let backend = Arc::new(GroqClient::new(config.groq_settings()));
    let analyzer = CodeAnalyzer::new(backend, config.analyzer_settings());

    if !args.json {
        println!(
            "{} Running {} for {} with {}",
            "→".dimmed(),
            operation.noun(),
            args.suite.label().cyan(),
            config.model.dimmed()
        );
        println!();
    }

    match operation {
        Operation::Analyze => {
            let result = analyzer.analyze(&request).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                output::print_analysis(&result);
            }
        }
        Operation::Verify => {
            let result = analyzer.verify(&request).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                output::print_verification(&result);
            }
        }
    }

    Ok(())
}
