//! CLI entrypoint for cityline
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod cli;

use anyhow::{bail, Result};
use clap::Parser;
use cli::{Cli, OutputFormat};
use cityline_application::{InteractionLogger, NoInteractionLogger, QueryOrchestrator};
use cityline_domain::FinalResponse;
use cityline_infrastructure::{CityAgentService, ConfigLoader, JsonlInteractionLogger};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    // === Dependency Injection ===
    let registry = Arc::new(config.to_registry());
    let rules = config.to_rules();
    let service = Arc::new(CityAgentService::new());

    let log_path = cli.log.clone().or(config.behavior.interaction_log.clone());
    let logger: Arc<dyn InteractionLogger> = match &log_path {
        Some(path) => match JsonlInteractionLogger::new(path) {
            Some(logger) => {
                info!(path = %path.display(), "recording interactions");
                Arc::new(logger)
            }
            None => Arc::new(NoInteractionLogger),
        },
        None => Arc::new(NoInteractionLogger),
    };

    let orchestrator = QueryOrchestrator::new(registry, rules, service).with_logger(logger);

    if cli.status {
        let status = orchestrator.status();
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Try: cityline \"Is the metro running today?\""),
    };

    let user = cli.user.or(config.behavior.default_user);

    if !cli.quiet && matches!(cli.output, OutputFormat::Full) {
        println!();
        println!("Question: {}", question);
        println!();
    }

    let response = orchestrator.process_query(&question, user.as_deref()).await;

    match cli.output {
        OutputFormat::Answer => println!("{}", response.content),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Full => print!("{}", format_full(&response)),
    }

    Ok(())
}

/// Render the full human-readable report for a final response.
fn format_full(response: &FinalResponse) -> String {
    let mut out = String::new();

    out.push_str(&response.content);
    out.push('\n');
    out.push('\n');
    out.push_str(&format!(
        "Confidence: {:.0}%  Tone: {}\n",
        response.confidence * 100.0,
        response.tone
    ));

    if !response.data_sources.is_empty() {
        out.push_str(&format!("Sources: {}\n", response.data_sources.join(", ")));
    }
    if !response.collaborating_agents.is_empty() {
        out.push_str(&format!(
            "Agents: {}\n",
            response.collaborating_agents.join(", ")
        ));
    }
    if !response.follow_up_questions.is_empty() {
        out.push_str("\nYou could also ask:\n");
        for question in &response.follow_up_questions {
            out.push_str(&format!("  - {}\n", question));
        }
    }

    out
}
