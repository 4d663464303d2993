//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for query results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with confidence, sources, and follow-ups
    Full,
    /// Only the answer text
    Answer,
    /// JSON output
    Json,
}

/// CLI arguments for cityline
#[derive(Parser, Debug)]
#[command(name = "cityline")]
#[command(author, version, about = "City information assistant backed by specialized agents")]
#[command(long_about = r#"
Cityline answers city-life questions by routing them to a team of
specialized agents (government services, transport, lifestyle, weather,
business) and synthesizing their answers into one response.

Each query is classified by intent, urgency, and complexity, matched
against orchestration rules, and dispatched to the allocated agents in
parallel. Partial failures are tolerated; if no agent can answer, a
fixed fallback response is returned.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./cityline.toml     Project-level config
3. ~/.config/cityline/config.toml   Global config

Example:
  cityline "What's the weather like in Dubai today?"
  cityline --user resident-42 -o json "How do I renew my trade license?"
  cityline --status
"#)]
pub struct Cli {
    /// The question to ask (required unless --status or --show-config)
    pub question: Option<String>,

    /// User id attached to the interaction record
    #[arg(short, long, value_name = "ID")]
    pub user: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the header in full output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Show orchestrator status and exit
    #[arg(long)]
    pub status: bool,

    /// Append interaction records to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_question_with_options() {
        let cli = Cli::try_parse_from([
            "cityline",
            "--user",
            "resident-42",
            "-o",
            "json",
            "-vv",
            "Is the metro running?",
        ])
        .unwrap();
        assert_eq!(cli.question.as_deref(), Some("Is the metro running?"));
        assert_eq!(cli.user.as_deref(), Some("resident-42"));
        assert!(matches!(cli.output, OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_status_without_question() {
        let cli = Cli::try_parse_from(["cityline", "--status"]).unwrap();
        assert!(cli.status);
        assert!(cli.question.is_none());
    }

    #[test]
    fn test_output_defaults_to_full() {
        let cli = Cli::try_parse_from(["cityline", "hello"]).unwrap();
        assert!(matches!(cli.output, OutputFormat::Full));
        assert!(!cli.no_config);
    }

    #[test]
    fn test_invalid_output_format_rejected() {
        assert!(Cli::try_parse_from(["cityline", "-o", "yaml", "hi"]).is_err());
    }
}
