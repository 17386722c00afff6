//! CLI command definitions and argument parsing.

use cardsmith_domain::RecordKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cardsmith - Turn text into flashcards and discussion questions.
#[derive(Debug, Parser)]
#[command(name = "cardsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one record per line)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate cards or questions from text with the LLM
    Generate(GenerateArgs),

    /// Extract records from a saved LLM response body, offline
    Parse(ParseArgs),

    /// Upload cards from a JSON file to Mochi
    Export(ExportArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Record kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// Flashcards (front/back/deck)
    Cards,
    /// Discussion questions (question/topic)
    Questions,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// What to generate
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Text to generate from
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Read the text from stdin
    #[arg(long, conflicts_with_all = ["text", "file"])]
    pub stdin: bool,

    /// Deck (cards) or topic (questions) to suggest to the model
    #[arg(short, long)]
    pub deck: Option<String>,

    /// Model to use instead of the configured one
    #[arg(short, long)]
    pub model: Option<String>,

    /// Upload the generated cards to Mochi
    #[arg(long)]
    pub export: bool,

    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Mochi API key (with --export)
    #[arg(long, env = "MOCHI_API_KEY", hide_env_values = true)]
    pub mochi_api_key: Option<String>,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// What to extract
    #[arg(value_enum)]
    pub kind: KindArg,

    /// File holding the response body
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Read the response body from stdin
    #[arg(long, conflicts_with = "file")]
    pub stdin: bool,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// JSON file holding an array of cards
    #[arg(long)]
    pub file: PathBuf,

    /// Put every card in this deck
    #[arg(short, long)]
    pub deck: Option<String>,

    /// Mochi API key
    #[arg(long, env = "MOCHI_API_KEY", hide_env_values = true)]
    pub mochi_api_key: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Cards => RecordKind::Cards,
            KindArg::Questions => RecordKind::Questions,
        }
    }
}
