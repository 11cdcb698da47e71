//! CLI command definitions and argument parsing.

use cardsmith_io::FileKind;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Cardsmith - Turn text into question/answer study cards.
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

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// Pretty JSON card set
    Json,
    /// CSV with a Question,Answer header
    Csv,
}

/// File kind options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// JSON card set
    Json,
    /// CSV table
    Csv,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate cards from text with an LLM
    Extract(ExtractArgs),

    /// Import a card set from a JSON or CSV file
    Import(ImportArgs),

    /// Convert a card file to JSON or CSV
    Export(ExportArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Text to extract cards from
    #[arg(long, conflicts_with_all = ["file", "stdin"])]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, conflicts_with = "stdin")]
    pub file: Option<PathBuf>,

    /// Read the text from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Article URL the text came from (sets title and source)
    #[arg(short, long)]
    pub url: Option<String>,

    /// API key for this call (overrides the configured key)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Ask the proxy for its canned mock response
    #[arg(long)]
    pub mock: bool,

    /// Override the inference server base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the model name
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// File to import
    pub path: PathBuf,

    /// File kind (inferred from the extension when omitted)
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Card file to read
    pub path: PathBuf,

    /// Kind of the input file (inferred from the extension when omitted)
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Output file, or a directory to write a generated file name into
    #[arg(short, long)]
    pub to: PathBuf,

    /// Output kind (inferred from the output extension, else JSON)
    #[arg(long = "as", value_enum)]
    pub as_kind: Option<KindArg>,
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
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Csv => crate::config::OutputFormat::Csv,
        }
    }
}

impl From<KindArg> for FileKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Json => FileKind::Json,
            KindArg::Csv => FileKind::Csv,
        }
    }
}
