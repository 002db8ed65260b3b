//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wayfinder_domain::Provenance;

/// Wayfinder CLI - Find your way through an Ontario legal problem.
#[derive(Debug, Parser)]
#[command(name = "wayfinder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "WAYFINDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a description of a legal problem
    Classify(ClassifyArgs),

    /// Recommend a forum for a domain and jurisdiction
    Route(RouteArgs),

    /// Inspect the authority registry
    Authorities(AuthoritiesArgs),

    /// Hash and score evidence files
    Evidence(EvidenceArgs),

    /// Score the readability of a file or text
    Readability(ReadabilityArgs),

    /// Classify a matter and generate its document package
    Generate(GenerateArgs),

    /// Show the five-stage journey
    Journey(JourneyArgs),

    /// Enter interactive intake mode
    Repl,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Description of the situation
    pub text: String,

    /// Domain hint (e.g., "tenant", "insurance")
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Jurisdiction hint (e.g., "federal")
    #[arg(short, long)]
    pub jurisdiction: Option<String>,

    /// Amount in dispute, in dollars
    #[arg(short, long)]
    pub amount: Option<f64>,
}

/// Arguments for the route command.
#[derive(Debug, Parser)]
pub struct RouteArgs {
    /// Legal domain (e.g., landlord_tenant, employment)
    #[arg(short, long)]
    pub domain: String,

    /// Jurisdiction hint
    #[arg(short, long, default_value = "ontario")]
    pub jurisdiction: String,

    /// Amount in dispute, in dollars
    #[arg(short, long)]
    pub amount: Option<f64>,

    /// Route as an appeal
    #[arg(long)]
    pub appeal: bool,

    /// Route as an application for judicial review; `--appeal` takes precedence
    #[arg(long)]
    pub judicial_review: bool,
}

/// Arguments for the authorities command.
#[derive(Debug, Parser)]
pub struct AuthoritiesArgs {
    #[command(subcommand)]
    pub action: AuthoritiesAction,
}

/// Authority registry actions.
#[derive(Debug, Subcommand)]
pub enum AuthoritiesAction {
    /// List every authority
    List,

    /// Show one authority
    Show {
        /// Authority id (e.g., ON-LTB)
        id: String,
    },

    /// List authorities due for review
    Stale,

    /// Show where decisions of an authority are escalated
    Escalation {
        /// Authority id
        id: String,
    },
}

/// Arguments for the evidence command.
#[derive(Debug, Parser)]
pub struct EvidenceArgs {
    /// Files to index
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Provenance of the files
    #[arg(short, long, value_enum, default_value = "original")]
    pub provenance: ProvenanceArg,
}

/// Arguments for the readability command.
#[derive(Debug, Parser)]
pub struct ReadabilityArgs {
    /// A file path, or the text itself
    pub input: String,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Description of the situation
    pub text: String,

    /// Evidence files to attach
    #[arg(short, long, num_args = 1..)]
    pub evidence: Vec<PathBuf>,

    /// Domain hint
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Amount in dispute, in dollars
    #[arg(short, long)]
    pub amount: Option<f64>,
}

/// Arguments for the journey command.
#[derive(Debug, Parser)]
pub struct JourneyArgs {
    /// Number of evidence items gathered
    #[arg(short, long, default_value = "0")]
    pub evidence: usize,

    /// Documents have been generated
    #[arg(long)]
    pub documents: bool,

    /// The matter has not been classified yet
    #[arg(long)]
    pub unclassified: bool,
}

/// Evidence provenance options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProvenanceArg {
    /// The original document
    Original,
    /// A copy of the original
    Copy,
    /// A screenshot
    Screenshot,
    /// A transcription
    Transcription,
    /// Received from a third party
    ThirdParty,
    /// Unknown origin
    Unknown,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<ProvenanceArg> for Provenance {
    fn from(arg: ProvenanceArg) -> Self {
        match arg {
            ProvenanceArg::Original => Provenance::Original,
            ProvenanceArg::Copy => Provenance::Copy,
            ProvenanceArg::Screenshot => Provenance::Screenshot,
            ProvenanceArg::Transcription => Provenance::Transcription,
            ProvenanceArg::ThirdParty => Provenance::ThirdParty,
            ProvenanceArg::Unknown => Provenance::Unknown,
        }
    }
}
