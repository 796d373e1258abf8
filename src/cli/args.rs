//! Core CLI types - Cli, Command, and per-command argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::manifest::templates::Template;

/// Partir: Dataset Splitting Tool
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "partir")]
#[command(version)]
#[command(about = "Deterministic dataset splitting with regex withholding and tracking sets")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Split datasets from YAML manifests
    Split(SplitArgs),

    /// Validate manifest files without splitting
    Validate(ValidateArgs),

    /// Display information about a manifest and its cached artifacts
    Info(InfoArgs),

    /// Initialize a new dataset manifest
    Init(InitArgs),
}

/// Arguments for the split command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SplitArgs {
    /// Paths to YAML manifest files, processed in order
    #[arg(value_name = "CONFIG", required = true)]
    pub configs: Vec<PathBuf>,

    /// Directory artifacts are written under
    #[arg(short, long, default_value = "splits")]
    pub out_dir: PathBuf,

    /// Override the manifest seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Recompute even when cached artifacts exist
    #[arg(long)]
    pub overwrite: bool,

    /// Validate, read, and plan without writing artifacts
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Paths to YAML manifest files
    #[arg(value_name = "CONFIG", required = true)]
    pub configs: Vec<PathBuf>,

    /// Show the full manifest summary for each valid file
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to a YAML manifest file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Directory artifacts were written under
    #[arg(short, long, default_value = "splits")]
    pub out_dir: PathBuf,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Dataset name for the generated manifest
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Template to use for initialization
    #[arg(short, long, default_value = "minimal")]
    pub template: InitTemplate,

    /// Input table path recorded in the manifest
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace an existing file at the output path
    #[arg(long)]
    pub force: bool,
}

/// Init template type
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InitTemplate {
    /// Minimal manifest with required fields only
    #[default]
    Minimal,
    /// Full manifest with withholding and tracking examples
    Full,
}

impl From<InitTemplate> for Template {
    fn from(template: InitTemplate) -> Self {
        match template {
            InitTemplate::Minimal => Template::Minimal,
            InitTemplate::Full => Template::Full,
        }
    }
}

impl std::str::FromStr for InitTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" | "min" => Ok(InitTemplate::Minimal),
            "full" | "complete" => Ok(InitTemplate::Full),
            _ => Err(format!("Unknown template: {s}. Valid templates: minimal, full")),
        }
    }
}

impl std::fmt::Display for InitTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitTemplate::Minimal => write!(f, "minimal"),
            InitTemplate::Full => write!(f, "full"),
        }
    }
}
