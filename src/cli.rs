//! CLI argument parsing for genba

use clap::Parser;
use std::path::PathBuf;

use crate::prompts::AssistantType;

/// Genba - render project knowledge into AI assistant prompts
#[derive(Parser, Debug)]
#[command(name = "genba")]
#[command(author, version, about = "Render project knowledge into AI assistant prompts", long_about = None)]
pub struct Cli {
    /// Assistant to generate the prompt for
    #[arg(long, value_enum, required_unless_present = "list")]
    pub ai: Option<AssistantType>,

    /// Project name (defaults to the first project in the knowledge file)
    #[arg(long)]
    pub project: Option<String>,

    /// Knowledge file path
    #[arg(long)]
    pub knowledge: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Template directory
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Fail if --project names no project instead of using the first one
    #[arg(long)]
    pub strict: bool,

    /// List project names in the knowledge file and exit
    #[arg(long, conflicts_with_all = ["ai", "project", "output"])]
    pub list: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
