//! Genba - project knowledge prompt generator
//!
//! CLI entry point: select a project, render it, print or write the prompt.

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use genba::cli::Cli;
use genba::config::Config;
use genba::{AssistantType, KnowledgeDocument, PromptLoader, PromptRequest, generate};

fn setup_logging(verbose: bool) -> Result<()> {
    // RUST_LOG wins unless --verbose forces debug
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(tracing::Level::WARN.as_str()))
    };

    // stdout carries the prompt, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(dir) = &cli.templates {
        config.templates.dir = dir.clone();
    }
    let knowledge_path = cli.knowledge.clone().unwrap_or_else(|| config.knowledge_path.clone());

    if cli.list {
        return cmd_list(&knowledge_path);
    }

    let Some(assistant) = cli.ai else {
        eyre::bail!("--ai is required unless --list is given");
    };

    cmd_generate(&cli, &config, assistant, knowledge_path)
}

/// Print project names, one per line
fn cmd_list(knowledge_path: &Path) -> Result<()> {
    let document = KnowledgeDocument::load(knowledge_path)?;
    for name in document.project_names() {
        println!("{}", name);
    }
    Ok(())
}

/// Render the prompt and send it to stdout or the output file
fn cmd_generate(cli: &Cli, config: &Config, assistant: AssistantType, knowledge_path: PathBuf) -> Result<()> {
    let request = PromptRequest {
        assistant,
        project: cli.project.clone(),
        knowledge_path,
        strict: cli.strict || config.selection.strict,
    };
    let mut loader = PromptLoader::new(&config.templates);

    let prompt = generate(&request, &mut loader)?;
    info!(project = %prompt.project, %assistant, fallback = prompt.fallback, "Prompt generated");

    match &cli.output {
        Some(path) => {
            fs::write(path, &prompt.text).context(format!("Failed to write output file: {}", path.display()))?;
            println!("{} Wrote prompt to {}", "✓".green(), path.display().to_string().cyan());
        }
        None => println!("{}", prompt.text),
    }

    Ok(())
}
