//! Tapestry documentation tools

#![warn(missing_docs)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use tapestry_core::documentation::{ComponentDocs, DocsRegistry};
use tapestry_site::{markdown, SiteGenerator};
use tracing::debug;

mod config;

#[derive(Parser)]
#[command(name = "tapestry")]
#[command(about = "Tapestry design system documentation tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the static documentation site
    Build {
        /// Output directory (defaults to the configured output dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List registered components
    List {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
    },

    /// Render one component page to stdout
    Show {
        /// Component name
        name: String,
    },

    /// Validate every entry and its example functions
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = config::load_config(cli.config)?;
    debug!(title = %config.site.title, "configuration loaded");

    let registry = DocsRegistry::with_components()?;

    match cli.command {
        Commands::Build { output } => {
            let output = output.unwrap_or_else(|| config.build.output_dir.clone());
            SiteGenerator::new(&registry, config.site.title.as_str(), output).build()?;
        }

        Commands::List { category } => match category {
            Some(category) => {
                for docs in registry.list_category(&category) {
                    println!("{}", docs.name);
                }
            }
            None => {
                for docs in registry.list() {
                    println!("{} ({})", docs.name, docs.category);
                }
            }
        },

        Commands::Show { name } => {
            let docs = registry.lookup(&name)?;
            println!("{}", markdown::component_page(docs));
        }

        Commands::Check => check(&registry)?,
    }

    Ok(())
}

fn check(registry: &DocsRegistry) -> Result<()> {
    let mut failures = 0;
    for docs in registry.list() {
        match check_entry(docs) {
            Ok(()) => println!("{} {}", "ok".green(), docs.name),
            Err(reason) => {
                println!("{} {}: {}", "fail".red(), docs.name, reason);
                failures += 1;
            }
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} documentation entries failed validation");
    }
    Ok(())
}

fn check_entry(docs: &ComponentDocs) -> std::result::Result<(), String> {
    docs.validate().map_err(|err| err.to_string())?;

    if (docs.example)() != (docs.example)() {
        return Err("example output is not deterministic".to_string());
    }

    for section in &docs.additional {
        if section.label.trim().is_empty() {
            return Err("section with empty label".to_string());
        }
        if let Some(example) = section.example {
            if example() != example() {
                return Err(format!(
                    "section '{}' example output is not deterministic",
                    section.label
                ));
            }
        }
    }

    Ok(())
}
