use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Preview tool for the page behaviors: run them against text and config files.
#[derive(Debug, Clone, Parser)]
#[command(name = "site-behavior")]
#[command(about = "Preview and check the site's page behaviors outside the browser")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the newsletter address check
    CheckEmail { address: String },

    /// Run the page search against a text file standing in for the page body
    Search {
        #[arg(long)]
        text_file: PathBuf,
        query: String,
    },

    /// Print the map widget calls made at page-ready as JSON
    MapPlan {
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Load and validate a site configuration file
    Validate {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
