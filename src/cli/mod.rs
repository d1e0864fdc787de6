use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "claimcheck",
    about = "A heuristic claim-analysis and fact-check simulation CLI",
    version,
    author,
    long_about = None
)]
pub struct ClaimCheckCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a single claim
    Check {
        /// The claim text (at least 10 characters)
        claim: Option<String>,

        /// Read the claim from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Backend endpoint URL, e.g. http://localhost:5000/api/fact-check
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Skip the remote attempt and go straight to the local simulation
        #[arg(long)]
        offline: bool,

        /// Surface backend failures instead of silently falling back
        #[arg(long)]
        strict: bool,

        /// Fixed seed for the simulation rng
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip the artificial processing delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Check claims interactively, one after another
    Interactive {
        /// Backend endpoint URL
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Skip the remote attempt and go straight to the local simulation
        #[arg(long)]
        offline: bool,
    },

    /// List the curated source catalog
    Sources,
}
