//! CLI argument definitions using clap
//!
//! Commands:
//! - formsmith init --config <path>
//! - formsmith serve --config <path>
//! - formsmith compile --fields <path>
//! - formsmith check --fields <path> --values <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// formsmith - prompt-driven form generation with strict validation
#[derive(Parser, Debug)]
#[command(name = "formsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./formsmith.json")]
        config: PathBuf,
    },

    /// Start the form API server
    Serve {
        /// Path to configuration file (defaults apply if the file is absent)
        #[arg(long, default_value = "./formsmith.json")]
        config: PathBuf,
    },

    /// Compile a field-descriptor file and print the schema report
    Compile {
        /// Path to a JSON field-descriptor list
        #[arg(long)]
        fields: PathBuf,
    },

    /// Validate a submission record against a field-descriptor file
    Check {
        /// Path to a JSON field-descriptor list
        #[arg(long)]
        fields: PathBuf,

        /// Path to a JSON object mapping field names to values
        #[arg(long)]
        values: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
