//! CLI module for hostboard
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hostboard - property listing onboarding from the terminal
#[derive(Parser, Debug)]
#[command(name = "hostboard")]
#[command(version)]
#[command(about = "Property listing onboarding wizard with OTP login")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

impl Cli {
    /// Log filter implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive onboarding wizard
    Tui,

    /// Walk through login, onboarding and submission with scripted input
    Demo {
        /// Print the final wizard snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved configuration as JSON
    Config,
}
