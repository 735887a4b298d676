//! Command-line interface for the SOS terminal.

use clap::Parser;
use std::path::PathBuf;

/// Strictly SOS - play SOS in the terminal
#[derive(Parser, Debug)]
#[command(name = "sos")]
#[command(about = "Two-player SOS in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (3-20). Overrides the settings file.
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Rule variant: "simple" or "general". Overrides the settings file.
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
