//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::commands::{ListArgs, ParseDateArgs, ParsePriorityArgs, ShowArgs};

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "todofmt")]
#[command(about = "Render todo files and parse due dates and priorities", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file, merged over ./todofmt.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show due dates relative to now ("in 3 hours")
    #[arg(long, global = true)]
    pub humanize: bool,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub porcelain: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print todos as a compact table
    List(ListArgs),

    /// Print one todo with its description and location
    Show(ShowArgs),

    /// Parse a date/time description and print it back
    ParseDate(ParseDateArgs),

    /// Parse a priority and print its band
    ParsePriority(ParsePriorityArgs),
}
