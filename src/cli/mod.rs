//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::OutputFormat;
use crate::domain::{ListKind, Role};

/// Follow Diff - find accounts that don't follow you back.
///
/// Compares a following export with a followers export.
#[derive(Parser, Debug)]
#[command(name = "follow-diff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format: text, table, json, or plain (defaults to config).
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare a following export against a followers export.
    Compare {
        /// Following export (JSON).
        following: PathBuf,

        /// Followers export (JSON).
        followers: PathBuf,

        /// Which list to show: unfollowers, mutual, fans, union.
        #[arg(short, long, default_value = "unfollowers")]
        list: ListKind,

        /// Only show usernames containing this text (case-insensitive).
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print the usernames found in a single export.
    Extract {
        /// Export file (JSON).
        file: PathBuf,

        /// Which list the export holds: following or followers.
        #[arg(short, long)]
        role: Role,
    },

    /// Print a shareable summary of the comparison.
    Share {
        /// Following export (JSON).
        following: PathBuf,

        /// Followers export (JSON).
        followers: PathBuf,

        /// Only include usernames containing this text (case-insensitive).
        #[arg(short, long)]
        search: Option<String>,

        /// Print a share message for a single account instead.
        #[arg(short, long, conflicts_with = "search")]
        user: Option<String>,
    },

    /// Write a list to a text file, one username per line.
    Export {
        /// Following export (JSON).
        following: PathBuf,

        /// Followers export (JSON).
        followers: PathBuf,

        /// Output file path (auto-named in the export directory if not given).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which list to export: unfollowers, mutual, fans, union.
        #[arg(short, long, default_value = "unfollowers")]
        list: ListKind,

        /// Only export usernames containing this text (case-insensitive).
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show configuration.
    Config {
        /// Create the default config file if missing.
        #[arg(long)]
        init: bool,
    },
}

impl Cli {
    /// Parse the output format argument, falling back to `configured`.
    pub fn output_format(&self, configured: &str) -> Result<OutputFormat, String> {
        self.format.as_deref().unwrap_or(configured).parse()
    }
}
