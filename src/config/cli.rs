//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// Webhook Notifier: fire one custom HTTP webhook for a job event
///
/// Sends a single GET, POST, PUT, or DELETE request with the configured
/// content type and body, and exits non-zero if it did not succeed.
#[derive(Debug, Parser)]
#[command(name = "webhook-notifier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Webhook URL
    #[arg(long)]
    pub url: Option<String>,

    /// HTTP method: GET, POST, PUT, or DELETE
    #[arg(long)]
    pub method: Option<String>,

    /// Value for the Accept and Content-Type headers
    #[arg(long = "content-type")]
    pub content_type: Option<String>,

    /// Message body (sent for POST and PUT only)
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the message body from a file
    #[arg(long = "body-file", value_name = "PATH")]
    pub body_file: Option<PathBuf>,

    /// Trigger name recorded with the notification
    #[arg(long)]
    pub trigger: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for webhook-notifier
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning parse errors.
    ///
    /// # Errors
    ///
    /// Returns a clap error for unknown flags or conflicting options.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }
}
