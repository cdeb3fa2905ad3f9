//! CLI argument parsing using clap.
//!
//! Defines overrides for the settings most often changed between test runs.
//! Reply texts are only configurable through the options file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SMTP mock configuration resolver
///
/// Resolves mock server options from the command line and an optional
/// TOML file, filling every unset value with its default.
#[derive(Debug, Parser)]
#[command(name = "smtp-mock-config")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run (default: show)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to options file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Bind address
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Bind port (0 lets the OS choose)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Idle-session cutoff in seconds
    #[arg(long = "session-timeout", global = true, allow_negative_numbers = true)]
    pub session_timeout: Option<i64>,

    /// Maximum message body size in bytes
    #[arg(long = "msg-size-limit", global = true, allow_negative_numbers = true)]
    pub msg_size_limit: Option<i64>,

    /// Mirror server logs to stdout
    #[arg(long = "log-to-stdout", global = true)]
    pub log_to_stdout: bool,

    /// Log every session event
    #[arg(long = "log-server-activity", global = true)]
    pub log_server_activity: bool,

    /// End sessions on the first invalid command
    #[arg(long = "fail-fast", global = true)]
    pub fail_fast: bool,

    /// Domain rejected at HELO (can be specified multiple times)
    #[arg(long = "blacklisted-helo-domain", value_name = "DOMAIN", global = true)]
    pub blacklisted_helo_domains: Vec<String>,

    /// Sender rejected at MAIL FROM (can be specified multiple times)
    #[arg(long = "blacklisted-mailfrom-email", value_name = "EMAIL", global = true)]
    pub blacklisted_mailfrom_emails: Vec<String>,

    /// Recipient rejected at RCPT TO (can be specified multiple times)
    #[arg(long = "blacklisted-rcptto-email", value_name = "EMAIL", global = true)]
    pub blacklisted_rcptto_emails: Vec<String>,

    /// Recipient reported as unknown (can be specified multiple times)
    #[arg(long = "not-registered-email", value_name = "EMAIL", global = true)]
    pub not_registered_emails: Vec<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for smtp-mock-config
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the resolved configuration
    Show {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Print a commented options file template
    Template,
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

    /// Returns the subcommand, defaulting to `show` without JSON.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Show { json: false })
    }
}
