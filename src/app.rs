//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, output rendering, and
//! error hints that support the main entry point.

use smtp_mock_config::config::{ConfigError, Configuration};
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable or malformed options file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Output error (exit code 2) - the resolved configuration could not be rendered.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn output_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Error rendering the resolved configuration.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization failed.
    #[error("Failed to render TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Renders the configuration as pretty JSON or TOML.
pub fn render(config: &Configuration, json: bool) -> Result<String, RenderError> {
    if json {
        Ok(serde_json::to_string_pretty(config)?)
    } else {
        Ok(toml::to_string_pretty(config)?)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } | ConfigError::TomlParse(_) => {
            eprintln!("\nRun 'smtp-mock-config template' to print an options file template.");
        }
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so rendered configuration on stdout stays parseable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
