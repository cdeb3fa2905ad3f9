//! SMTP mock configuration resolver
//!
//! Entry point for the smtp-mock-config application.

use smtp_mock_config::config::{Cli, Command, default_config_template, load};
use std::process::ExitCode;

mod app;

use app::{exit_code, print_config_hint, render, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let json = match cli.command() {
        Command::Template => {
            print!("{}", default_config_template());
            return exit_code::SUCCESS;
        }
        Command::Show { json } => json,
    };

    let config = match load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    tracing::info!("{config}");

    match render(&config, json) {
        Ok(output) => {
            println!("{output}");
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("Output error: {e}");
            exit_code::output_error()
        }
    }
}
