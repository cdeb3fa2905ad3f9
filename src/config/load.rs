//! Merging CLI and TOML sources into [`Options`].
//!
//! Sources only decide *which* explicit values are present. Anything neither
//! source sets is left at its zero value for [`resolve`](super::resolve) to
//! fill, so the defaults live in exactly one place.

use super::cli::Cli;
use super::configuration::Configuration;
use super::error::ConfigError;
use super::options::Options;
use super::toml::TomlConfig;

/// Loads the options file named by `cli.config` (if any), merges it with the
/// CLI overrides, and builds the configuration.
///
/// # Errors
///
/// Returns an error if the options file cannot be read or parsed.
pub fn load(cli: &Cli) -> Result<Configuration, ConfigError> {
    let toml = if let Some(ref path) = cli.config {
        tracing::debug!("Loading options from {}", path.display());
        Some(TomlConfig::load(path)?)
    } else {
        None
    };

    Ok(Configuration::new(options_from_sources(cli, toml.as_ref())))
}

/// Merges CLI arguments over an optional TOML config.
///
/// Priority: CLI explicit > TOML > unset. Boolean flags are OR-ed (flags only
/// enable). A CLI list replaces the TOML list entirely.
#[must_use]
pub fn options_from_sources(cli: &Cli, toml: Option<&TomlConfig>) -> Options {
    let mut options = toml.map_or_else(Options::default, toml_options);

    if let Some(ref host) = cli.host {
        options.host_address.clone_from(host);
    }
    if let Some(port) = cli.port {
        options.port_number = port;
    }
    if let Some(timeout) = cli.session_timeout {
        options.session_timeout = timeout;
    }
    if let Some(limit) = cli.msg_size_limit {
        options.msg_size_limit = limit;
    }

    options.log_to_stdout |= cli.log_to_stdout;
    options.log_server_activity |= cli.log_server_activity;
    options.is_cmd_fail_fast |= cli.fail_fast;

    replace_if_given(
        &mut options.blacklisted_helo_domains,
        &cli.blacklisted_helo_domains,
    );
    replace_if_given(
        &mut options.blacklisted_mailfrom_emails,
        &cli.blacklisted_mailfrom_emails,
    );
    replace_if_given(
        &mut options.blacklisted_rcptto_emails,
        &cli.blacklisted_rcptto_emails,
    );
    replace_if_given(&mut options.not_registered_emails, &cli.not_registered_emails);

    options
}

/// Flattens the sectioned file into options, `None` becoming the zero value.
fn toml_options(toml: &TomlConfig) -> Options {
    let TomlConfig {
        server,
        helo,
        mailfrom,
        rcptto,
        data,
        message,
    } = toml;

    Options {
        host_address: text(server.host_address.as_deref()),
        port_number: server.port_number.unwrap_or_default(),
        log_to_stdout: server.log_to_stdout,
        log_server_activity: server.log_server_activity,
        is_cmd_fail_fast: server.is_cmd_fail_fast,
        session_timeout: server.session_timeout.unwrap_or_default(),
        msg_greeting: text(server.msg_greeting.as_deref()),
        msg_invalid_cmd: text(server.msg_invalid_cmd.as_deref()),
        msg_quit_cmd: text(server.msg_quit_cmd.as_deref()),

        msg_invalid_cmd_helo_sequence: text(helo.msg_invalid_cmd_sequence.as_deref()),
        msg_invalid_cmd_helo_arg: text(helo.msg_invalid_cmd_arg.as_deref()),
        msg_helo_blacklisted_domain: text(helo.msg_blacklisted_domain.as_deref()),
        msg_helo_received: text(helo.msg_received.as_deref()),

        msg_invalid_cmd_mailfrom_sequence: text(mailfrom.msg_invalid_cmd_sequence.as_deref()),
        msg_invalid_cmd_mailfrom_arg: text(mailfrom.msg_invalid_cmd_arg.as_deref()),
        msg_mailfrom_blacklisted_email: text(mailfrom.msg_blacklisted_email.as_deref()),
        msg_mailfrom_received: text(mailfrom.msg_received.as_deref()),

        msg_invalid_cmd_rcptto_sequence: text(rcptto.msg_invalid_cmd_sequence.as_deref()),
        msg_invalid_cmd_rcptto_arg: text(rcptto.msg_invalid_cmd_arg.as_deref()),
        msg_rcptto_not_registered_email: text(rcptto.msg_not_registered_email.as_deref()),
        msg_rcptto_blacklisted_email: text(rcptto.msg_blacklisted_email.as_deref()),
        msg_rcptto_received: text(rcptto.msg_received.as_deref()),

        msg_invalid_cmd_data_sequence: text(data.msg_invalid_cmd_sequence.as_deref()),
        msg_data_received: text(data.msg_received.as_deref()),

        msg_size_limit: message.size_limit.unwrap_or_default(),
        msg_msg_size_is_too_big: text(message.msg_size_is_too_big.as_deref()),
        msg_msg_received: text(message.msg_received.as_deref()),

        blacklisted_helo_domains: list(helo.blacklisted_domains.as_deref()),
        blacklisted_mailfrom_emails: list(mailfrom.blacklisted_emails.as_deref()),
        blacklisted_rcptto_emails: list(rcptto.blacklisted_emails.as_deref()),
        not_registered_emails: list(rcptto.not_registered_emails.as_deref()),
    }
}

fn text(value: Option<&str>) -> String {
    value.map(str::to_owned).unwrap_or_default()
}

fn list(value: Option<&[String]>) -> Vec<String> {
    value.map(<[String]>::to_vec).unwrap_or_default()
}

fn replace_if_given(target: &mut Vec<String>, cli: &[String]) {
    if !cli.is_empty() {
        *target = cli.to_vec();
    }
}
