//! Immutable, fully resolved configuration.
//!
//! This is the only configuration type protocol handlers see. All fields are
//! private and exposed through accessors, so a built [`Configuration`] can be
//! shared across sessions without locking.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use super::options::Options;
use super::resolve::resolve;

/// A configuration shared read-only by every session handler.
pub type SharedConfiguration = Arc<Configuration>;

/// Fully populated mock server configuration.
///
/// Every message text and the host address are non-empty, the size limit and
/// session timeout are non-zero, and every list is present (possibly empty).
///
/// # Construction
///
/// Use [`Configuration::new`]. It always resolves defaults first, so there is
/// no way to build a configuration from unresolved options.
///
/// ```
/// use smtp_mock_config::config::{Configuration, Options, defaults};
///
/// let config = Configuration::new(Options {
///     port_number: 2525,
///     ..Options::default()
/// });
///
/// assert_eq!(config.port_number(), 2525);
/// assert_eq!(config.msg_greeting(), defaults::GREETING_MSG);
/// assert!(config.blacklisted_helo_domains().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)] // Mirrors the flat option surface
pub struct Configuration {
    host_address: String,
    port_number: u16,
    log_to_stdout: bool,
    log_server_activity: bool,
    is_cmd_fail_fast: bool,
    session_timeout: i64,

    msg_greeting: String,
    msg_invalid_cmd: String,
    msg_quit_cmd: String,

    msg_invalid_cmd_helo_sequence: String,
    msg_invalid_cmd_helo_arg: String,
    msg_helo_blacklisted_domain: String,
    msg_helo_received: String,

    msg_invalid_cmd_mailfrom_sequence: String,
    msg_invalid_cmd_mailfrom_arg: String,
    msg_mailfrom_blacklisted_email: String,
    msg_mailfrom_received: String,

    msg_invalid_cmd_rcptto_sequence: String,
    msg_invalid_cmd_rcptto_arg: String,
    msg_rcptto_not_registered_email: String,
    msg_rcptto_blacklisted_email: String,
    msg_rcptto_received: String,

    msg_invalid_cmd_data_sequence: String,
    msg_data_received: String,

    msg_size_limit: i64,
    msg_msg_size_is_too_big: String,
    msg_msg_received: String,

    blacklisted_helo_domains: Vec<String>,
    blacklisted_mailfrom_emails: Vec<String>,
    blacklisted_rcptto_emails: Vec<String>,
    not_registered_emails: Vec<String>,
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ host: {}, port: {}, session_timeout: {}s, msg_size_limit: {}B, \
             fail_fast: {}, log_to_stdout: {}, log_server_activity: {}, \
             blacklists: helo={}/mailfrom={}/rcptto={}, not_registered: {} }}",
            self.host_address,
            self.port_number,
            self.session_timeout,
            self.msg_size_limit,
            self.is_cmd_fail_fast,
            self.log_to_stdout,
            self.log_server_activity,
            self.blacklisted_helo_domains.len(),
            self.blacklisted_mailfrom_emails.len(),
            self.blacklisted_rcptto_emails.len(),
            self.not_registered_emails.len(),
        )
    }
}

impl From<Options> for Configuration {
    fn from(options: Options) -> Self {
        Self::new(options)
    }
}

impl Configuration {
    /// Resolves defaults for `options` and freezes the result.
    ///
    /// Never fails: explicit values are taken as-is, without validation.
    /// The list fields are moved out of `options`, not cloned.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let config = build(resolve(options));
        tracing::debug!("Built configuration: {config}");
        config
    }

    /// Wraps the configuration for sharing across session tasks.
    #[must_use]
    pub fn into_shared(self) -> SharedConfiguration {
        Arc::new(self)
    }

    /// Bind address for the listener.
    #[must_use]
    pub fn host_address(&self) -> &str {
        &self.host_address
    }

    /// Bind port; `0` lets the OS choose.
    #[must_use]
    pub const fn port_number(&self) -> u16 {
        self.port_number
    }

    /// Whether server logs are mirrored to stdout.
    #[must_use]
    pub const fn log_to_stdout(&self) -> bool {
        self.log_to_stdout
    }

    /// Whether every session event is logged.
    #[must_use]
    pub const fn log_server_activity(&self) -> bool {
        self.log_server_activity
    }

    /// Whether a session ends on its first invalid command.
    #[must_use]
    pub const fn is_cmd_fail_fast(&self) -> bool {
        self.is_cmd_fail_fast
    }

    /// Idle-session cutoff in seconds, as supplied or defaulted.
    #[must_use]
    pub const fn session_timeout(&self) -> i64 {
        self.session_timeout
    }

    /// Session timeout as a [`Duration`].
    ///
    /// `None` when an explicit non-positive timeout was supplied; the session
    /// loop decides what that means.
    #[must_use]
    pub fn session_timeout_duration(&self) -> Option<Duration> {
        u64::try_from(self.session_timeout)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Greeting sent on connect.
    #[must_use]
    pub fn msg_greeting(&self) -> &str {
        &self.msg_greeting
    }

    /// Reply to an unknown command.
    #[must_use]
    pub fn msg_invalid_cmd(&self) -> &str {
        &self.msg_invalid_cmd
    }

    /// Reply to QUIT.
    #[must_use]
    pub fn msg_quit_cmd(&self) -> &str {
        &self.msg_quit_cmd
    }

    /// HELO out of sequence.
    #[must_use]
    pub fn msg_invalid_cmd_helo_sequence(&self) -> &str {
        &self.msg_invalid_cmd_helo_sequence
    }

    /// HELO with an invalid argument.
    #[must_use]
    pub fn msg_invalid_cmd_helo_arg(&self) -> &str {
        &self.msg_invalid_cmd_helo_arg
    }

    /// HELO domain is blacklisted.
    #[must_use]
    pub fn msg_helo_blacklisted_domain(&self) -> &str {
        &self.msg_helo_blacklisted_domain
    }

    /// HELO accepted.
    #[must_use]
    pub fn msg_helo_received(&self) -> &str {
        &self.msg_helo_received
    }

    /// MAIL FROM out of sequence.
    #[must_use]
    pub fn msg_invalid_cmd_mailfrom_sequence(&self) -> &str {
        &self.msg_invalid_cmd_mailfrom_sequence
    }

    /// MAIL FROM with an invalid argument.
    #[must_use]
    pub fn msg_invalid_cmd_mailfrom_arg(&self) -> &str {
        &self.msg_invalid_cmd_mailfrom_arg
    }

    /// MAIL FROM address is blacklisted.
    #[must_use]
    pub fn msg_mailfrom_blacklisted_email(&self) -> &str {
        &self.msg_mailfrom_blacklisted_email
    }

    /// MAIL FROM accepted.
    #[must_use]
    pub fn msg_mailfrom_received(&self) -> &str {
        &self.msg_mailfrom_received
    }

    /// RCPT TO out of sequence.
    #[must_use]
    pub fn msg_invalid_cmd_rcptto_sequence(&self) -> &str {
        &self.msg_invalid_cmd_rcptto_sequence
    }

    /// RCPT TO with an invalid argument.
    #[must_use]
    pub fn msg_invalid_cmd_rcptto_arg(&self) -> &str {
        &self.msg_invalid_cmd_rcptto_arg
    }

    /// RCPT TO address is not registered.
    #[must_use]
    pub fn msg_rcptto_not_registered_email(&self) -> &str {
        &self.msg_rcptto_not_registered_email
    }

    /// RCPT TO address is blacklisted.
    #[must_use]
    pub fn msg_rcptto_blacklisted_email(&self) -> &str {
        &self.msg_rcptto_blacklisted_email
    }

    /// RCPT TO accepted.
    #[must_use]
    pub fn msg_rcptto_received(&self) -> &str {
        &self.msg_rcptto_received
    }

    /// DATA out of sequence.
    #[must_use]
    pub fn msg_invalid_cmd_data_sequence(&self) -> &str {
        &self.msg_invalid_cmd_data_sequence
    }

    /// DATA accepted, ready for the body.
    #[must_use]
    pub fn msg_data_received(&self) -> &str {
        &self.msg_data_received
    }

    /// Maximum accepted message body size in bytes.
    #[must_use]
    pub const fn msg_size_limit(&self) -> i64 {
        self.msg_size_limit
    }

    /// Body exceeded the size limit.
    #[must_use]
    pub fn msg_msg_size_is_too_big(&self) -> &str {
        &self.msg_msg_size_is_too_big
    }

    /// Body accepted.
    #[must_use]
    pub fn msg_msg_received(&self) -> &str {
        &self.msg_msg_received
    }

    /// Domains rejected at HELO, in the order supplied.
    #[must_use]
    pub fn blacklisted_helo_domains(&self) -> &[String] {
        &self.blacklisted_helo_domains
    }

    /// Senders rejected at MAIL FROM, in the order supplied.
    #[must_use]
    pub fn blacklisted_mailfrom_emails(&self) -> &[String] {
        &self.blacklisted_mailfrom_emails
    }

    /// Recipients rejected at RCPT TO, in the order supplied.
    #[must_use]
    pub fn blacklisted_rcptto_emails(&self) -> &[String] {
        &self.blacklisted_rcptto_emails
    }

    /// Recipients reported as unknown at RCPT TO, in the order supplied.
    #[must_use]
    pub fn not_registered_emails(&self) -> &[String] {
        &self.not_registered_emails
    }
}

/// Moves every field of already-resolved `options` into a configuration.
///
/// No defaulting happens here; callers go through [`resolve`] first.
pub(super) fn build(options: Options) -> Configuration {
    Configuration {
        host_address: options.host_address,
        port_number: options.port_number,
        log_to_stdout: options.log_to_stdout,
        log_server_activity: options.log_server_activity,
        is_cmd_fail_fast: options.is_cmd_fail_fast,
        session_timeout: options.session_timeout,
        msg_greeting: options.msg_greeting,
        msg_invalid_cmd: options.msg_invalid_cmd,
        msg_quit_cmd: options.msg_quit_cmd,
        msg_invalid_cmd_helo_sequence: options.msg_invalid_cmd_helo_sequence,
        msg_invalid_cmd_helo_arg: options.msg_invalid_cmd_helo_arg,
        msg_helo_blacklisted_domain: options.msg_helo_blacklisted_domain,
        msg_helo_received: options.msg_helo_received,
        msg_invalid_cmd_mailfrom_sequence: options.msg_invalid_cmd_mailfrom_sequence,
        msg_invalid_cmd_mailfrom_arg: options.msg_invalid_cmd_mailfrom_arg,
        msg_mailfrom_blacklisted_email: options.msg_mailfrom_blacklisted_email,
        msg_mailfrom_received: options.msg_mailfrom_received,
        msg_invalid_cmd_rcptto_sequence: options.msg_invalid_cmd_rcptto_sequence,
        msg_invalid_cmd_rcptto_arg: options.msg_invalid_cmd_rcptto_arg,
        msg_rcptto_not_registered_email: options.msg_rcptto_not_registered_email,
        msg_rcptto_blacklisted_email: options.msg_rcptto_blacklisted_email,
        msg_rcptto_received: options.msg_rcptto_received,
        msg_invalid_cmd_data_sequence: options.msg_invalid_cmd_data_sequence,
        msg_data_received: options.msg_data_received,
        msg_size_limit: options.msg_size_limit,
        msg_msg_size_is_too_big: options.msg_msg_size_is_too_big,
        msg_msg_received: options.msg_msg_received,
        blacklisted_helo_domains: options.blacklisted_helo_domains,
        blacklisted_mailfrom_emails: options.blacklisted_mailfrom_emails,
        blacklisted_rcptto_emails: options.blacklisted_rcptto_emails,
        not_registered_emails: options.not_registered_emails,
    }
}
