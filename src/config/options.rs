//! Sparse, caller-supplied options.

/// Every setting the mock server understands, with nothing filled in.
///
/// Unset fields hold their type's zero value (`""`, `0`, `false`, empty `Vec`).
/// Resolution treats *any* zero value as "not supplied", so a field explicitly
/// set to its zero value is indistinguishable from one that was never set.
/// `session_timeout = 0`, for example, always resolves to the default timeout.
///
/// Options are consumed by [`Configuration::new`](super::Configuration::new);
/// the list fields are moved into the configuration, not copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // Mirrors the flat option surface
pub struct Options {
    /// Bind address for the listener
    pub host_address: String,
    /// Bind port; `0` lets the OS choose
    pub port_number: u16,
    /// Mirror server logs to stdout
    pub log_to_stdout: bool,
    /// Log every session event, not only errors
    pub log_server_activity: bool,
    /// Terminate the session on the first invalid command
    pub is_cmd_fail_fast: bool,
    /// Idle-session cutoff in seconds
    pub session_timeout: i64,

    /// Greeting sent on connect
    pub msg_greeting: String,
    /// Reply to an unknown command
    pub msg_invalid_cmd: String,
    /// Reply to QUIT
    pub msg_quit_cmd: String,

    /// HELO out of sequence
    pub msg_invalid_cmd_helo_sequence: String,
    /// HELO with an invalid argument
    pub msg_invalid_cmd_helo_arg: String,
    /// HELO domain is blacklisted
    pub msg_helo_blacklisted_domain: String,
    /// HELO accepted
    pub msg_helo_received: String,

    /// MAIL FROM out of sequence
    pub msg_invalid_cmd_mailfrom_sequence: String,
    /// MAIL FROM with an invalid argument
    pub msg_invalid_cmd_mailfrom_arg: String,
    /// MAIL FROM address is blacklisted
    pub msg_mailfrom_blacklisted_email: String,
    /// MAIL FROM accepted
    pub msg_mailfrom_received: String,

    /// RCPT TO out of sequence
    pub msg_invalid_cmd_rcptto_sequence: String,
    /// RCPT TO with an invalid argument
    pub msg_invalid_cmd_rcptto_arg: String,
    /// RCPT TO address is not registered
    pub msg_rcptto_not_registered_email: String,
    /// RCPT TO address is blacklisted
    pub msg_rcptto_blacklisted_email: String,
    /// RCPT TO accepted
    pub msg_rcptto_received: String,

    /// DATA out of sequence
    pub msg_invalid_cmd_data_sequence: String,
    /// DATA accepted, ready for the body
    pub msg_data_received: String,

    /// Maximum accepted message body size in bytes
    pub msg_size_limit: i64,
    /// Body exceeded `msg_size_limit`
    pub msg_msg_size_is_too_big: String,
    /// Body accepted
    pub msg_msg_received: String,

    /// Domains rejected at HELO
    pub blacklisted_helo_domains: Vec<String>,
    /// Senders rejected at MAIL FROM
    pub blacklisted_mailfrom_emails: Vec<String>,
    /// Recipients rejected at RCPT TO
    pub blacklisted_rcptto_emails: Vec<String>,
    /// Recipients reported as unknown at RCPT TO
    pub not_registered_emails: Vec<String>,
}
