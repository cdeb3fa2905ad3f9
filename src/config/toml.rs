//! TOML options file parsing.
//!
//! Sections follow the protocol phases. Every field is optional; anything
//! left out falls through to the CLI or to the built-in defaults.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root structure of an options file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Listener and session settings
    #[serde(default)]
    pub server: ServerSection,

    /// HELO replies and blacklist
    #[serde(default)]
    pub helo: HeloSection,

    /// MAIL FROM replies and blacklist
    #[serde(default)]
    pub mailfrom: MailfromSection,

    /// RCPT TO replies and address lists
    #[serde(default)]
    pub rcptto: RcpttoSection,

    /// DATA replies
    #[serde(default)]
    pub data: DataSection,

    /// Message body size limit and replies
    #[serde(default)]
    pub message: MessageSection,
}

/// Listener and session settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Bind address
    pub host_address: Option<String>,

    /// Bind port
    pub port_number: Option<u16>,

    /// Mirror logs to stdout
    #[serde(default)]
    pub log_to_stdout: bool,

    /// Log every session event
    #[serde(default)]
    pub log_server_activity: bool,

    /// End the session on the first invalid command
    #[serde(default)]
    pub is_cmd_fail_fast: bool,

    /// Idle-session cutoff in seconds
    pub session_timeout: Option<i64>,

    /// Greeting sent on connect
    pub msg_greeting: Option<String>,

    /// Reply to an unknown command
    pub msg_invalid_cmd: Option<String>,

    /// Reply to QUIT
    pub msg_quit_cmd: Option<String>,
}

/// HELO replies and blacklist.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeloSection {
    /// HELO out of sequence
    pub msg_invalid_cmd_sequence: Option<String>,

    /// HELO with an invalid argument
    pub msg_invalid_cmd_arg: Option<String>,

    /// HELO domain is blacklisted
    pub msg_blacklisted_domain: Option<String>,

    /// HELO accepted
    pub msg_received: Option<String>,

    /// Domains rejected at HELO
    pub blacklisted_domains: Option<Vec<String>>,
}

/// MAIL FROM replies and blacklist.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MailfromSection {
    /// MAIL FROM out of sequence
    pub msg_invalid_cmd_sequence: Option<String>,

    /// MAIL FROM with an invalid argument
    pub msg_invalid_cmd_arg: Option<String>,

    /// Sender is blacklisted
    pub msg_blacklisted_email: Option<String>,

    /// MAIL FROM accepted
    pub msg_received: Option<String>,

    /// Senders rejected at MAIL FROM
    pub blacklisted_emails: Option<Vec<String>>,
}

/// RCPT TO replies and address lists.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RcpttoSection {
    /// RCPT TO out of sequence
    pub msg_invalid_cmd_sequence: Option<String>,

    /// RCPT TO with an invalid argument
    pub msg_invalid_cmd_arg: Option<String>,

    /// Recipient is not registered
    pub msg_not_registered_email: Option<String>,

    /// Recipient is blacklisted
    pub msg_blacklisted_email: Option<String>,

    /// RCPT TO accepted
    pub msg_received: Option<String>,

    /// Recipients rejected at RCPT TO
    pub blacklisted_emails: Option<Vec<String>>,

    /// Recipients reported as unknown
    pub not_registered_emails: Option<Vec<String>>,
}

/// DATA replies.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSection {
    /// DATA out of sequence
    pub msg_invalid_cmd_sequence: Option<String>,

    /// DATA accepted
    pub msg_received: Option<String>,
}

/// Message body size limit and replies.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    /// Maximum body size in bytes
    #[serde(alias = "msq_size_limit")]
    pub size_limit: Option<i64>,

    /// Body exceeded the size limit
    pub msg_size_is_too_big: Option<String>,

    /// Body accepted
    pub msg_received: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a commented options file listing every setting.
#[must_use]
pub fn default_config_template() -> String {
    r#"# SMTP mock server options
# Every setting is optional. Unset values resolve to the defaults shown.
# A value equal to its type's zero ("", 0, false) counts as unset.

[server]
# host_address = "0.0.0.0"
# port_number = 2525          # 0 lets the OS choose a port
# log_to_stdout = false
# log_server_activity = false
# is_cmd_fail_fast = false
# session_timeout = 30        # seconds
# msg_greeting = "220 Welcome"
# msg_invalid_cmd = "502 Command unrecognized. Available commands: HELO, EHLO, MAIL FROM:, RCPT TO:, DATA, QUIT"
# msg_quit_cmd = "221 Closing connection"

[helo]
# msg_invalid_cmd_sequence = "503 Bad sequence of commands"
# msg_invalid_cmd_arg = "501 HELO requires domain address"
# msg_blacklisted_domain = "221 Closing connection"
# msg_received = "250 Received"
# blacklisted_domains = ["spam.test"]

[mailfrom]
# msg_invalid_cmd_sequence = "503 Bad sequence of commands"
# msg_invalid_cmd_arg = "501 MAIL FROM requires valid email address"
# msg_blacklisted_email = "221 Closing connection"
# msg_received = "250 Received"
# blacklisted_emails = ["spammer@spam.test"]

[rcptto]
# msg_invalid_cmd_sequence = "503 Bad sequence of commands"
# msg_invalid_cmd_arg = "501 RCPT TO requires valid email address"
# msg_not_registered_email = "550 User not found"
# msg_blacklisted_email = "221 Closing connection"
# msg_received = "250 Received"
# blacklisted_emails = ["blocked@example.test"]
# not_registered_emails = ["nobody@example.test"]

[data]
# msg_invalid_cmd_sequence = "503 Bad sequence of commands"
# msg_received = "354 Ready for receive message. End data with <CR><LF>.<CR><LF>"

[message]
# size_limit = 10485760       # bytes
# Defaults to "552 Message exceeded max size of <size_limit> bytes"
# msg_size_is_too_big = "552 Message exceeded max size of 10485760 bytes"
# msg_received = "250 Received"
"#
    .to_string()
}
