//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the resolver
//! and the protocol handlers that compare against them in tests.

use std::time::Duration;

/// Default bind address for the mock server.
pub const HOST_ADDRESS: &str = "0.0.0.0";

/// Default idle-session cutoff in seconds.
pub const SESSION_TIMEOUT_SECS: i64 = 30;

/// Default maximum accepted message body size in bytes (10 MiB).
pub const MESSAGE_SIZE_LIMIT: i64 = 10_485_760;

/// Greeting sent when a client connects.
pub const GREETING_MSG: &str = "220 Welcome";

/// Reply to an unknown command.
pub const INVALID_CMD_MSG: &str =
    "502 Command unrecognized. Available commands: HELO, EHLO, MAIL FROM:, RCPT TO:, DATA, QUIT";

/// Reply to QUIT, also used for blacklist rejections.
pub const QUIT_MSG: &str = "221 Closing connection";

/// Generic acceptance reply.
pub const RECEIVED_MSG: &str = "250 Received";

/// Reply to DATA once the server is ready to read the body.
pub const READY_FOR_RECEIVE_MSG: &str =
    "354 Ready for receive message. End data with <CR><LF>.<CR><LF>";

/// HELO received out of order.
pub const INVALID_CMD_HELO_SEQUENCE_MSG: &str = "503 Bad sequence of commands";

/// HELO without a usable domain.
pub const INVALID_CMD_HELO_ARG_MSG: &str = "501 HELO requires domain address";

/// MAIL FROM received out of order.
pub const INVALID_CMD_MAILFROM_SEQUENCE_MSG: &str = "503 Bad sequence of commands";

/// MAIL FROM without a usable address.
pub const INVALID_CMD_MAILFROM_ARG_MSG: &str = "501 MAIL FROM requires valid email address";

/// RCPT TO received out of order.
pub const INVALID_CMD_RCPTTO_SEQUENCE_MSG: &str = "503 Bad sequence of commands";

/// RCPT TO without a usable address.
pub const INVALID_CMD_RCPTTO_ARG_MSG: &str = "501 RCPT TO requires valid email address";

/// RCPT TO naming an address from the not-registered list.
pub const NOT_REGISTERED_RCPTTO_EMAIL_MSG: &str = "550 User not found";

/// DATA received out of order.
pub const INVALID_CMD_DATA_SEQUENCE_MSG: &str = "503 Bad sequence of commands";

/// Prefix of the size-limit rejection; the limit and unit are appended.
pub const MSG_SIZE_IS_TOO_BIG_MSG: &str = "552 Message exceeded max size of";

/// Default session timeout as Duration.
#[must_use]
pub const fn session_timeout() -> Duration {
    Duration::from_secs(SESSION_TIMEOUT_SECS.unsigned_abs())
}

/// Builds the size-limit rejection text for `limit` bytes.
///
/// ```
/// use smtp_mock_config::config::defaults;
///
/// assert_eq!(
///     defaults::msg_size_is_too_big(42),
///     "552 Message exceeded max size of 42 bytes"
/// );
/// ```
#[must_use]
pub fn msg_size_is_too_big(limit: i64) -> String {
    format!("{MSG_SIZE_IS_TOO_BIG_MSG} {limit} bytes")
}
