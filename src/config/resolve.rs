//! Default resolution.
//!
//! One filler per protocol phase. Each filler touches only the fields that
//! phase owns and never reads another phase's fields, so the fillers can run
//! in any order. [`resolve`] runs them in protocol order for readable logs.
//!
//! The list fields have no filler: an empty `Vec` is already the empty
//! sequence consumers expect.

use super::defaults;
use super::options::Options;

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;

/// Fills every unset field of `options` with its default.
///
/// Explicit (non-zero) values are left untouched and are not validated.
/// Resolving an already-resolved record returns it unchanged.
///
/// ```
/// use smtp_mock_config::config::{Options, defaults, resolve};
///
/// let options = resolve(Options {
///     msg_size_limit: 1024,
///     ..Options::default()
/// });
///
/// assert_eq!(options.msg_greeting, defaults::GREETING_MSG);
/// assert_eq!(
///     options.msg_msg_size_is_too_big,
///     "552 Message exceeded max size of 1024 bytes"
/// );
/// ```
#[must_use]
pub fn resolve(mut options: Options) -> Options {
    let phases: [(&str, fn(&mut Options) -> usize); 6] = [
        ("server", fill_server_defaults),
        ("helo", fill_helo_defaults),
        ("mailfrom", fill_mailfrom_defaults),
        ("rcptto", fill_rcptto_defaults),
        ("data", fill_data_defaults),
        ("message", fill_message_defaults),
    ];

    for (phase, fill) in phases {
        let applied = fill(&mut options);
        tracing::debug!(phase, applied, "Resolved phase defaults");
    }

    options
}

/// Server and session: bind address, server-level replies, timeout.
fn fill_server_defaults(options: &mut Options) -> usize {
    [
        fill_text(&mut options.host_address, defaults::HOST_ADDRESS),
        fill_text(&mut options.msg_greeting, defaults::GREETING_MSG),
        fill_text(&mut options.msg_invalid_cmd, defaults::INVALID_CMD_MSG),
        fill_text(&mut options.msg_quit_cmd, defaults::QUIT_MSG),
        fill_number(&mut options.session_timeout, defaults::SESSION_TIMEOUT_SECS),
    ]
    .into_iter()
    .filter(|applied| *applied)
    .count()
}

fn fill_helo_defaults(options: &mut Options) -> usize {
    [
        fill_text(
            &mut options.msg_invalid_cmd_helo_sequence,
            defaults::INVALID_CMD_HELO_SEQUENCE_MSG,
        ),
        fill_text(
            &mut options.msg_invalid_cmd_helo_arg,
            defaults::INVALID_CMD_HELO_ARG_MSG,
        ),
        // A blacklisted domain ends the session
        fill_text(&mut options.msg_helo_blacklisted_domain, defaults::QUIT_MSG),
        fill_text(&mut options.msg_helo_received, defaults::RECEIVED_MSG),
    ]
    .into_iter()
    .filter(|applied| *applied)
    .count()
}

fn fill_mailfrom_defaults(options: &mut Options) -> usize {
    [
        fill_text(
            &mut options.msg_invalid_cmd_mailfrom_sequence,
            defaults::INVALID_CMD_MAILFROM_SEQUENCE_MSG,
        ),
        fill_text(
            &mut options.msg_invalid_cmd_mailfrom_arg,
            defaults::INVALID_CMD_MAILFROM_ARG_MSG,
        ),
        fill_text(&mut options.msg_mailfrom_blacklisted_email, defaults::QUIT_MSG),
        fill_text(&mut options.msg_mailfrom_received, defaults::RECEIVED_MSG),
    ]
    .into_iter()
    .filter(|applied| *applied)
    .count()
}

fn fill_rcptto_defaults(options: &mut Options) -> usize {
    [
        fill_text(
            &mut options.msg_invalid_cmd_rcptto_sequence,
            defaults::INVALID_CMD_RCPTTO_SEQUENCE_MSG,
        ),
        fill_text(
            &mut options.msg_invalid_cmd_rcptto_arg,
            defaults::INVALID_CMD_RCPTTO_ARG_MSG,
        ),
        fill_text(&mut options.msg_rcptto_blacklisted_email, defaults::QUIT_MSG),
        fill_text(
            &mut options.msg_rcptto_not_registered_email,
            defaults::NOT_REGISTERED_RCPTTO_EMAIL_MSG,
        ),
        fill_text(&mut options.msg_rcptto_received, defaults::RECEIVED_MSG),
    ]
    .into_iter()
    .filter(|applied| *applied)
    .count()
}

fn fill_data_defaults(options: &mut Options) -> usize {
    [
        fill_text(
            &mut options.msg_invalid_cmd_data_sequence,
            defaults::INVALID_CMD_DATA_SEQUENCE_MSG,
        ),
        fill_text(&mut options.msg_data_received, defaults::READY_FOR_RECEIVE_MSG),
    ]
    .into_iter()
    .filter(|applied| *applied)
    .count()
}

/// Message body: size limit and the replies that depend on it.
fn fill_message_defaults(options: &mut Options) -> usize {
    let mut applied = 0;

    // The size limit must be resolved first: the default too-big text embeds
    // whatever limit is in effect, explicit or default.
    if fill_number(&mut options.msg_size_limit, defaults::MESSAGE_SIZE_LIMIT) {
        applied += 1;
    }

    if options.msg_msg_size_is_too_big.is_empty() {
        options.msg_msg_size_is_too_big = defaults::msg_size_is_too_big(options.msg_size_limit);
        applied += 1;
    }

    if fill_text(&mut options.msg_msg_received, defaults::RECEIVED_MSG) {
        applied += 1;
    }

    applied
}

/// Assigns `default` to an empty string. Returns whether it did.
fn fill_text(field: &mut String, default: &str) -> bool {
    if field.is_empty() {
        default.clone_into(field);
        true
    } else {
        false
    }
}

/// Assigns `default` to a zero number. Returns whether it did.
fn fill_number(field: &mut i64, default: i64) -> bool {
    if *field == 0 {
        *field = default;
        true
    } else {
        false
    }
}
