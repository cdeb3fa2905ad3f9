//! Configuration layer for the SMTP mock server.
//!
//! This module provides:
//! - Sparse caller options ([`Options`])
//! - Phase-scoped default resolution ([`resolve`])
//! - The immutable runtime configuration ([`Configuration`])
//! - Optional sources: TOML options files ([`TomlConfig`]) and CLI overrides ([`Cli`])
//! - Default values ([`defaults`])
//!
//! # Resolution
//!
//! Every field of [`Options`] whose value equals its type's zero value
//! (`""`, `0`, `false`, empty list) is treated as unset and replaced by a
//! default. Resolution runs one filler per protocol phase:
//!
//! 1. **server** - bind address, greeting, invalid-command and quit replies, session timeout
//! 2. **helo** - HELO sequence/argument/blacklist/accepted replies
//! 3. **mailfrom** - MAIL FROM sequence/argument/blacklist/accepted replies
//! 4. **rcptto** - RCPT TO sequence/argument/not-registered/blacklist/accepted replies
//! 5. **data** - DATA sequence and ready-for-body replies
//! 6. **message** - size limit, then the too-big reply computed from it, then accepted reply
//!
//! The port is never defaulted: `0` is passed through and lets the OS choose.
//! Lists are never defaulted: an unset list is already empty.
//! Nothing is validated; explicit values (negative limits, odd host strings)
//! pass through verbatim for the protocol handlers to deal with.
//!
//! # Source priority
//!
//! When loading through [`load`], values are taken with the following
//! priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML options file**
//! 3. **Built-in defaults**
//!
//! Boolean flags use OR semantics: once enabled in the file, the CLI cannot
//! turn them off. CLI lists **replace** file lists entirely (not merged).
//! Reply texts are file-only.

mod cli;
mod configuration;
pub mod defaults;
mod error;
mod load;
mod options;
mod resolve;
mod toml;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use configuration::{Configuration, SharedConfiguration};
pub use error::ConfigError;
pub use load::{load, options_from_sources};
pub use options::Options;
pub use resolve::resolve;
pub use toml::{TomlConfig, default_config_template};
