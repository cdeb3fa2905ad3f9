//! SMTP mock configuration.
//!
//! Turns sparse, caller-supplied options for an SMTP mock server into a
//! fully populated, immutable configuration that protocol handlers can read
//! without checking for missing values.

pub mod config;
