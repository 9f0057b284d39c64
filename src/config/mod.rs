//! Configuration layer for vpn-prefixes.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The ASN list is the only required value. It has no built-in default: the
//! provider list ships in the template written by `init`.
//!
//! For the ASN list, CLI values **replace** the TOML list entirely (not merged).
//! A single `--asn` is enough to query just that ASN.
//!
//! # CLI-Only vs TOML-Only Options
//!
//! `--dry-run` and `--verbose` are CLI-only. `registry.user_agent` is TOML-only.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, FamilyArg};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
