//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::prefix::FamilySelection;

/// vpn-prefixes: VPN ASN prefix collector
///
/// Queries the announced prefixes of VPN and hosting provider ASNs and
/// writes them as sorted, deduplicated IPv4/IPv6 lists.
#[derive(Debug, Parser)]
#[command(name = "vpn-prefixes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address family to collect
    #[arg(long, value_enum)]
    pub family: Option<FamilyArg>,

    /// ASN to query (can be specified multiple times; replaces the config list)
    #[arg(long = "asn", value_name = "ASN")]
    pub asns: Vec<String>,

    /// Output file for IPv4 prefixes
    #[arg(long = "ipv4-output", value_name = "PATH")]
    pub ipv4_output: Option<PathBuf>,

    /// Output file for IPv6 prefixes
    #[arg(long = "ipv6-output", value_name = "PATH")]
    pub ipv6_output: Option<PathBuf>,

    /// Delay between registry requests in milliseconds
    #[arg(long = "interval-ms", value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Registry endpoint for announced-prefix lookups
    #[arg(long = "registry-url", value_name = "URL")]
    pub registry_url: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Test mode - collect and log prefixes without writing output files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for vpn-prefixes
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "vpn-prefixes.toml")]
        output: PathBuf,
    },
}

/// Address family argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    /// Collect IPv4 prefixes only
    #[value(name = "ipv4")]
    V4,
    /// Collect IPv6 prefixes only
    #[value(name = "ipv6")]
    V6,
    /// Collect both, one pass per family
    #[value(name = "both")]
    Both,
}

impl From<FamilyArg> for FamilySelection {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::V4 => Self::V4,
            FamilyArg::V6 => Self::V6,
            FamilyArg::Both => Self::Both,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
