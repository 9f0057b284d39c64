//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::prefix::{AddressFamily, FamilySelection};
use crate::registry::Asn;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// This struct represents a complete, validated configuration where all
/// required fields are present and all values have been validated.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// ASNs to query, in configured order (required)
    pub asns: Vec<Asn>,

    /// Families to collect
    pub family: FamilySelection,

    /// Destination of the IPv4 list
    pub ipv4_output: PathBuf,

    /// Destination of the IPv6 list
    pub ipv6_output: PathBuf,

    /// Announced-prefixes endpoint
    pub registry_url: Url,

    /// Per-request timeout
    pub timeout: Duration,

    /// Delay after each registry request
    pub interval: Duration,

    /// `User-Agent` header value
    pub user_agent: String,

    /// Dry-run mode (collect without writing output files)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ family: {}, asns: {}, registry: {}, timeout: {}s, interval: {}ms, \
             ipv4_output: {}, ipv6_output: {}, dry_run: {} }}",
            self.family,
            self.asns.len(),
            self.registry_url,
            self.timeout.as_secs(),
            self.interval.as_millis(),
            self.ipv4_output.display(),
            self.ipv6_output.display(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ASN list is missing or contains a blank entry
    /// - The family is not recognized
    /// - The registry URL is invalid
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let asns = Self::resolve_asns(cli, toml)?;
        let family = Self::resolve_family(cli, toml)?;
        let registry_url = Self::resolve_registry_url(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;

        // Priority: CLI explicit > TOML > default; zero disables pacing
        let interval = cli
            .interval_ms
            .or_else(|| toml.and_then(|t| t.collect.interval_ms))
            .map_or(defaults::interval(), Duration::from_millis);

        let user_agent = toml
            .and_then(|t| t.registry.user_agent.clone())
            .unwrap_or_else(|| defaults::USER_AGENT.to_string());

        let ipv4_output = cli.ipv4_output.clone().unwrap_or_else(|| {
            toml.and_then(|t| t.output.ipv4.as_deref())
                .map_or_else(|| PathBuf::from(defaults::IPV4_OUTPUT), PathBuf::from)
        });

        let ipv6_output = cli.ipv6_output.clone().unwrap_or_else(|| {
            toml.and_then(|t| t.output.ipv6.as_deref())
                .map_or_else(|| PathBuf::from(defaults::IPV6_OUTPUT), PathBuf::from)
        });

        Ok(Self {
            asns,
            family,
            ipv4_output,
            ipv6_output,
            registry_url,
            timeout,
            interval,
            user_agent,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Returns the output path for a family.
    #[must_use]
    pub fn output_for(&self, family: AddressFamily) -> &Path {
        match family {
            AddressFamily::V4 => &self.ipv4_output,
            AddressFamily::V6 => &self.ipv6_output,
        }
    }

    /// Returns the runs to perform, in order, with their destinations.
    pub fn jobs(&self) -> impl Iterator<Item = (AddressFamily, &Path)> + '_ {
        self.family
            .families()
            .iter()
            .map(|&family| (family, self.output_for(family)))
    }

    fn resolve_asns(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Vec<Asn>, ConfigError> {
        // CLI list replaces the TOML list entirely
        let tokens: &[String] = if cli.asns.is_empty() {
            toml.and_then(|t| t.collect.asns.as_deref()).ok_or_else(|| {
                ConfigError::missing(
                    field::ASNS,
                    "Use --asn or set collect.asns in config file",
                )
            })?
        } else {
            &cli.asns
        };

        tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                Asn::new(token).ok_or_else(|| ConfigError::InvalidAsn {
                    index,
                    value: token.clone(),
                })
            })
            .collect()
    }

    fn resolve_family(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<FamilySelection, ConfigError> {
        // CLI takes precedence
        if let Some(family) = cli.family {
            return Ok(family.into());
        }

        // Fall back to TOML
        match toml.and_then(|t| t.collect.family.as_deref()) {
            Some(value) => parse_family(value),
            None => Ok(defaults::FAMILY),
        }
    }

    fn resolve_registry_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .registry_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.registry.url.as_deref()))
            .unwrap_or(defaults::REGISTRY_URL);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(url)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let timeout = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.registry.timeout))
            .map_or(defaults::timeout(), Duration::from_secs);

        if timeout.is_zero() {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(timeout)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_family(s: &str) -> Result<FamilySelection, ConfigError> {
    match s.to_lowercase().as_str() {
        "ipv4" | "v4" | "4" => Ok(FamilySelection::V4),
        "ipv6" | "v6" | "6" => Ok(FamilySelection::V6),
        "both" | "all" | "dual" => Ok(FamilySelection::Both),
        _ => Err(ConfigError::InvalidFamily {
            value: s.to_string(),
        }),
    }
}
