//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Registry connection section
    #[serde(default)]
    pub registry: RegistrySection,

    /// What to collect
    #[serde(default)]
    pub collect: CollectSection,

    /// Where to write the lists
    #[serde(default)]
    pub output: OutputSection,
}

/// Registry connection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySection {
    /// Announced-prefixes endpoint
    pub url: Option<String>,

    /// Per-request timeout in seconds
    pub timeout: Option<u64>,

    /// `User-Agent` header value
    pub user_agent: Option<String>,
}

/// Collection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectSection {
    /// ASNs to query, in order
    pub asns: Option<Vec<String>>,

    /// Address family: "ipv4", "ipv6", or "both"
    pub family: Option<String>,

    /// Delay between registry requests in milliseconds
    pub interval_ms: Option<u64>,
}

/// Output section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// IPv4 list path
    pub ipv4: Option<String>,

    /// IPv6 list path
    pub ipv6: Option<String>,
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

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# vpn-prefixes configuration file

[registry]
# Announced-prefixes endpoint, queried as <url>?resource=<ASN>
# url = "https://stat.ripe.net/data/announced-prefixes/data.json"

# Per-request timeout in seconds (default: 30)
# timeout = 30

# User-Agent header sent with every request
# user_agent = "vpn-prefixes"

[collect]
# Address family to collect (default: both)
# Accepted values: "ipv4"/"v4"/"4", "ipv6"/"v6"/"6", or "both"/"all"/"dual"
# family = "both"

# Delay between registry requests in milliseconds (default: 1500)
# interval_ms = 1500

# ASNs to query, in order (required)
# Note: --asn on the command line REPLACES this list entirely
asns = [
    "AS9009",    # M247 (NordVPN)
    "AS20448",   # VPNtranet
    "AS209854",  # Surfshark
    "AS136787",  # NordVPN (TEFINCOM)
    "AS32751",   # Octovpn
    "AS212238",  # Datacamp VPN
    "AS50525",   # Privado VPN
    "AS8100",    # QuadraBet
    "AS11878",   # Tzulo
    "AS13213",   # UK2.net
    "AS46475",   # Limestone Networks
    "AS46562",   # Performive
    "AS60068",   # CDN77
    "AS199218",  # ProtonVPN
    "AS203020",  # HostRoyale
    "AS204957",  # GREEN FLOID LLC
    "AS212238",  # Datacamp Limited
    "AS216419",  # Matrix Telecom Solutions
    "AS210743",  # BABBAR-AS
    "AS200651",  # FlokiNET
    "AS394711",  # Limenet
]

[output]
# IPv4 list (default: output/vpn-ipv4.txt)
# ipv4 = "output/vpn-ipv4.txt"

# IPv6 list (default: output/vpn-ipv6.txt)
# ipv6 = "output/vpn-ipv6.txt"
"#
    .to_string()
}
