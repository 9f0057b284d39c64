//! Tests for CLI vs TOML precedence rules.

use std::path::Path;
use std::time::Duration;

use crate::prefix::{AddressFamily, FamilySelection};

use super::*;

const FULL_TOML: &str = r#"
    [registry]
    url = "https://toml.example.com/announced"
    timeout = 10
    user_agent = "toml-agent"

    [collect]
    asns = ["AS1", "AS2"]
    family = "ipv6"
    interval_ms = 250

    [output]
    ipv4 = "toml/v4.txt"
    ipv6 = "toml/v6.txt"
"#;

mod cli_precedence {
    use super::*;

    #[test]
    fn cli_asns_replace_toml_list() {
        let cli = cli(&["--asn", "AS9009"]);
        let toml = toml(FULL_TOML);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        let tokens: Vec<&str> = config.asns.iter().map(|a| a.as_str()).collect();
        assert_eq!(tokens, vec!["AS9009"]);
    }

    #[test]
    fn cli_family_overrides_toml() {
        let cli = cli(&["--family", "ipv4"]);
        let toml = toml(FULL_TOML);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.family, FamilySelection::V4);
    }

    #[test]
    fn cli_registry_url_overrides_toml() {
        let cli = cli(&["--registry-url", "http://127.0.0.1:8080/data.json"]);
        let toml = toml(FULL_TOML);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.registry_url.as_str(), "http://127.0.0.1:8080/data.json");
    }

    #[test]
    fn cli_timeout_and_interval_override_toml() {
        let cli = cli(&["--timeout", "5", "--interval-ms", "0"]);
        let toml = toml(FULL_TOML);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.interval, Duration::ZERO);
    }

    #[test]
    fn cli_outputs_override_toml() {
        let cli = cli(&["--ipv4-output", "cli/v4.txt"]);
        let toml = toml(FULL_TOML);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.ipv4_output, Path::new("cli/v4.txt"));
        assert_eq!(config.ipv6_output, Path::new("toml/v6.txt"));
    }
}

mod toml_precedence {
    use super::*;

    #[test]
    fn toml_values_override_defaults() {
        let cli = cli(&[]);
        let toml = toml(FULL_TOML);

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(
            config.registry_url.as_str(),
            "https://toml.example.com/announced"
        );
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(config.user_agent, "toml-agent");
        assert_eq!(config.family, FamilySelection::V6);
        assert_eq!(config.output_for(AddressFamily::V4), Path::new("toml/v4.txt"));
    }
}

mod defaults {
    use super::*;
    use crate::config::defaults;

    #[test]
    fn unset_values_use_defaults() {
        let cli = cli(&["--asn", "AS9009"]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.registry_url.as_str(), defaults::REGISTRY_URL);
        assert_eq!(config.timeout, defaults::timeout());
        assert_eq!(config.interval, defaults::interval());
        assert_eq!(config.user_agent, defaults::USER_AGENT);
        assert_eq!(config.ipv4_output, Path::new("output/vpn-ipv4.txt"));
        assert_eq!(config.ipv6_output, Path::new("output/vpn-ipv6.txt"));
    }
}
