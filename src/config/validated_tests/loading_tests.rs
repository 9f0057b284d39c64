//! Tests for configuration loading and required fields.

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, tempdir};

use crate::prefix::FamilySelection;

use super::*;

mod required_fields {
    use super::*;

    #[test]
    fn missing_asns_returns_error() {
        let cli = cli(&["--family", "ipv4"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: "asns", .. })
        ));
    }

    #[test]
    fn toml_without_collect_section_is_missing_asns() {
        let cli = cli(&[]);
        let toml = toml(
            r#"
            [registry]
            timeout = 10
        "#,
        );

        let result = ValidatedConfig::from_raw(&cli, Some(&toml));

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: "asns", .. })
        ));
    }

    #[test]
    fn asns_from_cli_are_enough() {
        let cli = cli(&["--asn", "AS9009"]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.asns.len(), 1);
        assert_eq!(config.asns[0].as_str(), "AS9009");
        assert_eq!(config.family, FamilySelection::Both);
    }

    #[test]
    fn asns_from_toml() {
        let cli = cli(&[]);
        let toml = toml(
            r#"
            [collect]
            asns = ["AS9009", "AS209854"]
            family = "ipv6"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.asns.len(), 2);
        assert_eq!(config.family, FamilySelection::V6);
    }

    #[test]
    fn empty_toml_list_is_accepted() {
        let cli = cli(&[]);
        let toml = toml(
            r"
            [collect]
            asns = []
        ",
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert!(config.asns.is_empty());
    }
}

mod config_load {
    use super::*;

    #[test]
    fn load_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [collect]
            asns = ["AS9009"]
            family = "ipv4"
        "#
        )
        .unwrap();

        let cli = cli(&["--config", file.path().to_str().unwrap()]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.asns[0].as_str(), "AS9009");
        assert_eq!(config.family, FamilySelection::V4);
    }

    #[test]
    fn load_without_config_file_uses_cli_only() {
        let cli = cli(&["--asn", "AS60068", "--family", "ipv6"]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.asns[0].as_str(), "AS60068");
        assert_eq!(config.family, FamilySelection::V6);
    }

    #[test]
    fn missing_config_file_returns_file_read_error() {
        let cli = cli(&["--config", "/nonexistent/vpn-prefixes.toml"]);
        let result = ValidatedConfig::load(&cli);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn invalid_toml_returns_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[collect\nasns = ").unwrap();

        let cli = cli(&["--config", file.path().to_str().unwrap()]);
        let result = ValidatedConfig::load(&cli);

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_section_returns_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[proxy]\nurl = \"http://127.0.0.1:3128\"").unwrap();

        let cli = cli(&["--config", file.path().to_str().unwrap()]);
        let result = ValidatedConfig::load(&cli);

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod write_default_config {
    use super::*;
    use crate::config::write_default_config;

    #[test]
    fn writes_template_that_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vpn-prefixes.toml");

        write_default_config(&path).unwrap();

        let cli = cli(&["--config", path.to_str().unwrap()]);
        let config = ValidatedConfig::load(&cli).unwrap();
        assert_eq!(config.asns.len(), 21);
        assert_eq!(config.asns[0].as_str(), "AS9009");
        assert_eq!(config.family, FamilySelection::Both);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vpn-prefixes.toml");
        fs::write(&path, "stale").unwrap();

        write_default_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[collect]"));
    }

    #[test]
    fn missing_directory_returns_file_write_error() {
        let result = write_default_config(Path::new("/nonexistent/dir/vpn-prefixes.toml"));

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
