// ABOUTME: Integration tests for YAML encoding and loading host configs from disk.
// ABOUTME: Covers extension-based format selection and hostconfig.* discovery.

use hostconfig::error::Error;
use hostconfig::{HostConfig, RestartPolicy};
use std::fs;

const YAML: &str = r#"
Binds:
  - /srv/app:/app
  - /srv/app:/app
Memory: 536870912
NetworkMode: bridge
RestartPolicy:
  Name: on-failure
  MaximumRetryCount: 2
"#;

mod yaml {
    use super::*;

    #[test]
    fn parses_capitalized_keys() {
        let config = HostConfig::from_yaml(YAML).unwrap();
        assert_eq!(config.binds().unwrap(), ["/srv/app:/app"]);
        assert_eq!(config.memory(), Some(536_870_912));
        assert_eq!(config.network_mode(), Some("bridge"));
        assert_eq!(config.restart_policy(), Some(&RestartPolicy::on_failure(2)));
    }

    #[test]
    fn yaml_and_json_agree() {
        let from_yaml = HostConfig::from_yaml(YAML).unwrap();
        let from_json = HostConfig::from_json(&from_yaml.to_json().unwrap()).unwrap();
        let again = HostConfig::from_yaml(&from_yaml.to_yaml().unwrap()).unwrap();
        assert_eq!(from_yaml, from_json);
        assert_eq!(from_yaml, again);
    }

    #[test]
    fn wrong_type_is_a_yaml_error() {
        let err = HostConfig::from_yaml("Memory: lots").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_picks_format_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("a.json");
        let yaml_path = dir.path().join("b.yaml");
        fs::write(&json_path, r#"{"CpuShares": 256}"#).unwrap();
        fs::write(&yaml_path, "CpuShares: 256\n").unwrap();

        let a = HostConfig::load(&json_path).unwrap();
        let b = HostConfig::load(&yaml_path).unwrap();
        assert_eq!(a.cpu_shares(), Some(256));
        assert_eq!(a, b);
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hostconfig.toml");
        fs::write(&path, "").unwrap();
        assert!(matches!(
            HostConfig::load(&path),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = HostConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn discover_prefers_yml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hostconfig.yml"), "IpcMode: host\n").unwrap();
        fs::write(dir.path().join("hostconfig.json"), r#"{"IpcMode": "private"}"#).unwrap();

        let config = HostConfig::discover(dir.path()).unwrap();
        assert_eq!(config.ipc_mode(), Some("host"));
    }

    #[test]
    fn discover_falls_back_to_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hostconfig.json"), r#"{"IpcMode": "private"}"#).unwrap();

        let config = HostConfig::discover(dir.path()).unwrap();
        assert_eq!(config.ipc_mode(), Some("private"));
    }

    #[test]
    fn discover_without_file_reports_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = HostConfig::discover(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(ref p) if p == dir.path()));
        assert!(err.to_string().contains("not found"));
    }
}
