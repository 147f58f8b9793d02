use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use super::{load_config, load_config_from};
use super::settings::Settings;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert!(settings.check.use_local_hostname);
    assert!(!settings.check.canonical_hostname);
    assert_eq!(settings.check.default_service_name, "UNDEFINED");
}

#[test]
#[serial]
fn test_load_config_without_sources_yields_defaults() {
    let settings = load_config().unwrap();
    assert!(settings.check.use_local_hostname);
    assert!(!settings.check.canonical_hostname);
    assert_eq!(settings.check.default_service_name, "UNDEFINED");
}

#[test]
#[serial]
fn test_env_overrides_default_service_name() {
    temp_env::with_var(
        "PASSIVECHECK_CHECK__DEFAULT_SERVICE_NAME",
        Some("heartbeat"),
        || {
            let settings = load_config().unwrap();
            assert_eq!(settings.check.default_service_name, "heartbeat");
            // Untouched keys keep their defaults
            assert!(settings.check.use_local_hostname);
        },
    );
}

#[test]
#[serial]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("settings.toml");
    fs::write(
        &file,
        r#"
[check]
use_local_hostname = false
canonical_hostname = true
default_service_name = "disk-check"
"#,
    )
    .unwrap();

    let basename = dir.path().join("settings");
    let settings = load_config_from(basename.to_str().unwrap()).unwrap();
    assert!(!settings.check.use_local_hostname);
    assert!(settings.check.canonical_hostname);
    assert_eq!(settings.check.default_service_name, "disk-check");
}
