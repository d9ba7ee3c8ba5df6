// Standard library
use std::fs;
use std::time::Duration;

// 3rd party crates
use config::{Config, File, FileFormat};

// Project imports
use crate::provisioner::errors::ProvisionValidationError;

// Current module imports
use super::constants::DEFAULT_CONFIG;
use super::errors::ValidationError;
use super::types::{ConfigManager, Settings, ValidatedSettings};

const MINIMAL_CONFIG: &str = r##"
[provisioning]
email = "probe@example.com"
password = "hunter2"

[poll]
targets = ["#2P9UG82L", "#8QU8J9LP"]
"##;

fn parse(toml: &str) -> Settings {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .and_then(|config| config.try_deserialize())
        .expect("configuration should parse")
}

#[test]
fn default_config_parses_but_needs_credentials() {
    let settings = parse(DEFAULT_CONFIG);

    assert_eq!(settings.poll.targets.len(), 21);
    assert_eq!(settings.provisioning.key_count, 1);
    assert!(!settings.metrics.enabled);
    assert!(matches!(
        settings.validate(),
        Err(ValidationError::ProvisioningConfig(
            ProvisionValidationError::MissingEmail
        ))
    ));
}

#[test]
fn omitted_sections_fall_back_to_defaults() {
    let settings = ValidatedSettings::new(parse(MINIMAL_CONFIG)).expect("should validate");

    assert_eq!(settings.get_log_level(), "info");
    assert_eq!(settings.throttle.rate_limit, 1);
    assert_eq!(settings.throttle.request_timeout(), Duration::from_millis(5000));
    assert_eq!(settings.get_pass_interval(), Duration::from_millis(1000));
    assert_eq!(settings.poll.resource, "clans");
    assert_eq!(
        settings.provisioning.key_name,
        "ClashPerk_API_Status_Token"
    );
    assert!(!settings.ip_detection.services.is_empty());
}

#[test]
fn zero_rate_limit_is_rejected() {
    let toml = format!("{}\n[throttle]\nrate_limit = 0\n", MINIMAL_CONFIG);
    assert!(matches!(
        parse(&toml).validate(),
        Err(ValidationError::InvalidRateLimit)
    ));
}

#[test]
fn unknown_log_level_is_rejected() {
    let toml = format!("{}\n[log]\nlevel = \"loud\"\n", MINIMAL_CONFIG);
    assert!(matches!(
        parse(&toml).validate(),
        Err(ValidationError::InvalidLogLevel(_))
    ));
}

#[test]
fn enabled_metrics_without_key_are_rejected() {
    let toml = format!(
        "{}\n[metrics]\nenabled = true\npage_id = \"p\"\nmetric_id = \"m\"\n",
        MINIMAL_CONFIG
    );
    assert!(matches!(
        parse(&toml).validate(),
        Err(ValidationError::MetricsConfig(_))
    ));
}

#[test]
fn settings_load_from_a_file() {
    let path = std::env::temp_dir().join(format!("status-probe-{}.toml", std::process::id()));
    fs::write(&path, MINIMAL_CONFIG).expect("temp config should be writable");

    let settings = ConfigManager::load_settings(&path);
    let _ = fs::remove_file(&path);

    let settings = settings.expect("file should load");
    assert_eq!(settings.provisioning.email, "probe@example.com");
    assert_eq!(settings.poll.targets[1], "#8QU8J9LP");
}
