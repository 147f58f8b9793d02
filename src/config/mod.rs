mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{CheckSettings, Settings};

#[cfg(test)]
mod tests;

/// Loads the configuration from the default file and environment variables.
/// Merges the configuration with default values.
/// Returns a `Settings` struct containing the check defaults.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from("config/default")
}

/// Loads the configuration from the given file basename and environment
/// variables. Environment variables are prefixed with `PASSIVECHECK_` and use
/// `__` to separate sections, e.g. `PASSIVECHECK_CHECK__DEFAULT_SERVICE_NAME`.
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix("passivecheck").separator("__"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        check: CheckSettings {
            use_local_hostname: partial
                .check
                .as_ref()
                .and_then(|c| c.use_local_hostname)
                .unwrap_or(default.check.use_local_hostname),
            canonical_hostname: partial
                .check
                .as_ref()
                .and_then(|c| c.canonical_hostname)
                .unwrap_or(default.check.canonical_hostname),
            default_service_name: partial
                .check
                .as_ref()
                .and_then(|c| c.default_service_name.clone())
                .unwrap_or(default.check.default_service_name),
        },
    })
}
