use serde::Deserialize;

/// Top-level configuration settings for the library.
///
/// Currently holds only the defaults applied to newly built check payloads.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub check: CheckSettings,
}

/// Defaults applied to newly built check payloads.
///
/// Controls whether the local hostname is resolved at construction, whether
/// the canonical fully-qualified form is used, and the service name a payload
/// starts out with.
#[derive(Debug, Deserialize, Clone)]
pub struct CheckSettings {
    pub use_local_hostname: bool,
    pub canonical_hostname: bool,
    pub default_service_name: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub check: Option<PartialCheckSettings>,
}

/// Partial check settings.
///
/// Used when loading check defaults from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialCheckSettings {
    pub use_local_hostname: Option<bool>,
    pub canonical_hostname: Option<bool>,
    pub default_service_name: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Ensures the library has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            check: CheckSettings {
                use_local_hostname: true,
                canonical_hostname: false,
                default_service_name: "UNDEFINED".to_string(),
            },
        }
    }
}
