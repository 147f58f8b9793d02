use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::check::level::Level;
use crate::config::CheckSettings;
use crate::resolver::{HostnameResolver, SystemResolver};
use crate::utils::error::{PayloadError, Result};

/// Hostname used when local hostname resolution is skipped.
pub const UNKNOWN_HOSTNAME: &str = "UNKNOWN";

/// Service name a payload carries until one is set explicitly.
pub const DEFAULT_SERVICE_NAME: &str = "UNDEFINED";

/// A single passive check message, destined for a monitoring collector.
///
/// A payload carries the host the check ran on, the severity of the result,
/// the name of the checked service, and a free-text message. The hostname and
/// service name are never empty: mutations that would make them empty fail
/// with [`PayloadError::InvalidArgument`] and leave the previous value intact.
///
/// Equality and hashing are structural over all four fields, in the order
/// hostname, level, service name, message, so equal payloads always hash
/// identically.
///
/// # Example
///
/// ```
/// use passivecheck::check::{Level, Payload};
///
/// let mut payload = Payload::new("web01", Level::Critical, "disk-check", "95% full").unwrap();
/// payload.set_level_text("warning");
/// assert_eq!(payload.level(), Level::Warning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payload {
    hostname: String,
    level: Level,
    service_name: String,
    message: String,
}

/// A payload with hostname resolution skipped: hostname "UNKNOWN", level
/// unknown, service name "UNDEFINED" and an empty message.
impl Default for Payload {
    fn default() -> Self {
        Self {
            hostname: UNKNOWN_HOSTNAME.to_string(),
            level: Level::Unknown,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            message: String::new(),
        }
    }
}

impl Payload {
    /// Creates a new payload from all four fields.
    ///
    /// `hostname` and `service_name` must be non-empty; any level and any
    /// message, including an empty one, are accepted.
    pub fn new(
        hostname: impl Into<String>,
        level: Level,
        service_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self> {
        let hostname = hostname.into();
        let service_name = service_name.into();
        ensure_not_empty("hostname", &hostname)?;
        ensure_not_empty("service_name", &service_name)?;

        Ok(Self {
            hostname,
            level,
            service_name,
            message: message.into(),
        })
    }

    /// Creates a default payload with the hostname set to the short hostname
    /// of this machine.
    ///
    /// Fails with [`PayloadError::HostResolution`] if the local name service
    /// cannot resolve a hostname.
    pub fn with_local_hostname() -> Result<Self> {
        let mut payload = Self::default();
        payload.use_local_hostname()?;
        Ok(payload)
    }

    /// Creates a default payload honoring loaded defaults: the configured
    /// service name, and the configured hostname policy (skip resolution, or
    /// resolve the short or canonical local hostname).
    pub fn from_settings(settings: &CheckSettings) -> Result<Self> {
        let mut payload = Self::default();
        payload.set_service_name(settings.default_service_name.clone())?;
        if settings.use_local_hostname {
            payload.resolve_local_hostname(settings.canonical_hostname)?;
        }
        Ok(payload)
    }

    /// The hostname to be sent in this passive check.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Sets the hostname directly. Fails if `hostname` is empty.
    pub fn set_hostname(&mut self, hostname: impl Into<String>) -> Result<()> {
        let hostname = hostname.into();
        ensure_not_empty("hostname", &hostname)?;
        self.hostname = hostname;
        Ok(())
    }

    /// Uses the short hostname of this machine in the passive check.
    pub fn use_local_hostname(&mut self) -> Result<()> {
        self.resolve_local_hostname(false)
    }

    /// Resolves the local hostname through the system name service and stores
    /// it: the fully qualified form when `use_canonical` is true, the short
    /// form otherwise.
    ///
    /// On lookup failure the payload is left unchanged and the underlying
    /// error is surfaced as [`PayloadError::HostResolution`], so callers can
    /// tell an environment problem apart from bad input.
    pub fn resolve_local_hostname(&mut self, use_canonical: bool) -> Result<()> {
        self.resolve_local_hostname_with(&SystemResolver, use_canonical)
    }

    /// Same as [`Payload::resolve_local_hostname`], but through the supplied
    /// resolver instead of the system one.
    pub fn resolve_local_hostname_with<R: HostnameResolver>(
        &mut self,
        resolver: &R,
        use_canonical: bool,
    ) -> Result<()> {
        let resolved = resolver.resolve(use_canonical)?;
        debug!(hostname = %resolved, canonical = use_canonical, "resolved local hostname");
        self.set_hostname(resolved)
    }

    /// The severity level of this check result.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Sets the severity level. All variants are valid, so this never fails.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Sets the severity level from text, ignoring case.
    ///
    /// Unrecognized text resolves to `Level::Unknown` rather than failing;
    /// see [`Level::parse`].
    pub fn set_level_text(&mut self, text: &str) {
        self.level = Level::parse(text);
    }

    /// The name of the checked service.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Sets the service name. Fails if `service_name` is empty.
    pub fn set_service_name(&mut self, service_name: impl Into<String>) -> Result<()> {
        let service_name = service_name.into();
        ensure_not_empty("service_name", &service_name)?;
        self.service_name = service_name;
        Ok(())
    }

    /// The free-text message of this check result.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Sets the message. Any text is valid, including an empty one.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

/// Log-oriented rendering, not a wire format.
impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}/{}: {}",
            self.level, self.hostname, self.service_name, self.message
        )
    }
}

fn ensure_not_empty(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(PayloadError::InvalidArgument(field));
    }
    Ok(())
}
