//! Bus addressing configuration.

use crate::types::constants::NM_SERVICE;

/// Which message bus to connect to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BusKind {
    /// The system bus, where NetworkManager normally lives.
    #[default]
    System,
    /// The per-user session bus. Mostly useful for test services.
    Session,
    /// An explicit D-Bus address such as `unix:path=/run/test-bus`.
    Address(String),
}

/// Where to find NetworkManager on the bus.
///
/// # Examples
///
/// ```rust
/// use nmobj::{BusConfig, BusKind};
///
/// // Defaults: system bus, `org.freedesktop.NetworkManager`
/// let config = BusConfig::default();
/// assert_eq!(config.service, "org.freedesktop.NetworkManager");
///
/// // A mock NetworkManager on the session bus
/// let config = BusConfig::new()
///     .with_bus(BusKind::Session)
///     .with_service("org.example.FakeNetworkManager");
/// assert_eq!(config.bus, BusKind::Session);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusConfig {
    /// Bus to connect to.
    pub bus: BusKind,
    /// Well-known name every property read is addressed to.
    pub service: String,
}

impl BusConfig {
    /// Creates a configuration with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bus to connect to.
    #[must_use]
    pub fn with_bus(mut self, bus: BusKind) -> Self {
        self.bus = bus;
        self
    }

    /// Sets the destination service name.
    #[must_use]
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }
}

impl Default for BusConfig {
    /// Defaults:
    /// - `bus`: [`BusKind::System`]
    /// - `service`: `org.freedesktop.NetworkManager`
    fn default() -> Self {
        Self {
            bus: BusKind::System,
            service: NM_SERVICE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_system_networkmanager() {
        let config = BusConfig::new();
        assert_eq!(config.bus, BusKind::System);
        assert_eq!(config.service, NM_SERVICE);
    }

    #[test]
    fn builder_overrides() {
        let config = BusConfig::new()
            .with_bus(BusKind::Address("unix:path=/tmp/bus".into()))
            .with_service("org.example.Nm");
        assert_eq!(config.bus, BusKind::Address("unix:path=/tmp/bus".into()));
        assert_eq!(config.service, "org.example.Nm");
    }
}
