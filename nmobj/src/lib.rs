//! A typed, read-only object model over NetworkManager's D-Bus API.
//!
//! This crate wraps the objects NetworkManager publishes on D-Bus (the
//! manager root, devices, access points, active connections, IP and DHCP
//! configurations, saved settings) in Rust types:
//!
//! - Property getters return native types and fail on a wire type mismatch
//!   instead of coercing
//! - Object references resolve to the most specific wrapper type, chosen
//!   from a remote discriminator such as `DeviceType`
//! - Every wrapper can produce a JSON [`Snapshot`] of its current state
//!
//! All calls are synchronous and read fresh state; nothing is cached.
//!
//! # Example
//!
//! ```no_run
//! use nmobj::{Device, NetworkManager, NmObject};
//!
//! # fn example() -> nmobj::Result<()> {
//! let nm = NetworkManager::new()?;
//!
//! for device in nm.devices()? {
//!     println!("{}: {}", device.core().interface_name()?, device.device_type());
//!
//!     if let Device::Wireless(wifi) = &device {
//!         for ap in wifi.access_points()? {
//!             println!("  {} {}%", ap.ssid()?, ap.strength()?);
//!         }
//!     }
//! }
//!
//! let path = zvariant::OwnedObjectPath::try_from("/org/freedesktop/NetworkManager/AccessPoint/1")
//!     .expect("valid object path");
//! let ap = nm.access_point(path);
//! println!("{}", ap.snapshot()?.to_json_string()?);
//! # Ok(())
//! # }
//! ```
//!
//! # Snapshot policies
//!
//! Access points, active connections, IP configurations, settings and the
//! manager root produce snapshots fail-fast: the first failed read is
//! returned and no partial snapshot escapes. Concrete device types read
//! the fields every device shares the same way, then add the fields of their
//! own interface best-effort: those that cannot be read are left out.
//!
//! # Error Handling
//!
//! All operations return `Result<T, NmError>`. Transport errors from zbus
//! are passed through unchanged in [`NmError::Transport`].
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade for logging. To see
//! log output, add a logging implementation like `env_logger`. For example:
//!
//! ```no_run,ignore
//! env_logger::init();
//! // ...
//! ```

// Internal implementation modules
mod util;

// Public API modules
pub mod api;
pub mod core;
pub mod dbus;
pub mod objects;
pub mod types;

// Re-exported public API
pub use api::config::{BusConfig, BusKind};
pub use api::models::{
    ActiveConnectionState, ApFlags, ApSecurityFlags, ConnectivityState, DeviceCapabilities,
    DeviceState, DeviceType, Nm80211Mode, NmError, NmState, VpnConnectionState,
    WifiCapabilities,
};
pub use api::network_manager::NetworkManager;
pub use crate::core::factory::{resolve_active_connection, resolve_device};
pub use crate::core::object::{NmObject, ObjectHandle};
pub use crate::core::snapshot::{Snapshot, SnapshotPolicy};
pub use dbus::transport::{PropertySource, SystemBus};
pub use dbus::wire::{FromWire, WireType, WireValue};
pub use objects::access_point::AccessPoint;
pub use objects::active_connection::{ActiveConnection, ActiveConnectionCore, VpnConnection};
pub use objects::device::{
    BluetoothDevice, BondDevice, BridgeDevice, Device, DeviceCore, DummyDevice, GenericDevice,
    IpTunnelDevice, LoopbackDevice, MacvlanDevice, ModemDevice, TunDevice, VethDevice,
    VlanDevice, WifiP2PDevice, WireGuardDevice, WiredDevice, WirelessDevice,
};
pub use objects::ip_config::{DhcpConfig, IpConfig, IpFamily};
pub use objects::manager::NetworkManagerObject;
pub use objects::settings::{Settings, SettingsConnection};
pub use types::schema::Property;

/// A specialized `Result` type for NetworkManager object reads.
pub type Result<T> = std::result::Result<T, NmError>;
