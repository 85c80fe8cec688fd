use std::sync::Arc;

use zvariant::OwnedObjectPath;

use crate::Result;
use crate::api::config::BusConfig;
use crate::core::factory::{resolve_active_connection, resolve_device};
use crate::core::object::ObjectHandle;
use crate::dbus::transport::{PropertySource, SystemBus};
use crate::objects::access_point::AccessPoint;
use crate::objects::active_connection::ActiveConnection;
use crate::objects::device::Device;
use crate::objects::manager::NetworkManagerObject;
use crate::objects::settings::Settings;
use crate::types::constants::{NM_PATH, SETTINGS_PATH};

/// Entry point to the NetworkManager object tree.
///
/// Holds a property transport and hands out typed wrappers. Every wrapper
/// method performs fresh remote reads; nothing is cached here or in the
/// wrappers.
///
/// # Creating an Instance
///
/// ```no_run
/// use nmobj::{BusConfig, BusKind, NetworkManager};
///
/// # fn example() -> nmobj::Result<()> {
/// // System bus, the usual case
/// let nm = NetworkManager::new()?;
///
/// // A private test bus
/// let cfg = BusConfig::new().with_bus(BusKind::Address("unix:path=/tmp/nm-test".into()));
/// let test_nm = NetworkManager::with_config(&cfg)?;
/// # Ok(())
/// # }
/// ```
///
/// # Examples
///
/// ## Listing devices
///
/// ```no_run
/// use nmobj::{NetworkManager, NmObject};
///
/// # fn example() -> nmobj::Result<()> {
/// let nm = NetworkManager::new()?;
/// for device in nm.devices()? {
///     println!(
///         "{} ({})",
///         device.core().interface_name()?,
///         device.device_type()
///     );
///     println!("{}", device.snapshot()?.to_json_pretty()?);
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Thread Safety
///
/// `NetworkManager` is `Clone + Send + Sync`. Clones share one transport.
#[derive(Debug, Clone)]
pub struct NetworkManager {
    bus: Arc<dyn PropertySource>,
}

impl NetworkManager {
    /// Connects to NetworkManager on the system bus.
    pub fn new() -> Result<Self> {
        Self::with_config(&BusConfig::default())
    }

    /// Connects using the given bus settings.
    pub fn with_config(config: &BusConfig) -> Result<Self> {
        let bus = SystemBus::connect(config)?;
        Ok(Self::with_source(Arc::new(bus)))
    }

    /// Reads through an existing transport, e.g. a [`SystemBus`] built from
    /// a connection the caller already owns.
    pub fn with_source(bus: Arc<dyn PropertySource>) -> Self {
        Self { bus }
    }

    /// A handle for an arbitrary object path on this transport.
    pub fn object(&self, path: OwnedObjectPath) -> ObjectHandle {
        ObjectHandle::new(Arc::clone(&self.bus), path)
    }

    fn fixed(&self, path: &'static str) -> ObjectHandle {
        self.object(OwnedObjectPath::from(
            zvariant::ObjectPath::from_static_str_unchecked(path),
        ))
    }

    /// The root object at `/org/freedesktop/NetworkManager`.
    pub fn manager(&self) -> NetworkManagerObject {
        NetworkManagerObject::new(self.fixed(NM_PATH))
    }

    /// The settings root at `/org/freedesktop/NetworkManager/Settings`.
    pub fn settings(&self) -> Settings {
        Settings::new(self.fixed(SETTINGS_PATH))
    }

    /// Realized devices, each resolved to its concrete type.
    ///
    /// Fails with [`NmError::UnsupportedVariant`](crate::NmError::UnsupportedVariant)
    /// if any device has a type without a wrapper.
    pub fn devices(&self) -> Result<Vec<Device>> {
        self.manager().devices()
    }

    /// Realized and placeholder devices.
    pub fn all_devices(&self) -> Result<Vec<Device>> {
        self.manager().all_devices()
    }

    /// Resolves the device at `path`.
    pub fn device(&self, path: OwnedObjectPath) -> Result<Device> {
        resolve_device(self.object(path))
    }

    /// Finds a device by kernel interface name, e.g. `"wlan0"`.
    pub fn device_by_interface(&self, name: &str) -> Result<Option<Device>> {
        for device in self.devices()? {
            if device.core().interface_name()? == name {
                return Ok(Some(device));
            }
        }
        Ok(None)
    }

    /// Wraps the access point at `path`. Performs no read.
    pub fn access_point(&self, path: OwnedObjectPath) -> AccessPoint {
        AccessPoint::new(self.object(path))
    }

    /// Access points visible to every wireless device, in device order.
    pub fn access_points(&self) -> Result<Vec<AccessPoint>> {
        let mut aps = Vec::new();
        for device in self.devices()? {
            if let Some(wifi) = device.as_wireless() {
                aps.extend(wifi.access_points()?);
            }
        }
        Ok(aps)
    }

    /// Resolves the active connection at `path`.
    pub fn active_connection(&self, path: OwnedObjectPath) -> Result<ActiveConnection> {
        resolve_active_connection(self.object(path))
    }

    pub fn active_connections(&self) -> Result<Vec<ActiveConnection>> {
        self.manager().active_connections()
    }
}
