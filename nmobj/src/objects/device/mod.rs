//! Network devices.
//!
//! [`DeviceCore`] reads the properties every device shares. Each concrete
//! device type wraps a `DeviceCore` and adds the properties of its own
//! interface. [`Device`] is the closed set of supported types, produced by
//! [`resolve_device`](crate::core::factory::resolve_device).
//!
//! `DeviceCore` snapshots are fail-fast. Snapshots of the concrete types
//! include the shared fields, still fail-fast, followed by the fields of
//! their own interface, which are best-effort: many subtype properties only
//! exist on recent NetworkManager releases.

use serde_json::Value as Json;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::api::models::{ConnectivityState, DeviceCapabilities, DeviceState, DeviceType};
use crate::core::factory::{resolve_active_connection, resolve_devices};
use crate::core::object::{NmObject, ObjectHandle, serialize_via_snapshot};
use crate::core::snapshot::{Snapshot, SnapshotBuilder, SnapshotPolicy};
use crate::objects::active_connection::ActiveConnection;
use crate::objects::ip_config::{DhcpConfig, IpConfig, IpFamily};
use crate::objects::settings::SettingsConnection;
use crate::types::schema::{Property, device};
use crate::util::utils::{path_string, path_strings};

/// Declares a concrete device type over [`DeviceCore`].
///
/// The type must also provide an inherent
/// `fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()>` for its
/// own snapshot fields.
macro_rules! device_subtype {
    ($(#[$meta:meta])* $name:ident => $variant:ident, $iface:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            core: $crate::objects::device::DeviceCore,
        }

        impl $name {
            /// Properties shared by all devices.
            pub fn core(&self) -> &$crate::objects::device::DeviceCore {
                &self.core
            }
        }

        impl From<$crate::core::object::ObjectHandle> for $name {
            fn from(handle: $crate::core::object::ObjectHandle) -> Self {
                Self {
                    core: $crate::objects::device::DeviceCore::new(handle),
                }
            }
        }

        impl From<$name> for $crate::objects::device::Device {
            fn from(device: $name) -> Self {
                Self::$variant(device)
            }
        }

        impl $crate::core::object::NmObject for $name {
            fn handle(&self) -> &$crate::core::object::ObjectHandle {
                self.core.handle()
            }

            fn interface(&self) -> &'static str {
                $crate::types::schema::$iface::INTERFACE
            }

            fn schema(&self) -> &'static [&'static [$crate::types::schema::Property]] {
                &[
                    $crate::types::schema::device::ALL,
                    $crate::types::schema::$iface::ALL,
                ]
            }

            fn snapshot_policy(&self) -> $crate::core::snapshot::SnapshotPolicy {
                $crate::core::snapshot::SnapshotPolicy::BestEffort
            }

            /// Shared device fields are read fail-fast; only the fields of
            /// this device's own interface are best-effort.
            fn snapshot(&self) -> $crate::Result<$crate::core::snapshot::Snapshot> {
                use $crate::core::snapshot::{SnapshotBuilder, SnapshotPolicy};

                let mut shared = SnapshotBuilder::new(SnapshotPolicy::FailFast);
                self.core.write_fields(&mut shared)?;

                let mut own = SnapshotBuilder::new(self.snapshot_policy());
                self.write_fields(&mut own)?;

                let mut snapshot = shared.build();
                snapshot.extend(own.build());
                Ok(snapshot)
            }
        }

        $crate::core::object::serialize_via_snapshot!($name);
    };
}

mod bluetooth;
mod bond;
mod bridge;
mod dummy;
mod generic;
mod ip_tunnel;
mod loopback;
mod macvlan;
mod modem;
mod tun;
mod veth;
mod vlan;
mod wifi_p2p;
mod wired;
mod wireguard;
mod wireless;

pub use bluetooth::BluetoothDevice;
pub use bond::BondDevice;
pub use bridge::BridgeDevice;
pub use dummy::DummyDevice;
pub use generic::GenericDevice;
pub use ip_tunnel::IpTunnelDevice;
pub use loopback::LoopbackDevice;
pub use macvlan::MacvlanDevice;
pub use modem::ModemDevice;
pub use tun::TunDevice;
pub use veth::VethDevice;
pub use vlan::VlanDevice;
pub use wifi_p2p::WifiP2PDevice;
pub use wired::WiredDevice;
pub use wireguard::WireGuardDevice;
pub use wireless::WirelessDevice;

/// The `org.freedesktop.NetworkManager.Device` view of any device.
///
/// Usable on its own for objects whose concrete type does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceCore {
    handle: ObjectHandle,
}

impl DeviceCore {
    pub fn new(handle: ObjectHandle) -> Self {
        Self { handle }
    }

    pub(crate) fn into_handle(self) -> ObjectHandle {
        self.handle
    }

    /// Operating-system specific transient device identifier.
    pub fn udi(&self) -> Result<String> {
        self.handle.read(&device::UDI)
    }

    /// Sysfs path of the device.
    pub fn sysfs_path(&self) -> Result<String> {
        self.handle.read(&device::PATH)
    }

    /// Kernel interface name, e.g. `wlan0`.
    pub fn interface_name(&self) -> Result<String> {
        self.handle.read(&device::INTERFACE_NAME)
    }

    /// Interface used for IP traffic; may differ from
    /// [`interface_name`](Self::interface_name) for PPP and similar.
    pub fn ip_interface(&self) -> Result<String> {
        self.handle.read(&device::IP_INTERFACE)
    }

    pub fn driver(&self) -> Result<String> {
        self.handle.read(&device::DRIVER)
    }

    pub fn driver_version(&self) -> Result<String> {
        self.handle.read(&device::DRIVER_VERSION)
    }

    pub fn firmware_version(&self) -> Result<String> {
        self.handle.read(&device::FIRMWARE_VERSION)
    }

    pub fn capabilities(&self) -> Result<DeviceCapabilities> {
        self.handle
            .read::<u32>(&device::CAPABILITIES)
            .map(DeviceCapabilities::from_bits_truncate)
    }

    pub fn state(&self) -> Result<DeviceState> {
        self.handle.read::<u32>(&device::STATE).map(DeviceState::from)
    }

    pub fn active_connection_path(&self) -> Result<Option<OwnedObjectPath>> {
        self.handle.read_path(&device::ACTIVE_CONNECTION)
    }

    /// The active connection using this device, if any.
    pub fn active_connection(&self) -> Result<Option<ActiveConnection>> {
        self.active_connection_path()?
            .map(|p| resolve_active_connection(self.handle.rebind(p)))
            .transpose()
    }

    /// IPv4 configuration; only present while the device is activated.
    pub fn ip4_config(&self) -> Result<Option<IpConfig>> {
        Ok(self
            .handle
            .read_path(&device::IP4_CONFIG)?
            .map(|p| IpConfig::new(self.handle.rebind(p), IpFamily::V4)))
    }

    pub fn dhcp4_config(&self) -> Result<Option<DhcpConfig>> {
        Ok(self
            .handle
            .read_path(&device::DHCP4_CONFIG)?
            .map(|p| DhcpConfig::new(self.handle.rebind(p), IpFamily::V4)))
    }

    pub fn ip6_config(&self) -> Result<Option<IpConfig>> {
        Ok(self
            .handle
            .read_path(&device::IP6_CONFIG)?
            .map(|p| IpConfig::new(self.handle.rebind(p), IpFamily::V6)))
    }

    pub fn dhcp6_config(&self) -> Result<Option<DhcpConfig>> {
        Ok(self
            .handle
            .read_path(&device::DHCP6_CONFIG)?
            .map(|p| DhcpConfig::new(self.handle.rebind(p), IpFamily::V6)))
    }

    /// Whether NetworkManager manages this device.
    pub fn managed(&self) -> Result<bool> {
        self.handle.read(&device::MANAGED)
    }

    pub fn autoconnect(&self) -> Result<bool> {
        self.handle.read(&device::AUTOCONNECT)
    }

    pub fn firmware_missing(&self) -> Result<bool> {
        self.handle.read(&device::FIRMWARE_MISSING)
    }

    pub fn nm_plugin_missing(&self) -> Result<bool> {
        self.handle.read(&device::NM_PLUGIN_MISSING)
    }

    /// Raw `DeviceType` code. This is the factory's discriminator.
    pub fn device_type_code(&self) -> Result<u32> {
        self.handle.read(&device::DEVICE_TYPE)
    }

    pub fn device_type(&self) -> Result<DeviceType> {
        self.device_type_code().map(DeviceType::from)
    }

    /// Saved connections that could be activated on this device.
    pub fn available_connections(&self) -> Result<Vec<SettingsConnection>> {
        Ok(self
            .handle
            .read::<Vec<OwnedObjectPath>>(&device::AVAILABLE_CONNECTIONS)?
            .into_iter()
            .map(|p| SettingsConnection::new(self.handle.rebind(p)))
            .collect())
    }

    pub fn physical_port_id(&self) -> Result<String> {
        self.handle.read(&device::PHYSICAL_PORT_ID)
    }

    pub fn mtu(&self) -> Result<u32> {
        self.handle.read(&device::MTU)
    }

    /// Raw `NMMetered` value.
    pub fn metered(&self) -> Result<u32> {
        self.handle.read(&device::METERED)
    }

    /// False for placeholder devices that do not exist yet.
    pub fn real(&self) -> Result<bool> {
        self.handle.read(&device::REAL)
    }

    pub fn ip4_connectivity(&self) -> Result<ConnectivityState> {
        self.handle
            .read::<u32>(&device::IP4_CONNECTIVITY)
            .map(ConnectivityState::from)
    }

    pub fn ip6_connectivity(&self) -> Result<ConnectivityState> {
        self.handle
            .read::<u32>(&device::IP6_CONNECTIVITY)
            .map(ConnectivityState::from)
    }

    /// Raw `NMDeviceInterfaceFlags`.
    pub fn interface_flags(&self) -> Result<u32> {
        self.handle.read(&device::INTERFACE_FLAGS)
    }

    /// Hardware address. NetworkManager 1.24 and later.
    pub fn hw_address(&self) -> Result<String> {
        self.handle.read(&device::HW_ADDRESS)
    }

    /// Ports attached to this controller device. NetworkManager 1.34 and later.
    pub fn ports(&self) -> Result<Vec<Device>> {
        let paths = self.handle.read(&device::PORTS)?;
        resolve_devices(&self.handle, paths)
    }

    /// Writes the shared device fields.
    ///
    /// Enum-valued fields are written as text and object references as
    /// paths. `HwAddress` and `Ports` are left to the concrete types.
    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        let h = &self.handle;
        b.field("Udi", self.udi())?
            .field("Interface", self.interface_name())?
            .field("IpInterface", self.ip_interface())?
            .field("Driver", self.driver())?
            .field("DriverVersion", self.driver_version())?
            .field("FirmwareVersion", self.firmware_version())?
            .field("Capabilities", self.capabilities().map(|c| c.bits()))?
            .field("State", self.state().map(|s| s.to_string()))?
            .field("ActiveConnection", self.active_connection_path().map(path_string))?
            .field("Ip4Config", h.read_path(&device::IP4_CONFIG).map(path_string))?
            .field("Dhcp4Config", h.read_path(&device::DHCP4_CONFIG).map(path_string))?
            .field("Ip6Config", h.read_path(&device::IP6_CONFIG).map(path_string))?
            .field("Dhcp6Config", h.read_path(&device::DHCP6_CONFIG).map(path_string))?
            .field("Managed", self.managed())?
            .field("Autoconnect", self.autoconnect())?
            .field("FirmwareMissing", self.firmware_missing())?
            .field("NmPluginMissing", self.nm_plugin_missing())?
            .field("DeviceType", self.device_type().map(|t| t.to_string()))?
            .field(
                "AvailableConnections",
                h.read::<Vec<OwnedObjectPath>>(&device::AVAILABLE_CONNECTIONS)
                    .map(|p| path_strings(&p)),
            )?
            .field("PhysicalPortId", self.physical_port_id())?
            .field("Mtu", self.mtu())?
            .field("Metered", self.metered())?
            .field("Real", self.real())?
            .field("Ip4Connectivity", self.ip4_connectivity().map(|c| c.to_string()))?
            .field("Ip6Connectivity", self.ip6_connectivity().map(|c| c.to_string()))?
            .field("InterfaceFlags", self.interface_flags())?;
        Ok(())
    }
}

impl From<ObjectHandle> for DeviceCore {
    fn from(handle: ObjectHandle) -> Self {
        Self::new(handle)
    }
}

impl NmObject for DeviceCore {
    fn handle(&self) -> &ObjectHandle {
        &self.handle
    }

    fn interface(&self) -> &'static str {
        device::INTERFACE
    }

    fn schema(&self) -> &'static [&'static [Property]] {
        &[device::ALL]
    }

    fn snapshot_policy(&self) -> SnapshotPolicy {
        SnapshotPolicy::FailFast
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let mut b = SnapshotBuilder::new(self.snapshot_policy());
        self.write_fields(&mut b)?;
        Ok(b.build())
    }
}

/// A device resolved to its concrete type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Device {
    Wired(WiredDevice),
    Wireless(WirelessDevice),
    Bluetooth(BluetoothDevice),
    Modem(ModemDevice),
    Bond(BondDevice),
    Vlan(VlanDevice),
    Bridge(BridgeDevice),
    Generic(GenericDevice),
    Tun(TunDevice),
    IpTunnel(IpTunnelDevice),
    Macvlan(MacvlanDevice),
    Veth(VethDevice),
    Dummy(DummyDevice),
    WireGuard(WireGuardDevice),
    WifiP2P(WifiP2PDevice),
    Loopback(LoopbackDevice),
}

/// Runs `$body` with `$d` bound to the inner wrapper of any [`Device`] variant.
macro_rules! each_device {
    ($self:expr, $d:ident => $body:expr) => {
        match $self {
            Device::Wired($d) => $body,
            Device::Wireless($d) => $body,
            Device::Bluetooth($d) => $body,
            Device::Modem($d) => $body,
            Device::Bond($d) => $body,
            Device::Vlan($d) => $body,
            Device::Bridge($d) => $body,
            Device::Generic($d) => $body,
            Device::Tun($d) => $body,
            Device::IpTunnel($d) => $body,
            Device::Macvlan($d) => $body,
            Device::Veth($d) => $body,
            Device::Dummy($d) => $body,
            Device::WireGuard($d) => $body,
            Device::WifiP2P($d) => $body,
            Device::Loopback($d) => $body,
        }
    };
}

impl Device {
    /// Properties shared by all devices.
    pub fn core(&self) -> &DeviceCore {
        each_device!(self, d => d.core())
    }

    /// The type this device was resolved as. Performs no remote read.
    pub fn device_type(&self) -> DeviceType {
        match self {
            Self::Wired(_) => DeviceType::Ethernet,
            Self::Wireless(_) => DeviceType::Wifi,
            Self::Bluetooth(_) => DeviceType::Bluetooth,
            Self::Modem(_) => DeviceType::Modem,
            Self::Bond(_) => DeviceType::Bond,
            Self::Vlan(_) => DeviceType::Vlan,
            Self::Bridge(_) => DeviceType::Bridge,
            Self::Generic(_) => DeviceType::Generic,
            Self::Tun(_) => DeviceType::Tun,
            Self::IpTunnel(_) => DeviceType::IpTunnel,
            Self::Macvlan(_) => DeviceType::Macvlan,
            Self::Veth(_) => DeviceType::Veth,
            Self::Dummy(_) => DeviceType::Dummy,
            Self::WireGuard(_) => DeviceType::WireGuard,
            Self::WifiP2P(_) => DeviceType::WifiP2P,
            Self::Loopback(_) => DeviceType::Loopback,
        }
    }

    pub fn as_wireless(&self) -> Option<&WirelessDevice> {
        match self {
            Self::Wireless(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_wired(&self) -> Option<&WiredDevice> {
        match self {
            Self::Wired(d) => Some(d),
            _ => None,
        }
    }
}

impl NmObject for Device {
    fn handle(&self) -> &ObjectHandle {
        each_device!(self, d => d.handle())
    }

    fn interface(&self) -> &'static str {
        each_device!(self, d => d.interface())
    }

    fn schema(&self) -> &'static [&'static [Property]] {
        each_device!(self, d => d.schema())
    }

    fn snapshot_policy(&self) -> SnapshotPolicy {
        each_device!(self, d => d.snapshot_policy())
    }

    fn snapshot(&self) -> Result<Snapshot> {
        each_device!(self, d => d.snapshot())
    }
}

serialize_via_snapshot!(DeviceCore, Device);

/// Snapshots each resolved device in order, for controller `Slaves` fields.
/// Snapshots of resolved child devices, for a best-effort field.
///
/// The inner result is the field value: failing to resolve the children
/// drops the field. A child whose own snapshot fails fails the parent.
fn nested_snapshots(devices: Result<Vec<Device>>) -> Result<Result<Vec<Json>>> {
    let devices = match devices {
        Ok(devices) => devices,
        Err(e) => return Ok(Err(e)),
    };
    devices
        .iter()
        .map(|d| d.snapshot().map(Json::from))
        .collect::<Result<Vec<_>>>()
        .map(Ok)
}
