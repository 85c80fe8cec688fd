//! Device type registry: the discriminator table for the factory resolver.
//!
//! Maps NetworkManager device type codes to metadata and to the constructor
//! of the matching [`Device`] variant. Codes absent from the registry are
//! unsupported; the factory reports them instead of guessing a wrapper.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::core::object::ObjectHandle;
use crate::objects::device::{
    BluetoothDevice, BondDevice, BridgeDevice, Device, DummyDevice, GenericDevice, IpTunnelDevice,
    LoopbackDevice, MacvlanDevice, ModemDevice, TunDevice, VethDevice, VlanDevice, WifiP2PDevice,
    WireGuardDevice, WiredDevice, WirelessDevice,
};
use crate::types::constants::device_type;

/// Trait for device type-specific behavior.
///
/// The trait provides metadata about the device type and builds the
/// wrapper for an object already known to be of this type.
pub trait DeviceTypeInfo: Send + Sync {
    /// Returns the NetworkManager D-Bus constant for this device type.
    fn nm_type_code(&self) -> u32;

    /// Returns the human-readable name of this device type.
    fn display_name(&self) -> &'static str;

    /// Returns the NetworkManager connection type string.
    ///
    /// Examples: "802-11-wireless", "802-3-ethernet", "wireguard", "bluetooth"
    fn connection_type(&self) -> &'static str;

    /// Wraps `handle` in this type's [`Device`] variant.
    fn wrap(&self, handle: ObjectHandle) -> Device;
}

/// One registry row.
struct DeviceTypeEntry {
    code: u32,
    name: &'static str,
    connection_type: &'static str,
    wrap: fn(ObjectHandle) -> Device,
}

impl DeviceTypeInfo for DeviceTypeEntry {
    fn nm_type_code(&self) -> u32 {
        self.code
    }

    fn display_name(&self) -> &'static str {
        self.name
    }

    fn connection_type(&self) -> &'static str {
        self.connection_type
    }

    fn wrap(&self, handle: ObjectHandle) -> Device {
        (self.wrap)(handle)
    }
}

fn wrap<T>(handle: ObjectHandle) -> Device
where
    T: From<ObjectHandle> + Into<Device>,
{
    T::from(handle).into()
}

static ENTRIES: &[DeviceTypeEntry] = &[
    DeviceTypeEntry {
        code: device_type::ETHERNET,
        name: "Ethernet",
        connection_type: "802-3-ethernet",
        wrap: wrap::<WiredDevice>,
    },
    DeviceTypeEntry {
        code: device_type::WIFI,
        name: "Wi-Fi",
        connection_type: "802-11-wireless",
        wrap: wrap::<WirelessDevice>,
    },
    DeviceTypeEntry {
        code: device_type::BLUETOOTH,
        name: "Bluetooth",
        connection_type: "bluetooth",
        wrap: wrap::<BluetoothDevice>,
    },
    DeviceTypeEntry {
        code: device_type::MODEM,
        name: "Modem",
        connection_type: "gsm",
        wrap: wrap::<ModemDevice>,
    },
    DeviceTypeEntry {
        code: device_type::BOND,
        name: "Bond",
        connection_type: "bond",
        wrap: wrap::<BondDevice>,
    },
    DeviceTypeEntry {
        code: device_type::VLAN,
        name: "VLAN",
        connection_type: "vlan",
        wrap: wrap::<VlanDevice>,
    },
    DeviceTypeEntry {
        code: device_type::BRIDGE,
        name: "Bridge",
        connection_type: "bridge",
        wrap: wrap::<BridgeDevice>,
    },
    DeviceTypeEntry {
        code: device_type::GENERIC,
        name: "Generic",
        connection_type: "generic",
        wrap: wrap::<GenericDevice>,
    },
    DeviceTypeEntry {
        code: device_type::TUN,
        name: "TUN",
        connection_type: "tun",
        wrap: wrap::<TunDevice>,
    },
    DeviceTypeEntry {
        code: device_type::IP_TUNNEL,
        name: "IP Tunnel",
        connection_type: "ip-tunnel",
        wrap: wrap::<IpTunnelDevice>,
    },
    DeviceTypeEntry {
        code: device_type::MACVLAN,
        name: "MACVLAN",
        connection_type: "macvlan",
        wrap: wrap::<MacvlanDevice>,
    },
    DeviceTypeEntry {
        code: device_type::VETH,
        name: "Veth",
        connection_type: "veth",
        wrap: wrap::<VethDevice>,
    },
    DeviceTypeEntry {
        code: device_type::DUMMY,
        name: "Dummy",
        connection_type: "dummy",
        wrap: wrap::<DummyDevice>,
    },
    DeviceTypeEntry {
        code: device_type::WIREGUARD,
        name: "WireGuard",
        connection_type: "wireguard",
        wrap: wrap::<WireGuardDevice>,
    },
    DeviceTypeEntry {
        code: device_type::WIFI_P2P,
        name: "Wi-Fi P2P",
        connection_type: "wifi-p2p",
        wrap: wrap::<WifiP2PDevice>,
    },
    DeviceTypeEntry {
        code: device_type::LOOPBACK,
        name: "Loopback",
        connection_type: "loopback",
        wrap: wrap::<LoopbackDevice>,
    },
];

/// Connection types that are valid for a registered device but not its
/// primary type.
static SECONDARY_CONNECTION_TYPES: &[&str] = &["cdma", "pppoe"];

/// Global registry of device types.
///
/// This registry maps NetworkManager type codes to device type information.
/// It's populated once at first access and remains immutable thereafter.
static DEVICE_TYPE_REGISTRY: OnceLock<HashMap<u32, &'static dyn DeviceTypeInfo>> = OnceLock::new();

/// Initializes and returns the device type registry.
fn registry() -> &'static HashMap<u32, &'static dyn DeviceTypeInfo> {
    DEVICE_TYPE_REGISTRY.get_or_init(|| {
        ENTRIES
            .iter()
            .map(|e| (e.code, e as &'static dyn DeviceTypeInfo))
            .collect()
    })
}

/// Looks up device type information by NetworkManager type code.
///
/// Returns `None` if the device type is not recognized.
pub fn get_device_type_info(code: u32) -> Option<&'static dyn DeviceTypeInfo> {
    registry().get(&code).copied()
}

/// Returns the display name for a device type code.
///
/// If the code is not recognized, returns a generic "Other(N)" string.
pub fn display_name_for_code(code: u32) -> String {
    get_device_type_info(code)
        .map(|info| info.display_name().to_string())
        .unwrap_or_else(|| format!("Other({})", code))
}

/// Returns the connection type string for a device type code.
pub fn connection_type_for_code(code: u32) -> Option<&'static str> {
    get_device_type_info(code).map(|info| info.connection_type())
}

/// Returns whether `ty` is a connection type of some registered device.
pub fn is_device_connection_type(ty: &str) -> bool {
    SECONDARY_CONNECTION_TYPES.contains(&ty)
        || registry().values().any(|info| info.connection_type() == ty)
}
