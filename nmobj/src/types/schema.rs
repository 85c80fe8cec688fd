//! Static property schema for the NetworkManager D-Bus interfaces.
//!
//! Each submodule describes one interface: its name, one [`Property`]
//! constant per readable property, and an `ALL` list in declaration order.
//! Both the typed accessors and the factory resolver read names and wire
//! types from here; no other module spells out an interface string.

use std::fmt::{Display, Formatter};

use crate::dbus::wire::WireType;

/// A read-only D-Bus property: interface, name and declared wire type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Property {
    /// Interface the property belongs to.
    pub interface: &'static str,
    /// Property name as published on the bus.
    pub name: &'static str,
    /// Wire type the remote value must carry.
    pub wire: WireType,
}

impl Property {
    /// Declares a property.
    pub const fn new(interface: &'static str, name: &'static str, wire: WireType) -> Self {
        Self {
            interface,
            name,
            wire,
        }
    }

    /// Interface-qualified name, e.g. `org.freedesktop.NetworkManager.AccessPoint.Ssid`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.interface, self.name)
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.interface, self.name)
    }
}

macro_rules! interface {
    (
        $(#[$meta:meta])*
        $module:ident = $iface:literal {
            $($konst:ident: $name:literal => $wire:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        pub mod $module {
            #[allow(unused_imports)]
            use super::{Property, WireType};

            /// D-Bus interface name.
            pub const INTERFACE: &str = $iface;

            $(
                #[doc = concat!("`", $name, "`")]
                pub const $konst: Property = Property::new(INTERFACE, $name, WireType::$wire);
            )*

            /// Every property of this interface, in declaration order.
            pub const ALL: &[Property] = &[$($konst),*];
        }
    };
}

interface! {
    /// `org.freedesktop.NetworkManager`, the manager root object.
    manager = "org.freedesktop.NetworkManager" {
        DEVICES: "Devices" => ObjectPathArray,
        ALL_DEVICES: "AllDevices" => ObjectPathArray,
        CHECKPOINTS: "Checkpoints" => ObjectPathArray,
        NETWORKING_ENABLED: "NetworkingEnabled" => Bool,
        WIRELESS_ENABLED: "WirelessEnabled" => Bool,
        WIRELESS_HARDWARE_ENABLED: "WirelessHardwareEnabled" => Bool,
        WWAN_ENABLED: "WwanEnabled" => Bool,
        WWAN_HARDWARE_ENABLED: "WwanHardwareEnabled" => Bool,
        ACTIVE_CONNECTIONS: "ActiveConnections" => ObjectPathArray,
        PRIMARY_CONNECTION: "PrimaryConnection" => ObjectPath,
        PRIMARY_CONNECTION_TYPE: "PrimaryConnectionType" => Str,
        METERED: "Metered" => UInt32,
        ACTIVATING_CONNECTION: "ActivatingConnection" => ObjectPath,
        STARTUP: "Startup" => Bool,
        VERSION: "Version" => Str,
        STATE: "State" => UInt32,
        CONNECTIVITY: "Connectivity" => UInt32,
        CONNECTIVITY_CHECK_AVAILABLE: "ConnectivityCheckAvailable" => Bool,
        CONNECTIVITY_CHECK_ENABLED: "ConnectivityCheckEnabled" => Bool,
        CONNECTIVITY_CHECK_URI: "ConnectivityCheckUri" => Str,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Settings`, the settings root object.
    settings = "org.freedesktop.NetworkManager.Settings" {
        CONNECTIONS: "Connections" => ObjectPathArray,
        HOSTNAME: "Hostname" => Str,
        CAN_MODIFY: "CanModify" => Bool,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Settings.Connection`, a saved profile.
    settings_connection = "org.freedesktop.NetworkManager.Settings.Connection" {
        UNSAVED: "Unsaved" => Bool,
        FLAGS: "Flags" => UInt32,
        FILENAME: "Filename" => Str,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.AccessPoint`
    access_point = "org.freedesktop.NetworkManager.AccessPoint" {
        FLAGS: "Flags" => UInt32,
        WPA_FLAGS: "WpaFlags" => UInt32,
        RSN_FLAGS: "RsnFlags" => UInt32,
        SSID: "Ssid" => ByteArray,
        FREQUENCY: "Frequency" => UInt32,
        HW_ADDRESS: "HwAddress" => Str,
        MODE: "Mode" => UInt32,
        MAX_BITRATE: "MaxBitrate" => UInt32,
        BANDWIDTH: "Bandwidth" => UInt32,
        STRENGTH: "Strength" => Byte,
        LAST_SEEN: "LastSeen" => Int32,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Connection.Active`
    active_connection = "org.freedesktop.NetworkManager.Connection.Active" {
        CONNECTION: "Connection" => ObjectPath,
        SPECIFIC_OBJECT: "SpecificObject" => ObjectPath,
        ID: "Id" => Str,
        UUID: "Uuid" => Str,
        TYPE: "Type" => Str,
        DEVICES: "Devices" => ObjectPathArray,
        STATE: "State" => UInt32,
        STATE_FLAGS: "StateFlags" => UInt32,
        DEFAULT: "Default" => Bool,
        IP4_CONFIG: "Ip4Config" => ObjectPath,
        DHCP4_CONFIG: "Dhcp4Config" => ObjectPath,
        DEFAULT6: "Default6" => Bool,
        IP6_CONFIG: "Ip6Config" => ObjectPath,
        DHCP6_CONFIG: "Dhcp6Config" => ObjectPath,
        VPN: "Vpn" => Bool,
        MASTER: "Master" => ObjectPath,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.VPN.Connection`
    vpn_connection = "org.freedesktop.NetworkManager.VPN.Connection" {
        VPN_STATE: "VpnState" => UInt32,
        BANNER: "Banner" => Str,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.IP4Config`
    ip4_config = "org.freedesktop.NetworkManager.IP4Config" {
        GATEWAY: "Gateway" => Str,
        DOMAINS: "Domains" => StrArray,
        SEARCHES: "Searches" => StrArray,
        DNS_OPTIONS: "DnsOptions" => StrArray,
        DNS_PRIORITY: "DnsPriority" => Int32,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.IP6Config`
    ip6_config = "org.freedesktop.NetworkManager.IP6Config" {
        GATEWAY: "Gateway" => Str,
        DOMAINS: "Domains" => StrArray,
        SEARCHES: "Searches" => StrArray,
        DNS_OPTIONS: "DnsOptions" => StrArray,
        DNS_PRIORITY: "DnsPriority" => Int32,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.DHCP4Config`
    dhcp4_config = "org.freedesktop.NetworkManager.DHCP4Config" {
        OPTIONS: "Options" => VariantMap,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.DHCP6Config`
    dhcp6_config = "org.freedesktop.NetworkManager.DHCP6Config" {
        OPTIONS: "Options" => VariantMap,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device`, shared by every device.
    device = "org.freedesktop.NetworkManager.Device" {
        UDI: "Udi" => Str,
        PATH: "Path" => Str,
        INTERFACE_NAME: "Interface" => Str,
        IP_INTERFACE: "IpInterface" => Str,
        DRIVER: "Driver" => Str,
        DRIVER_VERSION: "DriverVersion" => Str,
        FIRMWARE_VERSION: "FirmwareVersion" => Str,
        CAPABILITIES: "Capabilities" => UInt32,
        STATE: "State" => UInt32,
        ACTIVE_CONNECTION: "ActiveConnection" => ObjectPath,
        IP4_CONFIG: "Ip4Config" => ObjectPath,
        DHCP4_CONFIG: "Dhcp4Config" => ObjectPath,
        IP6_CONFIG: "Ip6Config" => ObjectPath,
        DHCP6_CONFIG: "Dhcp6Config" => ObjectPath,
        MANAGED: "Managed" => Bool,
        AUTOCONNECT: "Autoconnect" => Bool,
        FIRMWARE_MISSING: "FirmwareMissing" => Bool,
        NM_PLUGIN_MISSING: "NmPluginMissing" => Bool,
        DEVICE_TYPE: "DeviceType" => UInt32,
        AVAILABLE_CONNECTIONS: "AvailableConnections" => ObjectPathArray,
        PHYSICAL_PORT_ID: "PhysicalPortId" => Str,
        MTU: "Mtu" => UInt32,
        METERED: "Metered" => UInt32,
        REAL: "Real" => Bool,
        IP4_CONNECTIVITY: "Ip4Connectivity" => UInt32,
        IP6_CONNECTIVITY: "Ip6Connectivity" => UInt32,
        INTERFACE_FLAGS: "InterfaceFlags" => UInt32,
        HW_ADDRESS: "HwAddress" => Str,
        PORTS: "Ports" => ObjectPathArray,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Wired`
    wired = "org.freedesktop.NetworkManager.Device.Wired" {
        HW_ADDRESS: "HwAddress" => Str,
        PERM_HW_ADDRESS: "PermHwAddress" => Str,
        SPEED: "Speed" => UInt32,
        S390_SUBCHANNELS: "S390Subchannels" => StrArray,
        CARRIER: "Carrier" => Bool,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Wireless`
    wireless = "org.freedesktop.NetworkManager.Device.Wireless" {
        HW_ADDRESS: "HwAddress" => Str,
        PERM_HW_ADDRESS: "PermHwAddress" => Str,
        MODE: "Mode" => UInt32,
        BITRATE: "Bitrate" => UInt32,
        ACCESS_POINTS: "AccessPoints" => ObjectPathArray,
        ACTIVE_ACCESS_POINT: "ActiveAccessPoint" => ObjectPath,
        WIRELESS_CAPABILITIES: "WirelessCapabilities" => UInt32,
        LAST_SCAN: "LastScan" => Int64,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Bluetooth`
    bluetooth = "org.freedesktop.NetworkManager.Device.Bluetooth" {
        HW_ADDRESS: "HwAddress" => Str,
        NAME: "Name" => Str,
        BT_CAPABILITIES: "BtCapabilities" => UInt32,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Modem`
    modem = "org.freedesktop.NetworkManager.Device.Modem" {
        MODEM_CAPABILITIES: "ModemCapabilities" => UInt32,
        CURRENT_CAPABILITIES: "CurrentCapabilities" => UInt32,
        DEVICE_ID: "DeviceId" => Str,
        OPERATOR_CODE: "OperatorCode" => Str,
        APN: "Apn" => Str,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Bond`
    bond = "org.freedesktop.NetworkManager.Device.Bond" {
        HW_ADDRESS: "HwAddress" => Str,
        CARRIER: "Carrier" => Bool,
        SLAVES: "Slaves" => ObjectPathArray,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Vlan`
    vlan = "org.freedesktop.NetworkManager.Device.Vlan" {
        HW_ADDRESS: "HwAddress" => Str,
        CARRIER: "Carrier" => Bool,
        PARENT: "Parent" => ObjectPath,
        VLAN_ID: "VlanId" => UInt32,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Bridge`
    bridge = "org.freedesktop.NetworkManager.Device.Bridge" {
        HW_ADDRESS: "HwAddress" => Str,
        SLAVES: "Slaves" => ObjectPathArray,
        CARRIER: "Carrier" => Bool,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Generic`
    generic = "org.freedesktop.NetworkManager.Device.Generic" {
        HW_ADDRESS: "HwAddress" => Str,
        TYPE_DESCRIPTION: "TypeDescription" => Str,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Tun`
    tun = "org.freedesktop.NetworkManager.Device.Tun" {
        OWNER: "Owner" => Int64,
        GROUP: "Group" => Int64,
        MODE: "Mode" => Str,
        NO_PI: "NoPi" => Bool,
        VNET_HDR: "VnetHdr" => Bool,
        MULTI_QUEUE: "MultiQueue" => Bool,
        HW_ADDRESS: "HwAddress" => Str,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.IPTunnel`
    ip_tunnel = "org.freedesktop.NetworkManager.Device.IPTunnel" {
        MODE: "Mode" => UInt32,
        PARENT: "Parent" => ObjectPath,
        LOCAL: "Local" => Str,
        REMOTE: "Remote" => Str,
        TTL: "Ttl" => Byte,
        TOS: "Tos" => Byte,
        PATH_MTU_DISCOVERY: "PathMtuDiscovery" => Bool,
        INPUT_KEY: "InputKey" => Str,
        OUTPUT_KEY: "OutputKey" => Str,
        ENCAPSULATION_LIMIT: "EncapsulationLimit" => Byte,
        FLOW_LABEL: "FlowLabel" => UInt32,
        FLAGS: "Flags" => UInt32,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Macvlan`
    macvlan = "org.freedesktop.NetworkManager.Device.Macvlan" {
        PARENT: "Parent" => ObjectPath,
        MODE: "Mode" => Str,
        NO_PROMISC: "NoPromisc" => Bool,
        TAP: "Tap" => Bool,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Veth`
    veth = "org.freedesktop.NetworkManager.Device.Veth" {
        PEER: "Peer" => ObjectPath,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Dummy`
    dummy = "org.freedesktop.NetworkManager.Device.Dummy" {
        HW_ADDRESS: "HwAddress" => Str,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.WireGuard`
    wireguard = "org.freedesktop.NetworkManager.Device.WireGuard" {
        PUBLIC_KEY: "PublicKey" => ByteArray,
        LISTEN_PORT: "ListenPort" => UInt16,
        FW_MARK: "FwMark" => UInt32,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.WifiP2P`
    wifi_p2p = "org.freedesktop.NetworkManager.Device.WifiP2P" {
        HW_ADDRESS: "HwAddress" => Str,
        PEERS: "Peers" => ObjectPathArray,
    }
}

interface! {
    /// `org.freedesktop.NetworkManager.Device.Loopback`. No properties of its own.
    loopback = "org.freedesktop.NetworkManager.Device.Loopback" {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn access_point_declares_wire_types() {
        assert_eq!(access_point::SSID.wire, WireType::ByteArray);
        assert_eq!(access_point::STRENGTH.wire, WireType::Byte);
        assert_eq!(access_point::LAST_SEEN.wire, WireType::Int32);
        assert_eq!(access_point::ALL.len(), 11);
    }

    #[test]
    fn qualified_name_joins_interface_and_property() {
        assert_eq!(
            access_point::SSID.qualified_name(),
            "org.freedesktop.NetworkManager.AccessPoint.Ssid"
        );
        assert_eq!(
            bridge::SLAVES.to_string(),
            "org.freedesktop.NetworkManager.Device.Bridge.Slaves"
        );
    }

    #[test]
    fn device_interfaces_extend_the_base_interface() {
        for iface in [
            wired::INTERFACE,
            wireless::INTERFACE,
            bridge::INTERFACE,
            bond::INTERFACE,
            wireguard::INTERFACE,
            loopback::INTERFACE,
        ] {
            assert!(iface.starts_with(device::INTERFACE), "{iface}");
        }
    }

    #[test]
    fn property_names_are_unique_per_interface() {
        for all in [
            manager::ALL,
            access_point::ALL,
            active_connection::ALL,
            device::ALL,
            wireless::ALL,
            ip_tunnel::ALL,
        ] {
            let names: HashSet<_> = all.iter().map(|p| p.name).collect();
            assert_eq!(names.len(), all.len());
        }
    }

    #[test]
    fn all_lists_share_their_interface() {
        assert!(device::ALL.iter().all(|p| p.interface == device::INTERFACE));
        assert!(loopback::ALL.is_empty());
    }
}
