//! Constants for NetworkManager D-Bus addressing and interface values.
//!
//! These constants correspond to the names and numeric codes used by
//! NetworkManager's D-Bus API.

/// Well-known bus name of NetworkManager.
pub const NM_SERVICE: &str = "org.freedesktop.NetworkManager";

/// Object path of the manager root object.
pub const NM_PATH: &str = "/org/freedesktop/NetworkManager";

/// Object path of the settings root object.
pub const SETTINGS_PATH: &str = "/org/freedesktop/NetworkManager/Settings";

/// Object path NetworkManager uses for "no object".
pub const NULL_PATH: &str = "/";

/// NetworkManager device type constants (`NMDeviceType`).
pub mod device_type {
    pub const ETHERNET: u32 = 1;
    pub const WIFI: u32 = 2;
    pub const BLUETOOTH: u32 = 5;
    pub const MODEM: u32 = 8;
    pub const BOND: u32 = 10;
    pub const VLAN: u32 = 11;
    pub const BRIDGE: u32 = 13;
    pub const GENERIC: u32 = 14;
    pub const TUN: u32 = 16;
    pub const IP_TUNNEL: u32 = 17;
    pub const MACVLAN: u32 = 18;
    pub const VETH: u32 = 20;
    pub const DUMMY: u32 = 22;
    pub const WIREGUARD: u32 = 29;
    pub const WIFI_P2P: u32 = 30;
    pub const LOOPBACK: u32 = 32;
}

/// Connection type strings that are not tied to a device type.
pub mod connection_type {
    pub const VPN: &str = "vpn";
}

/// WiFi frequency constants (MHz)
pub mod frequency {
    pub const BAND_2_4_START: u32 = 2412;
    pub const BAND_2_4_END: u32 = 2472;
    pub const BAND_2_4_CH14: u32 = 2484;
    pub const BAND_5_START: u32 = 5150;
    pub const BAND_5_END: u32 = 5925;
    pub const BAND_5_BASE: u32 = 5000;
    pub const BAND_6_START: u32 = 5955;
    pub const BAND_6_END: u32 = 7115;
    pub const CHANNEL_SPACING: u32 = 5;
}
