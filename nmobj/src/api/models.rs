use bitflags::bitflags;
use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::dbus::wire::WireType;
use crate::types::device_type_registry::{connection_type_for_code, display_name_for_code};

/// NetworkManager device types (`NMDeviceType`).
///
/// Codes without a variant of their own are kept in [`DeviceType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Ethernet,
    Wifi,
    Bluetooth,
    Modem,
    Bond,
    Vlan,
    Bridge,
    Generic,
    Tun,
    IpTunnel,
    Macvlan,
    Veth,
    Dummy,
    WireGuard,
    WifiP2P,
    Loopback,
    Other(u32),
}

impl DeviceType {
    /// The raw NetworkManager type code.
    pub fn code(self) -> u32 {
        use crate::types::constants::device_type::*;
        match self {
            Self::Ethernet => ETHERNET,
            Self::Wifi => WIFI,
            Self::Bluetooth => BLUETOOTH,
            Self::Modem => MODEM,
            Self::Bond => BOND,
            Self::Vlan => VLAN,
            Self::Bridge => BRIDGE,
            Self::Generic => GENERIC,
            Self::Tun => TUN,
            Self::IpTunnel => IP_TUNNEL,
            Self::Macvlan => MACVLAN,
            Self::Veth => VETH,
            Self::Dummy => DUMMY,
            Self::WireGuard => WIREGUARD,
            Self::WifiP2P => WIFI_P2P,
            Self::Loopback => LOOPBACK,
            Self::Other(v) => v,
        }
    }

    /// The connection type NetworkManager uses for this device type, e.g.
    /// `"802-11-wireless"`. `None` for types without a wrapper.
    pub fn connection_type(self) -> Option<&'static str> {
        connection_type_for_code(self.code())
    }
}

impl From<u32> for DeviceType {
    fn from(value: u32) -> Self {
        use crate::types::constants::device_type::*;
        match value {
            ETHERNET => Self::Ethernet,
            WIFI => Self::Wifi,
            BLUETOOTH => Self::Bluetooth,
            MODEM => Self::Modem,
            BOND => Self::Bond,
            VLAN => Self::Vlan,
            BRIDGE => Self::Bridge,
            GENERIC => Self::Generic,
            TUN => Self::Tun,
            IP_TUNNEL => Self::IpTunnel,
            MACVLAN => Self::Macvlan,
            VETH => Self::Veth,
            DUMMY => Self::Dummy,
            WIREGUARD => Self::WireGuard,
            WIFI_P2P => Self::WifiP2P,
            LOOPBACK => Self::Loopback,
            v => Self::Other(v),
        }
    }
}

impl Display for DeviceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&display_name_for_code(self.code()))
    }
}

/// NetworkManager device states (`NMDeviceState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    Unknown,
    Unmanaged,
    Unavailable,
    Disconnected,
    Prepare,
    Config,
    NeedAuth,
    IpConfig,
    IpCheck,
    Secondaries,
    Activated,
    Deactivating,
    Failed,
    Other(u32),
}

impl From<u32> for DeviceState {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::Unknown,
            10 => Self::Unmanaged,
            20 => Self::Unavailable,
            30 => Self::Disconnected,
            40 => Self::Prepare,
            50 => Self::Config,
            60 => Self::NeedAuth,
            70 => Self::IpConfig,
            80 => Self::IpCheck,
            90 => Self::Secondaries,
            100 => Self::Activated,
            110 => Self::Deactivating,
            120 => Self::Failed,
            v => Self::Other(v),
        }
    }
}

impl Display for DeviceState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Unmanaged => write!(f, "Unmanaged"),
            Self::Unavailable => write!(f, "Unavailable"),
            Self::Disconnected => write!(f, "Disconnected"),
            Self::Prepare => write!(f, "Preparing"),
            Self::Config => write!(f, "Configuring"),
            Self::NeedAuth => write!(f, "Needs authentication"),
            Self::IpConfig => write!(f, "Requesting IP configuration"),
            Self::IpCheck => write!(f, "Checking IP connectivity"),
            Self::Secondaries => write!(f, "Waiting for secondaries"),
            Self::Activated => write!(f, "Activated"),
            Self::Deactivating => write!(f, "Deactivating"),
            Self::Failed => write!(f, "Failed"),
            Self::Other(v) => write!(f, "Other({v})"),
        }
    }
}

/// Wi-Fi operating mode (`NM80211Mode`).
///
/// Used by both access points and wireless devices.
///
/// `Display` renders the short names `Unknown`, `Adhoc`, `Infra`, `AP` and
/// `Mesh`, and `Other(n)` for any other value. These are the names snapshots
/// carry. Bindings that print the C enumerator names (`NM_802_11_MODE_INFRA`,
/// or `Nm80211ModeInfra` in the Go binding) render differently, so compare
/// against these strings, not those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nm80211Mode {
    /// Mode is unknown.
    Unknown,
    /// Ad-hoc (IBSS) network.
    Adhoc,
    /// Infrastructure network, the usual client/AP setup.
    Infra,
    /// The device is acting as an access point.
    Ap,
    /// 802.11s mesh network.
    Mesh,
    /// Mode code not mapped to a specific variant.
    Other(u32),
}

impl From<u32> for Nm80211Mode {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Adhoc,
            2 => Self::Infra,
            3 => Self::Ap,
            4 => Self::Mesh,
            v => Self::Other(v),
        }
    }
}

impl Display for Nm80211Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Adhoc => write!(f, "Adhoc"),
            Self::Infra => write!(f, "Infra"),
            Self::Ap => write!(f, "AP"),
            Self::Mesh => write!(f, "Mesh"),
            Self::Other(v) => write!(f, "Other({v})"),
        }
    }
}

/// Overall networking state of the host (`NMState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NmState {
    Unknown,
    Asleep,
    Disconnected,
    Disconnecting,
    Connecting,
    ConnectedLocal,
    ConnectedSite,
    ConnectedGlobal,
    Other(u32),
}

impl From<u32> for NmState {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            10 => Self::Asleep,
            20 => Self::Disconnected,
            30 => Self::Disconnecting,
            40 => Self::Connecting,
            50 => Self::ConnectedLocal,
            60 => Self::ConnectedSite,
            70 => Self::ConnectedGlobal,
            v => Self::Other(v),
        }
    }
}

impl Display for NmState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Asleep => write!(f, "Asleep"),
            Self::Disconnected => write!(f, "Disconnected"),
            Self::Disconnecting => write!(f, "Disconnecting"),
            Self::Connecting => write!(f, "Connecting"),
            Self::ConnectedLocal => write!(f, "ConnectedLocal"),
            Self::ConnectedSite => write!(f, "ConnectedSite"),
            Self::ConnectedGlobal => write!(f, "ConnectedGlobal"),
            Self::Other(v) => write!(f, "Other({v})"),
        }
    }
}

/// Result of NetworkManager's connectivity check (`NMConnectivityState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityState {
    Unknown,
    None,
    /// Behind a captive portal.
    Portal,
    Limited,
    Full,
    Other(u32),
}

impl From<u32> for ConnectivityState {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::None,
            2 => Self::Portal,
            3 => Self::Limited,
            4 => Self::Full,
            v => Self::Other(v),
        }
    }
}

impl Display for ConnectivityState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::None => write!(f, "None"),
            Self::Portal => write!(f, "Portal"),
            Self::Limited => write!(f, "Limited"),
            Self::Full => write!(f, "Full"),
            Self::Other(v) => write!(f, "Other({v})"),
        }
    }
}

/// NetworkManager active connection state.
///
/// These values represent the lifecycle states of an active connection
/// as reported by the NM D-Bus API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveConnectionState {
    /// Connection state is unknown.
    Unknown,
    /// Connection is activating (connecting).
    Activating,
    /// Connection is fully activated (connected).
    Activated,
    /// Connection is deactivating (disconnecting).
    Deactivating,
    /// Connection is fully deactivated (disconnected).
    Deactivated,
    /// Unknown state code not mapped to a specific variant.
    Other(u32),
}

impl From<u32> for ActiveConnectionState {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Activating,
            2 => Self::Activated,
            3 => Self::Deactivating,
            4 => Self::Deactivated,
            v => Self::Other(v),
        }
    }
}

impl Display for ActiveConnectionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Activating => write!(f, "activating"),
            Self::Activated => write!(f, "activated"),
            Self::Deactivating => write!(f, "deactivating"),
            Self::Deactivated => write!(f, "deactivated"),
            Self::Other(v) => write!(f, "unknown state ({v})"),
        }
    }
}

/// VPN plugin connection state (`NMVpnConnectionState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VpnConnectionState {
    Unknown,
    Prepare,
    NeedAuth,
    Connect,
    IpConfigGet,
    Activated,
    Failed,
    Disconnected,
    Other(u32),
}

impl From<u32> for VpnConnectionState {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Prepare,
            2 => Self::NeedAuth,
            3 => Self::Connect,
            4 => Self::IpConfigGet,
            5 => Self::Activated,
            6 => Self::Failed,
            7 => Self::Disconnected,
            v => Self::Other(v),
        }
    }
}

impl Display for VpnConnectionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Prepare => write!(f, "preparing"),
            Self::NeedAuth => write!(f, "needs authentication"),
            Self::Connect => write!(f, "connecting"),
            Self::IpConfigGet => write!(f, "getting IP configuration"),
            Self::Activated => write!(f, "activated"),
            Self::Failed => write!(f, "failed"),
            Self::Disconnected => write!(f, "disconnected"),
            Self::Other(v) => write!(f, "unknown state ({v})"),
        }
    }
}

bitflags! {
    /// General access point capabilities (`NM80211ApFlags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ApFlags: u32 {
        /// Privacy (WEP or better) is required.
        const PRIVACY = 0x0000_0001;
        /// Wi-Fi Protected Setup is supported.
        const WPS = 0x0000_0002;
        /// Push-button WPS.
        const WPS_PBC = 0x0000_0004;
        /// PIN-based WPS.
        const WPS_PIN = 0x0000_0008;
    }

    /// WPA/RSN security capabilities (`NM80211ApSecurityFlags`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ApSecurityFlags: u32 {
        const PAIR_WEP40 = 0x0000_0001;
        const PAIR_WEP104 = 0x0000_0002;
        const PAIR_TKIP = 0x0000_0004;
        const PAIR_CCMP = 0x0000_0008;
        const GROUP_WEP40 = 0x0000_0010;
        const GROUP_WEP104 = 0x0000_0020;
        const GROUP_TKIP = 0x0000_0040;
        const GROUP_CCMP = 0x0000_0080;
        /// Pre-shared key authentication.
        const KEY_MGMT_PSK = 0x0000_0100;
        /// 802.1X (enterprise) authentication.
        const KEY_MGMT_802_1X = 0x0000_0200;
        /// WPA3 personal.
        const KEY_MGMT_SAE = 0x0000_0400;
        const KEY_MGMT_OWE = 0x0000_0800;
        const KEY_MGMT_OWE_TM = 0x0000_1000;
        const KEY_MGMT_EAP_SUITE_B_192 = 0x0000_2000;
    }

    /// Wireless device capabilities (`NMDeviceWifiCapabilities`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WifiCapabilities: u32 {
        const CIPHER_WEP40 = 0x0000_0001;
        const CIPHER_WEP104 = 0x0000_0002;
        const CIPHER_TKIP = 0x0000_0004;
        const CIPHER_CCMP = 0x0000_0008;
        const WPA = 0x0000_0010;
        const RSN = 0x0000_0020;
        const AP = 0x0000_0040;
        const ADHOC = 0x0000_0080;
        const FREQ_VALID = 0x0000_0100;
        const FREQ_2GHZ = 0x0000_0200;
        const FREQ_5GHZ = 0x0000_0400;
        const FREQ_6GHZ = 0x0000_0800;
        const MESH = 0x0000_1000;
        const IBSS_RSN = 0x0000_2000;
    }

    /// Generic device capabilities (`NMDeviceCapabilities`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DeviceCapabilities: u32 {
        const NM_SUPPORTED = 0x0000_0001;
        const CARRIER_DETECT = 0x0000_0002;
        const IS_SOFTWARE = 0x0000_0004;
        const SRIOV = 0x0000_0008;
    }
}

impl ApSecurityFlags {
    /// True if any key management suite is advertised.
    pub fn secured(self) -> bool {
        self.intersects(
            Self::KEY_MGMT_PSK
                | Self::KEY_MGMT_802_1X
                | Self::KEY_MGMT_SAE
                | Self::KEY_MGMT_OWE
                | Self::KEY_MGMT_EAP_SUITE_B_192,
        )
    }

    /// True for pre-shared key networks (WPA-PSK or SAE).
    pub fn is_psk(self) -> bool {
        self.intersects(Self::KEY_MGMT_PSK | Self::KEY_MGMT_SAE)
    }

    /// True for enterprise networks.
    pub fn is_eap(self) -> bool {
        self.intersects(Self::KEY_MGMT_802_1X | Self::KEY_MGMT_EAP_SUITE_B_192)
    }
}

/// Errors that can occur while reading NetworkManager objects.
///
/// Errors are returned exactly as they occurred; nothing in this crate
/// retries or adds context.
///
/// # Examples
///
/// ```no_run
/// use nmobj::{NetworkManager, NmError};
///
/// # fn example() -> nmobj::Result<()> {
/// let nm = NetworkManager::new()?;
///
/// match nm.devices() {
///     Ok(devices) => println!("{} devices", devices.len()),
///     Err(NmError::UnsupportedVariant { value, path, .. }) => {
///         eprintln!("{path} has a device type this crate does not know: {value}");
///     }
///     Err(e) => return Err(e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Error)]
pub enum NmError {
    /// The remote call failed: bus unavailable, object gone, access denied.
    #[error("D-Bus error: {0}")]
    Transport(#[from] zbus::Error),

    /// The remote value's type differs from the declared wire type.
    #[error("type mismatch for {property}: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        /// Interface-qualified property name.
        property: String,
        /// Declared wire type.
        expected: WireType,
        /// Signature of the value actually received.
        found: String,
    },

    /// A discriminator read from the remote object has no known wrapper type.
    #[error("unsupported {discriminator} `{value}` for {path}")]
    UnsupportedVariant {
        /// Which property acted as the discriminator.
        discriminator: &'static str,
        /// The value that was read.
        value: String,
        /// Object path that could not be resolved.
        path: String,
    },

    /// A snapshot could not be rendered as JSON text.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_type_round_trips_codes() {
        for code in [1u32, 2, 5, 8, 10, 11, 13, 14, 16, 17, 18, 20, 22, 29, 30, 32] {
            let ty = DeviceType::from(code);
            assert!(!matches!(ty, DeviceType::Other(_)), "code {code}");
            assert_eq!(ty.code(), code);
        }
        assert_eq!(DeviceType::from(24), DeviceType::Other(24));
        assert_eq!(DeviceType::Other(24).code(), 24);
    }

    #[test]
    fn device_type_connection_type() {
        assert_eq!(DeviceType::Wifi.connection_type(), Some("802-11-wireless"));
        assert_eq!(DeviceType::Ethernet.connection_type(), Some("802-3-ethernet"));
        assert_eq!(DeviceType::Other(24).connection_type(), None);
    }

    #[test]
    fn device_type_display() {
        assert_eq!(DeviceType::Ethernet.to_string(), "Ethernet");
        assert_eq!(DeviceType::Wifi.to_string(), "Wi-Fi");
        assert_eq!(DeviceType::WifiP2P.to_string(), "Wi-Fi P2P");
        assert_eq!(DeviceType::Bridge.to_string(), "Bridge");
        assert_eq!(DeviceType::Other(42).to_string(), "Other(42)");
    }

    #[test]
    fn device_state_from_u32_all_variants() {
        assert_eq!(DeviceState::from(0), DeviceState::Unknown);
        assert_eq!(DeviceState::from(10), DeviceState::Unmanaged);
        assert_eq!(DeviceState::from(20), DeviceState::Unavailable);
        assert_eq!(DeviceState::from(30), DeviceState::Disconnected);
        assert_eq!(DeviceState::from(40), DeviceState::Prepare);
        assert_eq!(DeviceState::from(50), DeviceState::Config);
        assert_eq!(DeviceState::from(60), DeviceState::NeedAuth);
        assert_eq!(DeviceState::from(70), DeviceState::IpConfig);
        assert_eq!(DeviceState::from(80), DeviceState::IpCheck);
        assert_eq!(DeviceState::from(90), DeviceState::Secondaries);
        assert_eq!(DeviceState::from(100), DeviceState::Activated);
        assert_eq!(DeviceState::from(110), DeviceState::Deactivating);
        assert_eq!(DeviceState::from(120), DeviceState::Failed);
        assert_eq!(DeviceState::from(7), DeviceState::Other(7));
    }

    #[test]
    fn device_state_display() {
        assert_eq!(DeviceState::Prepare.to_string(), "Preparing");
        assert_eq!(DeviceState::Config.to_string(), "Configuring");
        assert_eq!(DeviceState::Activated.to_string(), "Activated");
        assert_eq!(DeviceState::Other(99).to_string(), "Other(99)");
    }

    #[test]
    fn wifi_mode_names() {
        assert_eq!(Nm80211Mode::from(2), Nm80211Mode::Infra);
        assert_eq!(Nm80211Mode::from(2).to_string(), "Infra");
        assert_eq!(Nm80211Mode::from(1).to_string(), "Adhoc");
        assert_eq!(Nm80211Mode::from(3).to_string(), "AP");
        assert_eq!(Nm80211Mode::from(4).to_string(), "Mesh");
        assert_eq!(Nm80211Mode::from(0).to_string(), "Unknown");
        assert_eq!(Nm80211Mode::from(9).to_string(), "Other(9)");
    }

    #[test]
    fn nm_state_and_connectivity() {
        assert_eq!(NmState::from(70), NmState::ConnectedGlobal);
        assert_eq!(NmState::from(70).to_string(), "ConnectedGlobal");
        assert_eq!(NmState::from(15), NmState::Other(15));
        assert_eq!(ConnectivityState::from(2), ConnectivityState::Portal);
        assert_eq!(ConnectivityState::from(4).to_string(), "Full");
    }

    #[test]
    fn active_connection_state_from_u32() {
        assert_eq!(ActiveConnectionState::from(0), ActiveConnectionState::Unknown);
        assert_eq!(ActiveConnectionState::from(2), ActiveConnectionState::Activated);
        assert_eq!(ActiveConnectionState::from(4), ActiveConnectionState::Deactivated);
        assert_eq!(ActiveConnectionState::from(99), ActiveConnectionState::Other(99));
        assert_eq!(ActiveConnectionState::Other(7).to_string(), "unknown state (7)");
    }

    #[test]
    fn vpn_state_display() {
        assert_eq!(VpnConnectionState::from(5), VpnConnectionState::Activated);
        assert_eq!(VpnConnectionState::from(2).to_string(), "needs authentication");
    }

    #[test]
    fn security_flags_classification() {
        let psk = ApSecurityFlags::from_bits_truncate(0x0188);
        assert!(psk.secured());
        assert!(psk.is_psk());
        assert!(!psk.is_eap());

        let eap = ApSecurityFlags::KEY_MGMT_802_1X | ApSecurityFlags::PAIR_CCMP;
        assert!(eap.is_eap());

        assert!(!ApSecurityFlags::empty().secured());
    }

    #[test]
    fn error_display() {
        let err = NmError::TypeMismatch {
            property: "org.freedesktop.NetworkManager.AccessPoint.Strength".into(),
            expected: WireType::Byte,
            found: "u".into(),
        };
        assert_eq!(
            err.to_string(),
            "type mismatch for org.freedesktop.NetworkManager.AccessPoint.Strength: expected `y`, found `u`"
        );

        let err = NmError::UnsupportedVariant {
            discriminator: "device type",
            value: "24".into(),
            path: "/org/freedesktop/NetworkManager/Devices/7".into(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported device type `24` for /org/freedesktop/NetworkManager/Devices/7"
        );

        let err = NmError::from(zbus::Error::Failure("boom".into()));
        assert!(err.to_string().starts_with("D-Bus error"));
    }
}
