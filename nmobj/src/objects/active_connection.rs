//! Active connections: a saved connection applied to one or more devices.

use zvariant::OwnedObjectPath;

use crate::Result;
use crate::api::models::{ActiveConnectionState, VpnConnectionState};
use crate::core::factory::{resolve_device, resolve_devices};
use crate::core::object::{NmObject, ObjectHandle, serialize_via_snapshot};
use crate::core::snapshot::{Snapshot, SnapshotBuilder, SnapshotPolicy};
use crate::objects::device::Device;
use crate::objects::ip_config::{DhcpConfig, IpConfig, IpFamily};
use crate::objects::settings::SettingsConnection;
use crate::types::schema::{Property, active_connection, vpn_connection};
use crate::util::utils::{path_string, path_strings};

/// The `org.freedesktop.NetworkManager.Connection.Active` interface.
///
/// Every active connection has these properties. Non-VPN connections are
/// exposed as this type directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveConnectionCore {
    handle: ObjectHandle,
}

impl ActiveConnectionCore {
    pub fn new(handle: ObjectHandle) -> Self {
        Self { handle }
    }

    pub(crate) fn into_handle(self) -> ObjectHandle {
        self.handle
    }

    /// The saved connection this was activated from.
    pub fn connection(&self) -> Result<Option<SettingsConnection>> {
        Ok(self
            .handle
            .read_path(&active_connection::CONNECTION)?
            .map(|p| SettingsConnection::new(self.handle.rebind(p))))
    }

    /// Type-specific object, e.g. the access point of a Wi-Fi connection.
    pub fn specific_object_path(&self) -> Result<Option<OwnedObjectPath>> {
        self.handle.read_path(&active_connection::SPECIFIC_OBJECT)
    }

    pub fn id(&self) -> Result<String> {
        self.handle.read(&active_connection::ID)
    }

    pub fn uuid(&self) -> Result<String> {
        self.handle.read(&active_connection::UUID)
    }

    /// Connection type, e.g. `802-11-wireless` or `vpn`. This is the
    /// factory's discriminator.
    pub fn connection_type(&self) -> Result<String> {
        self.handle.read(&active_connection::TYPE)
    }

    pub fn device_paths(&self) -> Result<Vec<OwnedObjectPath>> {
        self.handle.read(&active_connection::DEVICES)
    }

    /// Devices this connection is active on.
    pub fn devices(&self) -> Result<Vec<Device>> {
        resolve_devices(&self.handle, self.device_paths()?)
    }

    pub fn state(&self) -> Result<ActiveConnectionState> {
        self.handle
            .read::<u32>(&active_connection::STATE)
            .map(ActiveConnectionState::from)
    }

    /// Raw `NMActivationStateFlags`.
    pub fn state_flags(&self) -> Result<u32> {
        self.handle.read(&active_connection::STATE_FLAGS)
    }

    /// Whether this owns the default IPv4 route.
    pub fn default(&self) -> Result<bool> {
        self.handle.read(&active_connection::DEFAULT)
    }

    pub fn ip4_config(&self) -> Result<Option<IpConfig>> {
        Ok(self
            .handle
            .read_path(&active_connection::IP4_CONFIG)?
            .map(|p| IpConfig::new(self.handle.rebind(p), IpFamily::V4)))
    }

    pub fn dhcp4_config(&self) -> Result<Option<DhcpConfig>> {
        Ok(self
            .handle
            .read_path(&active_connection::DHCP4_CONFIG)?
            .map(|p| DhcpConfig::new(self.handle.rebind(p), IpFamily::V4)))
    }

    /// Whether this owns the default IPv6 route.
    pub fn default6(&self) -> Result<bool> {
        self.handle.read(&active_connection::DEFAULT6)
    }

    pub fn ip6_config(&self) -> Result<Option<IpConfig>> {
        Ok(self
            .handle
            .read_path(&active_connection::IP6_CONFIG)?
            .map(|p| IpConfig::new(self.handle.rebind(p), IpFamily::V6)))
    }

    pub fn dhcp6_config(&self) -> Result<Option<DhcpConfig>> {
        Ok(self
            .handle
            .read_path(&active_connection::DHCP6_CONFIG)?
            .map(|p| DhcpConfig::new(self.handle.rebind(p), IpFamily::V6)))
    }

    pub fn vpn(&self) -> Result<bool> {
        self.handle.read(&active_connection::VPN)
    }

    /// Controller device of a port connection.
    pub fn master(&self) -> Result<Option<Device>> {
        self.handle
            .read_path(&active_connection::MASTER)?
            .map(|p| resolve_device(self.handle.rebind(p)))
            .transpose()
    }

    fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        let h = &self.handle;
        let path = |p: &Property| h.read_path(p).map(path_string);
        b.field("Connection", path(&active_connection::CONNECTION))?
            .field("SpecificObject", path(&active_connection::SPECIFIC_OBJECT))?
            .field("Id", self.id())?
            .field("Uuid", self.uuid())?
            .field("Type", self.connection_type())?
            .field("Devices", self.device_paths().map(|p| path_strings(&p)))?
            .field("State", self.state().map(|s| s.to_string()))?
            .field("StateFlags", self.state_flags())?
            .field("Default", self.default())?
            .field("Ip4Config", path(&active_connection::IP4_CONFIG))?
            .field("Dhcp4Config", path(&active_connection::DHCP4_CONFIG))?
            .field("Default6", self.default6())?
            .field("Ip6Config", path(&active_connection::IP6_CONFIG))?
            .field("Dhcp6Config", path(&active_connection::DHCP6_CONFIG))?
            .field("Vpn", self.vpn())?
            .field("Master", path(&active_connection::MASTER))?;
        Ok(())
    }
}

impl NmObject for ActiveConnectionCore {
    fn handle(&self) -> &ObjectHandle {
        &self.handle
    }

    fn interface(&self) -> &'static str {
        active_connection::INTERFACE
    }

    fn schema(&self) -> &'static [&'static [Property]] {
        &[active_connection::ALL]
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

/// An active VPN connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VpnConnection {
    core: ActiveConnectionCore,
}

impl VpnConnection {
    /// Properties shared by all active connections.
    pub fn core(&self) -> &ActiveConnectionCore {
        &self.core
    }

    pub fn vpn_state(&self) -> Result<VpnConnectionState> {
        self.core
            .handle
            .read::<u32>(&vpn_connection::VPN_STATE)
            .map(VpnConnectionState::from)
    }

    /// Login banner sent by the VPN server.
    pub fn banner(&self) -> Result<String> {
        self.core.handle.read(&vpn_connection::BANNER)
    }
}

impl From<ObjectHandle> for VpnConnection {
    fn from(handle: ObjectHandle) -> Self {
        Self {
            core: ActiveConnectionCore::new(handle),
        }
    }
}

impl NmObject for VpnConnection {
    fn handle(&self) -> &ObjectHandle {
        &self.core.handle
    }

    fn interface(&self) -> &'static str {
        vpn_connection::INTERFACE
    }

    fn schema(&self) -> &'static [&'static [Property]] {
        &[active_connection::ALL, vpn_connection::ALL]
    }

    fn snapshot_policy(&self) -> SnapshotPolicy {
        SnapshotPolicy::FailFast
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let mut b = SnapshotBuilder::new(self.snapshot_policy());
        self.core.write_fields(&mut b)?;
        b.field("VpnState", self.vpn_state().map(|s| s.to_string()))?
            .field("Banner", self.banner())?;
        Ok(b.build())
    }
}

/// An active connection resolved by its `Type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActiveConnection {
    /// Any connection type carried by a device.
    Standard(ActiveConnectionCore),
    Vpn(VpnConnection),
}

impl ActiveConnection {
    /// Properties shared by all active connections.
    pub fn core(&self) -> &ActiveConnectionCore {
        match self {
            Self::Standard(c) => c,
            Self::Vpn(v) => v.core(),
        }
    }

    pub fn as_vpn(&self) -> Option<&VpnConnection> {
        match self {
            Self::Vpn(v) => Some(v),
            Self::Standard(_) => None,
        }
    }
}

impl NmObject for ActiveConnection {
    fn handle(&self) -> &ObjectHandle {
        self.core().handle()
    }

    fn interface(&self) -> &'static str {
        match self {
            Self::Standard(c) => c.interface(),
            Self::Vpn(v) => v.interface(),
        }
    }

    fn schema(&self) -> &'static [&'static [Property]] {
        match self {
            Self::Standard(c) => c.schema(),
            Self::Vpn(v) => v.schema(),
        }
    }

    fn snapshot_policy(&self) -> SnapshotPolicy {
        match self {
            Self::Standard(c) => c.snapshot_policy(),
            Self::Vpn(v) => v.snapshot_policy(),
        }
    }

    fn snapshot(&self) -> Result<Snapshot> {
        match self {
            Self::Standard(c) => c.snapshot(),
            Self::Vpn(v) => v.snapshot(),
        }
    }
}

serialize_via_snapshot!(ActiveConnectionCore, VpnConnection, ActiveConnection);
