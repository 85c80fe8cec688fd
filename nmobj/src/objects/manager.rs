//! The NetworkManager root object.

use zvariant::OwnedObjectPath;

use crate::Result;
use crate::api::models::{ConnectivityState, NmState};
use crate::core::factory::{resolve_active_connection, resolve_active_connections, resolve_devices};
use crate::core::object::{NmObject, ObjectHandle, serialize_via_snapshot};
use crate::core::snapshot::{Snapshot, SnapshotBuilder, SnapshotPolicy};
use crate::objects::active_connection::ActiveConnection;
use crate::objects::device::Device;
use crate::types::schema::{Property, manager};
use crate::util::utils::{path_string, path_strings};

/// `/org/freedesktop/NetworkManager`: global state and the entry points to
/// devices and active connections.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkManagerObject {
    handle: ObjectHandle,
}

impl NetworkManagerObject {
    pub fn new(handle: ObjectHandle) -> Self {
        Self { handle }
    }

    /// Paths of realized devices.
    pub fn device_paths(&self) -> Result<Vec<OwnedObjectPath>> {
        self.handle.read(&manager::DEVICES)
    }

    /// Realized devices, each resolved to its concrete type.
    pub fn devices(&self) -> Result<Vec<Device>> {
        resolve_devices(&self.handle, self.device_paths()?)
    }

    pub fn all_device_paths(&self) -> Result<Vec<OwnedObjectPath>> {
        self.handle.read(&manager::ALL_DEVICES)
    }

    /// Realized and placeholder devices.
    pub fn all_devices(&self) -> Result<Vec<Device>> {
        resolve_devices(&self.handle, self.all_device_paths()?)
    }

    pub fn checkpoints(&self) -> Result<Vec<OwnedObjectPath>> {
        self.handle.read(&manager::CHECKPOINTS)
    }

    pub fn networking_enabled(&self) -> Result<bool> {
        self.handle.read(&manager::NETWORKING_ENABLED)
    }

    pub fn wireless_enabled(&self) -> Result<bool> {
        self.handle.read(&manager::WIRELESS_ENABLED)
    }

    /// State of the hardware rfkill switch.
    pub fn wireless_hardware_enabled(&self) -> Result<bool> {
        self.handle.read(&manager::WIRELESS_HARDWARE_ENABLED)
    }

    pub fn wwan_enabled(&self) -> Result<bool> {
        self.handle.read(&manager::WWAN_ENABLED)
    }

    pub fn wwan_hardware_enabled(&self) -> Result<bool> {
        self.handle.read(&manager::WWAN_HARDWARE_ENABLED)
    }

    pub fn active_connection_paths(&self) -> Result<Vec<OwnedObjectPath>> {
        self.handle.read(&manager::ACTIVE_CONNECTIONS)
    }

    pub fn active_connections(&self) -> Result<Vec<ActiveConnection>> {
        resolve_active_connections(&self.handle, self.active_connection_paths()?)
    }

    /// The connection owning the default route, if any.
    pub fn primary_connection(&self) -> Result<Option<ActiveConnection>> {
        self.handle
            .read_path(&manager::PRIMARY_CONNECTION)?
            .map(|p| resolve_active_connection(self.handle.rebind(p)))
            .transpose()
    }

    pub fn primary_connection_type(&self) -> Result<String> {
        self.handle.read(&manager::PRIMARY_CONNECTION_TYPE)
    }

    /// Raw `NMMetered` value of the primary connection.
    pub fn metered(&self) -> Result<u32> {
        self.handle.read(&manager::METERED)
    }

    /// The connection about to become primary, if any.
    pub fn activating_connection(&self) -> Result<Option<ActiveConnection>> {
        self.handle
            .read_path(&manager::ACTIVATING_CONNECTION)?
            .map(|p| resolve_active_connection(self.handle.rebind(p)))
            .transpose()
    }

    /// True while NetworkManager is still starting up.
    pub fn startup(&self) -> Result<bool> {
        self.handle.read(&manager::STARTUP)
    }

    pub fn version(&self) -> Result<String> {
        self.handle.read(&manager::VERSION)
    }

    pub fn state(&self) -> Result<NmState> {
        self.handle.read::<u32>(&manager::STATE).map(NmState::from)
    }

    pub fn connectivity(&self) -> Result<ConnectivityState> {
        self.handle
            .read::<u32>(&manager::CONNECTIVITY)
            .map(ConnectivityState::from)
    }

    pub fn connectivity_check_available(&self) -> Result<bool> {
        self.handle.read(&manager::CONNECTIVITY_CHECK_AVAILABLE)
    }

    pub fn connectivity_check_enabled(&self) -> Result<bool> {
        self.handle.read(&manager::CONNECTIVITY_CHECK_ENABLED)
    }

    pub fn connectivity_check_uri(&self) -> Result<String> {
        self.handle.read(&manager::CONNECTIVITY_CHECK_URI)
    }
}

impl NmObject for NetworkManagerObject {
    fn handle(&self) -> &ObjectHandle {
        &self.handle
    }

    fn interface(&self) -> &'static str {
        manager::INTERFACE
    }

    fn schema(&self) -> &'static [&'static [Property]] {
        &[manager::ALL]
    }

    fn snapshot_policy(&self) -> SnapshotPolicy {
        SnapshotPolicy::FailFast
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let h = &self.handle;
        let mut b = SnapshotBuilder::new(self.snapshot_policy());
        b.field("Devices", self.device_paths().map(|p| path_strings(&p)))?
            .field("AllDevices", self.all_device_paths().map(|p| path_strings(&p)))?
            .field("NetworkingEnabled", self.networking_enabled())?
            .field("WirelessEnabled", self.wireless_enabled())?
            .field("WirelessHardwareEnabled", self.wireless_hardware_enabled())?
            .field("WwanEnabled", self.wwan_enabled())?
            .field("WwanHardwareEnabled", self.wwan_hardware_enabled())?
            .field(
                "ActiveConnections",
                self.active_connection_paths().map(|p| path_strings(&p)),
            )?
            .field(
                "PrimaryConnection",
                h.read_path(&manager::PRIMARY_CONNECTION).map(path_string),
            )?
            .field("PrimaryConnectionType", self.primary_connection_type())?
            .field("Metered", self.metered())?
            .field(
                "ActivatingConnection",
                h.read_path(&manager::ACTIVATING_CONNECTION).map(path_string),
            )?
            .field("Startup", self.startup())?
            .field("Version", self.version())?
            .field("State", self.state().map(|s| s.to_string()))?
            .field("Connectivity", self.connectivity().map(|c| c.to_string()))?;
        Ok(b.build())
    }
}

serialize_via_snapshot!(NetworkManagerObject);
