use zvariant::OwnedObjectPath;

use super::{Device, nested_snapshots};
use crate::Result;
use crate::core::factory::resolve_devices;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::bridge;

device_subtype! {
    /// A bridge controller.
    ///
    /// The snapshot renders `Slaves` as the full snapshots of the enslaved
    /// devices. If any of them cannot be resolved the field is left out; if
    /// one resolves but its snapshot fails, so does the bridge's.
    BridgeDevice => Bridge, bridge
}

impl BridgeDevice {
    pub fn hw_address(&self) -> Result<String> {
        self.core.handle().read(&bridge::HW_ADDRESS)
    }

    pub fn slave_paths(&self) -> Result<Vec<OwnedObjectPath>> {
        self.core.handle().read(&bridge::SLAVES)
    }

    /// Enslaved devices, each resolved to its concrete type.
    ///
    /// Deprecated upstream in favour of [`DeviceCore::ports`](super::DeviceCore::ports).
    pub fn slaves(&self) -> Result<Vec<Device>> {
        resolve_devices(self.core.handle(), self.slave_paths()?)
    }

    /// Deprecated upstream; check the carrier bit of
    /// [`DeviceCore::interface_flags`](super::DeviceCore::interface_flags).
    pub fn carrier(&self) -> Result<bool> {
        self.core.handle().read(&bridge::CARRIER)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        b.field("HwAddress", self.hw_address())?
            .field("Slaves", nested_snapshots(self.slaves())?)?
            .field("Carrier", self.carrier())?;
        Ok(())
    }
}
