use zvariant::OwnedObjectPath;

use super::{Device, nested_snapshots};
use crate::Result;
use crate::core::factory::resolve_devices;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::bond;

device_subtype! {
    /// A bonding controller.
    BondDevice => Bond, bond
}

impl BondDevice {
    pub fn hw_address(&self) -> Result<String> {
        self.core.handle().read(&bond::HW_ADDRESS)
    }

    pub fn carrier(&self) -> Result<bool> {
        self.core.handle().read(&bond::CARRIER)
    }

    pub fn slave_paths(&self) -> Result<Vec<OwnedObjectPath>> {
        self.core.handle().read(&bond::SLAVES)
    }

    /// Devices enslaved to this bond, each resolved to its concrete type.
    ///
    /// Deprecated upstream in favour of [`DeviceCore::ports`](super::DeviceCore::ports).
    pub fn slaves(&self) -> Result<Vec<Device>> {
        resolve_devices(self.core.handle(), self.slave_paths()?)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        b.field("HwAddress", self.hw_address())?
            .field("Carrier", self.carrier())?
            .field("Slaves", nested_snapshots(self.slaves())?)?;
        Ok(())
    }
}
