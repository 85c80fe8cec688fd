use crate::Result;
use crate::core::factory::resolve_device;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::vlan;
use crate::util::utils::path_string;

use super::Device;

device_subtype! {
    /// An 802.1Q VLAN interface.
    VlanDevice => Vlan, vlan
}

impl VlanDevice {
    pub fn hw_address(&self) -> Result<String> {
        self.core.handle().read(&vlan::HW_ADDRESS)
    }

    pub fn carrier(&self) -> Result<bool> {
        self.core.handle().read(&vlan::CARRIER)
    }

    /// The device the VLAN sits on.
    pub fn parent(&self) -> Result<Option<Device>> {
        let handle = self.core.handle();
        handle
            .read_path(&vlan::PARENT)?
            .map(|p| resolve_device(handle.rebind(p)))
            .transpose()
    }

    pub fn vlan_id(&self) -> Result<u32> {
        self.core.handle().read(&vlan::VLAN_ID)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        let parent = self.core.handle().read_path(&vlan::PARENT).map(path_string);
        b.field("HwAddress", self.hw_address())?
            .field("Carrier", self.carrier())?
            .field("Parent", parent)?
            .field("VlanId", self.vlan_id())?;
        Ok(())
    }
}
