use crate::Result;
use crate::core::factory::resolve_device;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::veth;
use crate::util::utils::path_string;

use super::Device;

device_subtype! {
    /// One end of a virtual Ethernet pair.
    VethDevice => Veth, veth
}

impl VethDevice {
    /// The other end of the pair.
    pub fn peer(&self) -> Result<Option<Device>> {
        let handle = self.core.handle();
        handle
            .read_path(&veth::PEER)?
            .map(|p| resolve_device(handle.rebind(p)))
            .transpose()
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        b.field("Peer", self.core.handle().read_path(&veth::PEER).map(path_string))?;
        Ok(())
    }
}
