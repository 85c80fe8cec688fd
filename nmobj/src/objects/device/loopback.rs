use crate::Result;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;

device_subtype! {
    /// The loopback interface. It has no properties beyond the shared ones.
    LoopbackDevice => Loopback, loopback
}

impl LoopbackDevice {
    pub(crate) fn write_fields(&self, _b: &mut SnapshotBuilder) -> Result<()> {
        Ok(())
    }
}
