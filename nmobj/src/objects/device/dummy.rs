use crate::Result;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::dummy;

device_subtype! {
    /// A dummy interface.
    DummyDevice => Dummy, dummy
}

impl DummyDevice {
    pub fn hw_address(&self) -> Result<String> {
        self.core.handle().read(&dummy::HW_ADDRESS)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        b.field("HwAddress", self.hw_address())?;
        Ok(())
    }
}
