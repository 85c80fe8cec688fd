use crate::Result;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::generic;

device_subtype! {
    /// A device NetworkManager knows only by name.
    GenericDevice => Generic, generic
}

impl GenericDevice {
    pub fn hw_address(&self) -> Result<String> {
        self.core.handle().read(&generic::HW_ADDRESS)
    }

    /// Kernel-provided description of the device type.
    pub fn type_description(&self) -> Result<String> {
        self.core.handle().read(&generic::TYPE_DESCRIPTION)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        b.field("HwAddress", self.hw_address())?
            .field("TypeDescription", self.type_description())?;
        Ok(())
    }
}
