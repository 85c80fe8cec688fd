use crate::Result;
use crate::core::factory::resolve_device;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::macvlan;
use crate::util::utils::path_string;

use super::Device;

device_subtype! {
    /// A MACVLAN or MACVTAP interface.
    MacvlanDevice => Macvlan, macvlan
}

impl MacvlanDevice {
    pub fn parent(&self) -> Result<Option<Device>> {
        let handle = self.core.handle();
        handle
            .read_path(&macvlan::PARENT)?
            .map(|p| resolve_device(handle.rebind(p)))
            .transpose()
    }

    /// `"vepa"`, `"bridge"`, `"private"`, `"passthru"` or `"source"`.
    pub fn mode(&self) -> Result<String> {
        self.core.handle().read(&macvlan::MODE)
    }

    pub fn no_promisc(&self) -> Result<bool> {
        self.core.handle().read(&macvlan::NO_PROMISC)
    }

    /// True for MACVTAP.
    pub fn tap(&self) -> Result<bool> {
        self.core.handle().read(&macvlan::TAP)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        let parent = self.core.handle().read_path(&macvlan::PARENT).map(path_string);
        b.field("Parent", parent)?
            .field("Mode", self.mode())?
            .field("NoPromisc", self.no_promisc())?
            .field("Tap", self.tap())?;
        Ok(())
    }
}
