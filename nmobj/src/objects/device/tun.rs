use crate::Result;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::tun;

device_subtype! {
    /// A TUN or TAP interface.
    TunDevice => Tun, tun
}

impl TunDevice {
    /// Owning uid; -1 if unset.
    pub fn owner(&self) -> Result<i64> {
        self.core.handle().read(&tun::OWNER)
    }

    /// Owning gid; -1 if unset.
    pub fn group(&self) -> Result<i64> {
        self.core.handle().read(&tun::GROUP)
    }

    /// `"tun"` or `"tap"`.
    pub fn mode(&self) -> Result<String> {
        self.core.handle().read(&tun::MODE)
    }

    pub fn no_pi(&self) -> Result<bool> {
        self.core.handle().read(&tun::NO_PI)
    }

    pub fn vnet_hdr(&self) -> Result<bool> {
        self.core.handle().read(&tun::VNET_HDR)
    }

    pub fn multi_queue(&self) -> Result<bool> {
        self.core.handle().read(&tun::MULTI_QUEUE)
    }

    pub fn hw_address(&self) -> Result<String> {
        self.core.handle().read(&tun::HW_ADDRESS)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        b.field("Owner", self.owner())?
            .field("Group", self.group())?
            .field("Mode", self.mode())?
            .field("NoPi", self.no_pi())?
            .field("VnetHdr", self.vnet_hdr())?
            .field("MultiQueue", self.multi_queue())?
            .field("HwAddress", self.hw_address())?;
        Ok(())
    }
}
