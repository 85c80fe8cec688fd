use crate::Result;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::wired;

device_subtype! {
    /// An Ethernet device.
    WiredDevice => Wired, wired
}

impl WiredDevice {
    /// Active hardware address.
    pub fn hw_address(&self) -> Result<String> {
        self.core.handle().read(&wired::HW_ADDRESS)
    }

    /// Permanent hardware address.
    pub fn perm_hw_address(&self) -> Result<String> {
        self.core.handle().read(&wired::PERM_HW_ADDRESS)
    }

    /// Link speed in Mb/s; 0 if unknown.
    pub fn speed(&self) -> Result<u32> {
        self.core.handle().read(&wired::SPEED)
    }

    /// IBM s390 subchannels; empty elsewhere.
    pub fn s390_subchannels(&self) -> Result<Vec<String>> {
        self.core.handle().read(&wired::S390_SUBCHANNELS)
    }

    /// Whether a cable is plugged in.
    pub fn carrier(&self) -> Result<bool> {
        self.core.handle().read(&wired::CARRIER)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        b.field("HwAddress", self.hw_address())?
            .field("PermHwAddress", self.perm_hw_address())?
            .field("Speed", self.speed())?
            .field("S390Subchannels", self.s390_subchannels())?
            .field("Carrier", self.carrier())?;
        Ok(())
    }
}
