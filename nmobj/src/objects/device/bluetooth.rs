use crate::Result;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::bluetooth;

device_subtype! {
    /// A Bluetooth device providing DUN or PAN connectivity.
    BluetoothDevice => Bluetooth, bluetooth
}

impl BluetoothDevice {
    /// Bluetooth MAC address.
    pub fn hw_address(&self) -> Result<String> {
        self.core.handle().read(&bluetooth::HW_ADDRESS)
    }

    /// Bluetooth name of the device.
    pub fn name(&self) -> Result<String> {
        self.core.handle().read(&bluetooth::NAME)
    }

    /// Raw `NMBluetoothCapabilities`: 1 for DUN, 2 for NAP.
    pub fn bt_capabilities(&self) -> Result<u32> {
        self.core.handle().read(&bluetooth::BT_CAPABILITIES)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        b.field("HwAddress", self.hw_address())?
            .field("Name", self.name())?
            .field("BtCapabilities", self.bt_capabilities())?;
        Ok(())
    }
}
