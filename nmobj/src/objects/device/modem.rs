use crate::Result;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::modem;

device_subtype! {
    /// A mobile broadband modem.
    ModemDevice => Modem, modem
}

impl ModemDevice {
    /// Raw `NMDeviceModemCapabilities` the modem supports.
    pub fn modem_capabilities(&self) -> Result<u32> {
        self.core.handle().read(&modem::MODEM_CAPABILITIES)
    }

    /// Capabilities usable without a firmware reload.
    pub fn current_capabilities(&self) -> Result<u32> {
        self.core.handle().read(&modem::CURRENT_CAPABILITIES)
    }

    pub fn device_id(&self) -> Result<String> {
        self.core.handle().read(&modem::DEVICE_ID)
    }

    /// MCC and MNC of the current network.
    pub fn operator_code(&self) -> Result<String> {
        self.core.handle().read(&modem::OPERATOR_CODE)
    }

    pub fn apn(&self) -> Result<String> {
        self.core.handle().read(&modem::APN)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        b.field("ModemCapabilities", self.modem_capabilities())?
            .field("CurrentCapabilities", self.current_capabilities())?
            .field("DeviceId", self.device_id())?
            .field("OperatorCode", self.operator_code())?
            .field("Apn", self.apn())?;
        Ok(())
    }
}
