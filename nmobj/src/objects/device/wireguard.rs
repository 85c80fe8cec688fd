use crate::Result;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::wireguard;

device_subtype! {
    /// A WireGuard interface.
    WireGuardDevice => WireGuard, wireguard
}

impl WireGuardDevice {
    /// 32-byte Curve25519 public key.
    pub fn public_key(&self) -> Result<Vec<u8>> {
        self.core.handle().read(&wireguard::PUBLIC_KEY)
    }

    pub fn listen_port(&self) -> Result<u16> {
        self.core.handle().read(&wireguard::LISTEN_PORT)
    }

    /// Firewall mark; 0 if unset.
    pub fn fw_mark(&self) -> Result<u32> {
        self.core.handle().read(&wireguard::FW_MARK)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        b.field("PublicKey", self.public_key())?
            .field("ListenPort", self.listen_port())?
            .field("FwMark", self.fw_mark())?;
        Ok(())
    }
}
