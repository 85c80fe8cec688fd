use zvariant::OwnedObjectPath;

use crate::Result;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::wifi_p2p;
use crate::util::utils::path_strings;

device_subtype! {
    /// A Wi-Fi P2P (Wi-Fi Direct) device.
    WifiP2PDevice => WifiP2P, wifi_p2p
}

impl WifiP2PDevice {
    pub fn hw_address(&self) -> Result<String> {
        self.core.handle().read(&wifi_p2p::HW_ADDRESS)
    }

    /// Paths of visible P2P peers.
    pub fn peer_paths(&self) -> Result<Vec<OwnedObjectPath>> {
        self.core.handle().read(&wifi_p2p::PEERS)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        b.field("HwAddress", self.hw_address())?
            .field("Peers", self.peer_paths().map(|p| path_strings(&p)))?;
        Ok(())
    }
}
