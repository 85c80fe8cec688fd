use crate::Result;
use crate::core::factory::resolve_device;
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::types::schema::ip_tunnel;
use crate::util::utils::path_string;

use super::Device;

device_subtype! {
    /// An IP-in-IP, GRE, SIT or similar tunnel.
    IpTunnelDevice => IpTunnel, ip_tunnel
}

impl IpTunnelDevice {
    /// Raw `NMIPTunnelMode`.
    pub fn mode(&self) -> Result<u32> {
        self.core.handle().read(&ip_tunnel::MODE)
    }

    /// The device the tunnel is bound to, if any.
    pub fn parent(&self) -> Result<Option<Device>> {
        let handle = self.core.handle();
        handle
            .read_path(&ip_tunnel::PARENT)?
            .map(|p| resolve_device(handle.rebind(p)))
            .transpose()
    }

    pub fn local(&self) -> Result<String> {
        self.core.handle().read(&ip_tunnel::LOCAL)
    }

    pub fn remote(&self) -> Result<String> {
        self.core.handle().read(&ip_tunnel::REMOTE)
    }

    pub fn ttl(&self) -> Result<u8> {
        self.core.handle().read(&ip_tunnel::TTL)
    }

    pub fn tos(&self) -> Result<u8> {
        self.core.handle().read(&ip_tunnel::TOS)
    }

    pub fn path_mtu_discovery(&self) -> Result<bool> {
        self.core.handle().read(&ip_tunnel::PATH_MTU_DISCOVERY)
    }

    pub fn input_key(&self) -> Result<String> {
        self.core.handle().read(&ip_tunnel::INPUT_KEY)
    }

    pub fn output_key(&self) -> Result<String> {
        self.core.handle().read(&ip_tunnel::OUTPUT_KEY)
    }

    /// IPv6 only.
    pub fn encapsulation_limit(&self) -> Result<u8> {
        self.core.handle().read(&ip_tunnel::ENCAPSULATION_LIMIT)
    }

    /// IPv6 only.
    pub fn flow_label(&self) -> Result<u32> {
        self.core.handle().read(&ip_tunnel::FLOW_LABEL)
    }

    pub fn flags(&self) -> Result<u32> {
        self.core.handle().read(&ip_tunnel::FLAGS)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        let parent = self
            .core
            .handle()
            .read_path(&ip_tunnel::PARENT)
            .map(path_string);
        b.field("Mode", self.mode())?
            .field("Parent", parent)?
            .field("Local", self.local())?
            .field("Remote", self.remote())?
            .field("Ttl", self.ttl())?
            .field("Tos", self.tos())?
            .field("PathMtuDiscovery", self.path_mtu_discovery())?
            .field("InputKey", self.input_key())?
            .field("OutputKey", self.output_key())?
            .field("EncapsulationLimit", self.encapsulation_limit())?
            .field("FlowLabel", self.flow_label())?
            .field("Flags", self.flags())?;
        Ok(())
    }
}
