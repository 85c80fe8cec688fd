//! IP and DHCP configuration objects.
//!
//! NetworkManager publishes separate interfaces for IPv4 and IPv6 with the
//! same property names; one wrapper per kind covers both families.

use std::collections::HashMap;

use zvariant::OwnedValue;

use crate::Result;
use crate::core::object::{NmObject, ObjectHandle, serialize_via_snapshot};
use crate::core::snapshot::{Snapshot, SnapshotBuilder, SnapshotPolicy};
use crate::dbus::wire::variant_map_to_json;
use crate::types::schema::{Property, dhcp4_config, dhcp6_config, ip4_config, ip6_config};

/// Address family of a configuration object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    fn pick(self, v4: &'static Property, v6: &'static Property) -> &'static Property {
        match self {
            Self::V4 => v4,
            Self::V6 => v6,
        }
    }
}

/// An `IP4Config` or `IP6Config` object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpConfig {
    handle: ObjectHandle,
    family: IpFamily,
}

impl IpConfig {
    pub fn new(handle: ObjectHandle, family: IpFamily) -> Self {
        Self { handle, family }
    }

    pub fn family(&self) -> IpFamily {
        self.family
    }

    /// Default gateway; empty if none.
    pub fn gateway(&self) -> Result<String> {
        self.handle
            .read(self.family.pick(&ip4_config::GATEWAY, &ip6_config::GATEWAY))
    }

    pub fn domains(&self) -> Result<Vec<String>> {
        self.handle
            .read(self.family.pick(&ip4_config::DOMAINS, &ip6_config::DOMAINS))
    }

    pub fn searches(&self) -> Result<Vec<String>> {
        self.handle
            .read(self.family.pick(&ip4_config::SEARCHES, &ip6_config::SEARCHES))
    }

    pub fn dns_options(&self) -> Result<Vec<String>> {
        self.handle
            .read(self.family.pick(&ip4_config::DNS_OPTIONS, &ip6_config::DNS_OPTIONS))
    }

    pub fn dns_priority(&self) -> Result<i32> {
        self.handle
            .read(self.family.pick(&ip4_config::DNS_PRIORITY, &ip6_config::DNS_PRIORITY))
    }
}

impl NmObject for IpConfig {
    fn handle(&self) -> &ObjectHandle {
        &self.handle
    }

    fn interface(&self) -> &'static str {
        match self.family {
            IpFamily::V4 => ip4_config::INTERFACE,
            IpFamily::V6 => ip6_config::INTERFACE,
        }
    }

    fn schema(&self) -> &'static [&'static [Property]] {
        match self.family {
            IpFamily::V4 => &[ip4_config::ALL],
            IpFamily::V6 => &[ip6_config::ALL],
        }
    }

    fn snapshot_policy(&self) -> SnapshotPolicy {
        SnapshotPolicy::FailFast
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let mut b = SnapshotBuilder::new(self.snapshot_policy());
        b.field("Gateway", self.gateway())?
            .field("Domains", self.domains())?
            .field("Searches", self.searches())?
            .field("DnsOptions", self.dns_options())?
            .field("DnsPriority", self.dns_priority())?;
        Ok(b.build())
    }
}

/// A `DHCP4Config` or `DHCP6Config` object: the options the DHCP server
/// handed out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DhcpConfig {
    handle: ObjectHandle,
    family: IpFamily,
}

impl DhcpConfig {
    pub fn new(handle: ObjectHandle, family: IpFamily) -> Self {
        Self { handle, family }
    }

    pub fn family(&self) -> IpFamily {
        self.family
    }

    /// Option name to value, e.g. `ip_address` or `domain_name_servers`.
    pub fn options(&self) -> Result<HashMap<String, OwnedValue>> {
        self.handle
            .read(self.family.pick(&dhcp4_config::OPTIONS, &dhcp6_config::OPTIONS))
    }
}

impl NmObject for DhcpConfig {
    fn handle(&self) -> &ObjectHandle {
        &self.handle
    }

    fn interface(&self) -> &'static str {
        match self.family {
            IpFamily::V4 => dhcp4_config::INTERFACE,
            IpFamily::V6 => dhcp6_config::INTERFACE,
        }
    }

    fn schema(&self) -> &'static [&'static [Property]] {
        match self.family {
            IpFamily::V4 => &[dhcp4_config::ALL],
            IpFamily::V6 => &[dhcp6_config::ALL],
        }
    }

    fn snapshot_policy(&self) -> SnapshotPolicy {
        SnapshotPolicy::FailFast
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let mut b = SnapshotBuilder::new(self.snapshot_policy());
        b.field("Options", self.options().map(|o| variant_map_to_json(&o)))?;
        Ok(b.build())
    }
}

serialize_via_snapshot!(IpConfig, DhcpConfig);
