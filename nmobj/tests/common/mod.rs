//! In-memory property source for integration tests.
//!
//! Properties not registered on the mock fail the way a real bus does for
//! an unknown property, with a transport error.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use nmobj::{NetworkManager, ObjectHandle, PropertySource};
use zvariant::{ObjectPath, OwnedObjectPath, OwnedValue, Value};

#[derive(Debug)]
enum Entry {
    Value(OwnedValue),
    Fail(String),
}

#[derive(Debug, Default)]
pub struct MockBus {
    props: HashMap<(String, String, String), Entry>,
    calls: Mutex<Vec<String>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a property value.
    pub fn with<'a>(
        mut self,
        path: &str,
        interface: &str,
        name: &str,
        value: impl Into<Value<'a>>,
    ) -> Self {
        self.props.insert(key(path, interface, name), Entry::Value(owned(value)));
        self
    }

    /// Registers every shared device property a snapshot reads, with
    /// plausible values for an activated, managed device.
    pub fn with_device(self, path: &str, device_type: u32, interface: &str) -> Self {
        let udi = format!("/sys/devices/virtual/net/{interface}");
        self.with(path, DEVICE, "DeviceType", device_type)
            .with(path, DEVICE, "Udi", udi.as_str())
            .with(path, DEVICE, "Interface", interface)
            .with(path, DEVICE, "IpInterface", interface)
            .with(path, DEVICE, "Driver", "virtio_net")
            .with(path, DEVICE, "DriverVersion", "1.0.0")
            .with(path, DEVICE, "FirmwareVersion", "")
            .with(path, DEVICE, "Capabilities", 0x7u32)
            .with(path, DEVICE, "State", 100u32)
            .with(path, DEVICE, "ActiveConnection", opath("/"))
            .with(path, DEVICE, "Ip4Config", opath("/"))
            .with(path, DEVICE, "Dhcp4Config", opath("/"))
            .with(path, DEVICE, "Ip6Config", opath("/"))
            .with(path, DEVICE, "Dhcp6Config", opath("/"))
            .with(path, DEVICE, "Managed", true)
            .with(path, DEVICE, "Autoconnect", true)
            .with(path, DEVICE, "FirmwareMissing", false)
            .with(path, DEVICE, "NmPluginMissing", false)
            .with(path, DEVICE, "AvailableConnections", paths(&[]))
            .with(path, DEVICE, "PhysicalPortId", "")
            .with(path, DEVICE, "Mtu", 1500u32)
            .with(path, DEVICE, "Metered", 0u32)
            .with(path, DEVICE, "Real", true)
            .with(path, DEVICE, "Ip4Connectivity", 4u32)
            .with(path, DEVICE, "Ip6Connectivity", 1u32)
            .with(path, DEVICE, "InterfaceFlags", 0x1u32)
    }

    /// Registers a property whose read fails with `message`.
    pub fn failing(mut self, path: &str, interface: &str, name: &str, message: &str) -> Self {
        self.props
            .insert(key(path, interface, name), Entry::Fail(message.to_string()));
        self
    }

    /// Property names read so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn into_nm(self) -> (Arc<MockBus>, NetworkManager) {
        let bus = Arc::new(self);
        let nm = NetworkManager::with_source(bus.clone());
        (bus, nm)
    }
}

impl PropertySource for MockBus {
    fn get_property(
        &self,
        path: &ObjectPath<'_>,
        interface: &str,
        name: &str,
    ) -> zbus::Result<OwnedValue> {
        self.calls.lock().unwrap().push(name.to_string());
        match self.props.get(&key(path.as_str(), interface, name)) {
            Some(Entry::Value(v)) => Ok(v.try_clone().unwrap()),
            Some(Entry::Fail(m)) => Err(zbus::Error::Failure(m.clone())),
            None => Err(zbus::Error::Failure(format!(
                "No such property '{name}' on {interface} at {}",
                path.as_str()
            ))),
        }
    }
}

fn key(path: &str, interface: &str, name: &str) -> (String, String, String) {
    (path.to_string(), interface.to_string(), name.to_string())
}

pub fn owned<'a>(value: impl Into<Value<'a>>) -> OwnedValue {
    value.into().try_to_owned().unwrap()
}

pub fn opath(path: &str) -> ObjectPath<'_> {
    ObjectPath::try_from(path).unwrap()
}

pub fn owned_path(path: &str) -> OwnedObjectPath {
    OwnedObjectPath::try_from(path).unwrap()
}

pub fn paths<'a>(paths: &[&'a str]) -> Vec<ObjectPath<'a>> {
    paths.iter().map(|p| opath(*p)).collect()
}

pub fn handle(bus: &Arc<MockBus>, path: &str) -> ObjectHandle {
    ObjectHandle::new(bus.clone(), owned_path(path))
}

pub const DEVICE: &str = "org.freedesktop.NetworkManager.Device";
pub const AP: &str = "org.freedesktop.NetworkManager.AccessPoint";
pub const ACTIVE: &str = "org.freedesktop.NetworkManager.Connection.Active";
pub const NM: &str = "org.freedesktop.NetworkManager";
