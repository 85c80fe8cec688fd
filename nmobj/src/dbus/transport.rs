//! The property transport: the only place that talks to the bus.

use std::fmt::Debug;

use log::debug;
use zbus::blocking::Connection;
use zbus::blocking::connection::Builder;
use zbus::blocking::fdo::PropertiesProxy;
use zbus::names::InterfaceName;
use zbus::proxy::CacheProperties;
use zvariant::{ObjectPath, OwnedValue};

use crate::api::config::{BusConfig, BusKind};

/// Source of raw property values.
///
/// Implementors perform one `org.freedesktop.DBus.Properties.Get` (or an
/// equivalent lookup) per call and hand back the untouched variant payload.
/// No retries, no caching: an error from the remote side is returned as-is.
///
/// The crate ships [`SystemBus`] for real use. Tests implement this trait
/// over an in-memory table.
pub trait PropertySource: Send + Sync + Debug {
    /// Reads `interface.name` on the object at `path`.
    fn get_property(
        &self,
        path: &ObjectPath<'_>,
        interface: &str,
        name: &str,
    ) -> zbus::Result<OwnedValue>;
}

/// Blocking D-Bus transport addressed to a single service.
///
/// Cloning is cheap and shares the underlying connection.
#[derive(Debug, Clone)]
pub struct SystemBus {
    conn: Connection,
    service: String,
}

impl SystemBus {
    /// Opens a new bus connection as described by `config`.
    pub fn connect(config: &BusConfig) -> zbus::Result<Self> {
        let conn = match &config.bus {
            BusKind::System => Connection::system()?,
            BusKind::Session => Connection::session()?,
            BusKind::Address(address) => Builder::address(address.as_str())?.build()?,
        };
        debug!("connected to {:?} bus for {}", config.bus, config.service);
        Ok(Self::from_connection(conn, config.service.clone()))
    }

    /// Wraps a connection owned by the caller.
    pub fn from_connection(conn: Connection, service: impl Into<String>) -> Self {
        Self {
            conn,
            service: service.into(),
        }
    }

    /// The underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// The destination service every read is addressed to.
    pub fn service(&self) -> &str {
        &self.service
    }
}

impl PropertySource for SystemBus {
    fn get_property(
        &self,
        path: &ObjectPath<'_>,
        interface: &str,
        name: &str,
    ) -> zbus::Result<OwnedValue> {
        debug!("Get {interface}.{name} on {path}");
        let proxy = PropertiesProxy::builder(&self.conn)
            .destination(self.service.as_str())?
            .path(path.clone())?
            .cache_properties(CacheProperties::No)
            .build()?;
        let interface = InterfaceName::try_from(interface)?;
        Ok(proxy.get(interface, name)?)
    }
}
