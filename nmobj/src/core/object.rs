//! Shared remote-object handle and the capability trait every wrapper implements.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use log::debug;
use zvariant::{OwnedObjectPath, OwnedValue};

use crate::Result;
use crate::api::models::NmError;
use crate::core::snapshot::{Snapshot, SnapshotBuilder, SnapshotPolicy};
use crate::dbus::transport::PropertySource;
use crate::dbus::wire::{FromWire, WireValue, signature_of};
use crate::types::schema::Property;
use crate::util::utils::non_null_path;

/// A transport plus the object path it reads from.
///
/// This is the one piece of state every wrapper holds. It is immutable,
/// cheap to clone and safe to share across threads; reads through clones
/// are independent of one another.
///
/// Equality and hashing consider the object path only.
#[derive(Debug, Clone)]
pub struct ObjectHandle {
    bus: Arc<dyn PropertySource>,
    path: OwnedObjectPath,
}

impl ObjectHandle {
    /// Creates a handle for `path` on `bus`.
    pub fn new(bus: Arc<dyn PropertySource>, path: OwnedObjectPath) -> Self {
        Self { bus, path }
    }

    /// The object path.
    pub fn path(&self) -> &OwnedObjectPath {
        &self.path
    }

    /// The transport this handle reads through.
    pub fn bus(&self) -> &Arc<dyn PropertySource> {
        &self.bus
    }

    /// A handle for another object on the same transport.
    pub fn rebind(&self, path: OwnedObjectPath) -> Self {
        Self {
            bus: Arc::clone(&self.bus),
            path,
        }
    }

    /// Reads one property and decodes it as `T`.
    ///
    /// # Errors
    ///
    /// - [`NmError::Transport`] if the remote call fails
    /// - [`NmError::TypeMismatch`] if the value's signature is not the
    ///   property's declared wire type
    pub fn read<T: FromWire>(&self, property: &Property) -> Result<T> {
        debug_assert_eq!(
            property.wire,
            T::WIRE,
            "{property} is declared as {} but read as {}",
            property.wire,
            T::WIRE
        );
        let value = self.fetch(property)?;
        let found = signature_of(&value);
        T::from_wire(value).map_err(|_| mismatch(property, found))
    }

    /// Reads an object-path property, mapping `/` to `None`.
    pub fn read_path(&self, property: &Property) -> Result<Option<OwnedObjectPath>> {
        self.read::<OwnedObjectPath>(property).map(non_null_path)
    }

    /// Reads one property without knowing its native type up front.
    pub fn read_raw(&self, property: &Property) -> Result<WireValue> {
        let value = self.fetch(property)?;
        let found = signature_of(&value);
        WireValue::decode(property.wire, value).map_err(|_| mismatch(property, found))
    }

    /// Reads every property in `schemas`, keyed by property name.
    ///
    /// Later schemas win when two declare the same name, so a device
    /// subtype's `HwAddress` replaces the base device's.
    pub fn dump(&self, schemas: &[&[Property]], policy: SnapshotPolicy) -> Result<Snapshot> {
        let mut b = SnapshotBuilder::new(policy);
        for property in schemas.iter().flat_map(|s| s.iter()) {
            b.field(property.name, self.read_raw(property).map(|v| v.to_json()))?;
        }
        Ok(b.build())
    }

    fn fetch(&self, property: &Property) -> Result<OwnedValue> {
        debug!("reading {property} on {}", self.path.as_str());
        let value = self
            .bus
            .get_property(&self.path, property.interface, property.name)?;
        if !property.wire.matches(&value) {
            return Err(mismatch(property, signature_of(&value)));
        }
        Ok(value)
    }
}

fn mismatch(property: &Property, found: String) -> NmError {
    NmError::TypeMismatch {
        property: property.qualified_name(),
        expected: property.wire,
        found,
    }
}

impl PartialEq for ObjectHandle {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for ObjectHandle {}

impl Hash for ObjectHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

/// Capabilities shared by every NetworkManager object wrapper.
pub trait NmObject {
    /// The underlying handle.
    fn handle(&self) -> &ObjectHandle;

    /// The most specific D-Bus interface this wrapper reads.
    fn interface(&self) -> &'static str;

    /// Property tables this wrapper reads, base interface first.
    fn schema(&self) -> &'static [&'static [Property]];

    /// How [`snapshot`](NmObject::snapshot) reacts to failed reads.
    fn snapshot_policy(&self) -> SnapshotPolicy;

    /// Reads the wrapper's fields into a snapshot with human-readable keys.
    fn snapshot(&self) -> Result<Snapshot>;

    /// The object path.
    fn path(&self) -> &OwnedObjectPath {
        self.handle().path()
    }

    /// Reads every declared property, keyed by its D-Bus name, under this
    /// wrapper's snapshot policy.
    fn properties(&self) -> Result<Snapshot> {
        self.handle().dump(self.schema(), self.snapshot_policy())
    }
}

/// Implements [`serde::Serialize`] by taking a fresh snapshot.
///
/// A failed snapshot surfaces as a serializer error.
macro_rules! serialize_via_snapshot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                    use serde::Serialize as _;
                    use $crate::core::object::NmObject;
                    self.snapshot()
                        .map_err(serde::ser::Error::custom)?
                        .serialize(serializer)
                }
            }
        )*
    };
}

pub(crate) use serialize_via_snapshot;
