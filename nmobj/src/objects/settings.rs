//! Saved connection profiles.

use zvariant::OwnedObjectPath;

use crate::Result;
use crate::core::object::{NmObject, ObjectHandle, serialize_via_snapshot};
use crate::core::snapshot::{Snapshot, SnapshotBuilder, SnapshotPolicy};
use crate::types::schema::{Property, settings, settings_connection};
use crate::util::utils::path_strings;

/// The settings root at `/org/freedesktop/NetworkManager/Settings`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Settings {
    handle: ObjectHandle,
}

impl Settings {
    pub fn new(handle: ObjectHandle) -> Self {
        Self { handle }
    }

    pub fn connection_paths(&self) -> Result<Vec<OwnedObjectPath>> {
        self.handle.read(&settings::CONNECTIONS)
    }

    /// Every saved connection profile.
    pub fn connections(&self) -> Result<Vec<SettingsConnection>> {
        Ok(self
            .connection_paths()?
            .into_iter()
            .map(|p| SettingsConnection::new(self.handle.rebind(p)))
            .collect())
    }

    /// Configured hostname.
    pub fn hostname(&self) -> Result<String> {
        self.handle.read(&settings::HOSTNAME)
    }

    /// Whether adding and modifying connections is supported.
    pub fn can_modify(&self) -> Result<bool> {
        self.handle.read(&settings::CAN_MODIFY)
    }
}

impl NmObject for Settings {
    fn handle(&self) -> &ObjectHandle {
        &self.handle
    }

    fn interface(&self) -> &'static str {
        settings::INTERFACE
    }

    fn schema(&self) -> &'static [&'static [Property]] {
        &[settings::ALL]
    }

    fn snapshot_policy(&self) -> SnapshotPolicy {
        SnapshotPolicy::FailFast
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let mut b = SnapshotBuilder::new(self.snapshot_policy());
        b.field("Connections", self.connection_paths().map(|p| path_strings(&p)))?
            .field("Hostname", self.hostname())?
            .field("CanModify", self.can_modify())?;
        Ok(b.build())
    }
}

/// One saved connection profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SettingsConnection {
    handle: ObjectHandle,
}

impl SettingsConnection {
    pub fn new(handle: ObjectHandle) -> Self {
        Self { handle }
    }

    /// True if the profile has changes not yet written to disk.
    pub fn unsaved(&self) -> Result<bool> {
        self.handle.read(&settings_connection::UNSAVED)
    }

    /// Raw `NMSettingsConnectionFlags`.
    pub fn flags(&self) -> Result<u32> {
        self.handle.read(&settings_connection::FLAGS)
    }

    /// File the profile is stored in; empty for in-memory profiles.
    pub fn filename(&self) -> Result<String> {
        self.handle.read(&settings_connection::FILENAME)
    }
}

impl NmObject for SettingsConnection {
    fn handle(&self) -> &ObjectHandle {
        &self.handle
    }

    fn interface(&self) -> &'static str {
        settings_connection::INTERFACE
    }

    fn schema(&self) -> &'static [&'static [Property]] {
        &[settings_connection::ALL]
    }

    fn snapshot_policy(&self) -> SnapshotPolicy {
        SnapshotPolicy::FailFast
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let mut b = SnapshotBuilder::new(self.snapshot_policy());
        b.field("Unsaved", self.unsaved())?
            .field("Flags", self.flags())?
            .field("Filename", self.filename())?;
        Ok(b.build())
    }
}

serialize_via_snapshot!(Settings, SettingsConnection);
