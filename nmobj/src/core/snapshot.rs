//! Point-in-time JSON snapshots of remote objects.
//!
//! A snapshot reads every field at call time and is stale as soon as it is
//! returned. Two failure policies exist and each wrapper type picks one:
//!
//! - [`SnapshotPolicy::FailFast`]: the first failed read aborts the
//!   snapshot and its error is returned; no partial map escapes.
//! - [`SnapshotPolicy::BestEffort`]: a failed read drops that field and the
//!   snapshot always succeeds.

use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value as Json};

use crate::Result;
use crate::api::models::NmError;

/// How a snapshot reacts to a failed property read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotPolicy {
    /// Propagate the first error.
    FailFast,
    /// Omit the failed field and carry on.
    BestEffort,
}

/// Field name to decoded value, as read at one instant.
///
/// Enum-valued properties hold their textual names. Keys serialize in
/// sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot(Map<String, Json>);

impl Snapshot {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of one field, if present.
    pub fn get(&self, key: &str) -> Option<&Json> {
        self.0.get(key)
    }

    /// True if the field is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Json)> {
        self.0.iter()
    }

    /// Converts into a JSON object value.
    pub fn into_json(self) -> Json {
        Json::Object(self.0)
    }

    /// Renders compact JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Renders indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: Json) {
        self.0.insert(key.into(), value);
    }

    /// Moves every field of `other` into this snapshot.
    pub(crate) fn extend(&mut self, other: Snapshot) {
        self.0.extend(other.0);
    }
}

impl From<Snapshot> for Json {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.into_json()
    }
}

/// Collects fields under a [`SnapshotPolicy`].
///
/// ```ignore
/// let mut b = SnapshotBuilder::new(SnapshotPolicy::FailFast);
/// b.field("Flags", ap.flags())?
///     .field("Mode", ap.mode().map(|m| m.to_string()))?;
/// let snapshot = b.build();
/// ```
#[derive(Debug)]
pub(crate) struct SnapshotBuilder {
    policy: SnapshotPolicy,
    snapshot: Snapshot,
}

impl SnapshotBuilder {
    pub(crate) fn new(policy: SnapshotPolicy) -> Self {
        Self {
            policy,
            snapshot: Snapshot::new(),
        }
    }

    /// Records `key` from the outcome of a read.
    ///
    /// Only returns an error under [`SnapshotPolicy::FailFast`].
    pub(crate) fn field<T: Into<Json>>(
        &mut self,
        key: &str,
        value: Result<T>,
    ) -> Result<&mut Self> {
        match value {
            Ok(v) => self.snapshot.insert(key, v.into()),
            Err(e) => match self.policy {
                SnapshotPolicy::FailFast => return Err(e),
                SnapshotPolicy::BestEffort => {
                    if matches!(e, NmError::TypeMismatch { .. }) {
                        warn!("dropping snapshot field {key}: {e}");
                    } else {
                        debug!("dropping snapshot field {key}: {e}");
                    }
                }
            },
        }
        Ok(self)
    }

    pub(crate) fn build(self) -> Snapshot {
        self.snapshot
    }
}
