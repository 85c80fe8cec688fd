//! Wi-Fi access points.

use zvariant::OwnedObjectPath;

use crate::Result;
use crate::api::models::{ApFlags, ApSecurityFlags, Nm80211Mode};
use crate::core::object::{NmObject, ObjectHandle, serialize_via_snapshot};
use crate::core::snapshot::{Snapshot, SnapshotBuilder, SnapshotPolicy};
use crate::types::schema::{Property, access_point};
use crate::util::utils::{channel_from_freq, decode_ssid};

/// A Wi-Fi network visible to a wireless device.
///
/// Every getter performs one remote read. [`snapshot`](NmObject::snapshot)
/// is fail-fast: if any read fails, no snapshot is produced.
///
/// # Example
///
/// ```no_run
/// use nmobj::{NetworkManager, NmObject};
///
/// # fn example() -> nmobj::Result<()> {
/// let nm = NetworkManager::new()?;
/// for ap in nm.access_points()? {
///     println!("{} {}%", ap.ssid()?, ap.strength()?);
///     println!("{}", ap.snapshot()?.to_json_string()?);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessPoint {
    handle: ObjectHandle,
}

impl AccessPoint {
    /// Wraps the access point at `handle`'s path. Nothing is read yet.
    pub fn new(handle: ObjectHandle) -> Self {
        Self { handle }
    }

    /// General capability flags, raw (`NM80211ApFlags`).
    pub fn flags(&self) -> Result<u32> {
        self.handle.read(&access_point::FLAGS)
    }

    /// WPA security capabilities, raw (`NM80211ApSecurityFlags`).
    pub fn wpa_flags(&self) -> Result<u32> {
        self.handle.read(&access_point::WPA_FLAGS)
    }

    /// RSN (WPA2/WPA3) security capabilities, raw.
    pub fn rsn_flags(&self) -> Result<u32> {
        self.handle.read(&access_point::RSN_FLAGS)
    }

    /// SSID as raw bytes (may not be valid UTF-8).
    pub fn ssid_bytes(&self) -> Result<Vec<u8>> {
        self.handle.read(&access_point::SSID)
    }

    /// SSID decoded as text. Valid UTF-8 round-trips exactly.
    pub fn ssid(&self) -> Result<String> {
        self.ssid_bytes().map(|b| decode_ssid(&b))
    }

    /// Radio frequency in MHz.
    pub fn frequency(&self) -> Result<u32> {
        self.handle.read(&access_point::FREQUENCY)
    }

    /// Wi-Fi channel derived from [`frequency`](Self::frequency).
    pub fn channel(&self) -> Result<Option<u16>> {
        self.frequency().map(channel_from_freq)
    }

    /// BSSID of the access point.
    pub fn hw_address(&self) -> Result<String> {
        self.handle.read(&access_point::HW_ADDRESS)
    }

    /// Operating mode.
    pub fn mode(&self) -> Result<Nm80211Mode> {
        self.handle.read::<u32>(&access_point::MODE).map(Nm80211Mode::from)
    }

    /// Maximum bitrate in Kbit/s.
    pub fn max_bitrate(&self) -> Result<u32> {
        self.handle.read(&access_point::MAX_BITRATE)
    }

    /// Channel bandwidth in MHz.
    pub fn bandwidth(&self) -> Result<u32> {
        self.handle.read(&access_point::BANDWIDTH)
    }

    /// Signal quality in percent.
    pub fn strength(&self) -> Result<u8> {
        self.handle.read(&access_point::STRENGTH)
    }

    /// `CLOCK_BOOTTIME` seconds at which the AP was last seen in a scan;
    /// -1 if never.
    pub fn last_seen(&self) -> Result<i32> {
        self.handle.read(&access_point::LAST_SEEN)
    }

    /// [`flags`](Self::flags) as a typed set. Unknown bits are dropped.
    pub fn ap_flags(&self) -> Result<ApFlags> {
        self.flags().map(ApFlags::from_bits_truncate)
    }

    /// Union of the WPA and RSN security flags. Two reads.
    pub fn security(&self) -> Result<ApSecurityFlags> {
        let wpa = self.wpa_flags()?;
        let rsn = self.rsn_flags()?;
        Ok(ApSecurityFlags::from_bits_truncate(wpa | rsn))
    }
}

impl From<ObjectHandle> for AccessPoint {
    fn from(handle: ObjectHandle) -> Self {
        Self::new(handle)
    }
}

impl NmObject for AccessPoint {
    fn handle(&self) -> &ObjectHandle {
        &self.handle
    }

    fn interface(&self) -> &'static str {
        access_point::INTERFACE
    }

    fn schema(&self) -> &'static [&'static [Property]] {
        &[access_point::ALL]
    }

    fn snapshot_policy(&self) -> SnapshotPolicy {
        SnapshotPolicy::FailFast
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let mut b = SnapshotBuilder::new(self.snapshot_policy());
        b.field("Flags", self.flags())?
            .field("WPAFlags", self.wpa_flags())?
            .field("RSNFlags", self.rsn_flags())?
            .field("SSID", self.ssid())?
            .field("Frequency", self.frequency())?
            .field("HWAddress", self.hw_address())?
            .field("Mode", self.mode().map(|m| m.to_string()))?
            .field("MaxBitrate", self.max_bitrate())?
            .field("Strength", self.strength())?
            .field("LastSeen", self.last_seen())?;
        Ok(b.build())
    }
}

serialize_via_snapshot!(AccessPoint);

/// Resolves access point paths. Access points need no discriminator.
pub(crate) fn access_points_at(
    origin: &ObjectHandle,
    paths: Vec<OwnedObjectPath>,
) -> Vec<AccessPoint> {
    paths
        .into_iter()
        .map(|p| AccessPoint::new(origin.rebind(p)))
        .collect()
}
