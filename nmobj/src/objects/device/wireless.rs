use zvariant::OwnedObjectPath;

use crate::Result;
use crate::api::models::{Nm80211Mode, WifiCapabilities};
use crate::core::object::NmObject;
use crate::core::snapshot::SnapshotBuilder;
use crate::objects::access_point::{AccessPoint, access_points_at};
use crate::types::schema::wireless;
use crate::util::utils::{path_string, path_strings};

device_subtype! {
    /// A Wi-Fi device.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nmobj::{Device, NetworkManager};
    ///
    /// # fn example() -> nmobj::Result<()> {
    /// let nm = NetworkManager::new()?;
    /// for device in nm.devices()? {
    ///     if let Device::Wireless(wifi) = device {
    ///         if let Some(ap) = wifi.active_access_point()? {
    ///             println!("{} on {}", ap.ssid()?, wifi.core().interface_name()?);
    ///         }
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    WirelessDevice => Wireless, wireless
}

impl WirelessDevice {
    pub fn hw_address(&self) -> Result<String> {
        self.core.handle().read(&wireless::HW_ADDRESS)
    }

    pub fn perm_hw_address(&self) -> Result<String> {
        self.core.handle().read(&wireless::PERM_HW_ADDRESS)
    }

    pub fn mode(&self) -> Result<Nm80211Mode> {
        self.core
            .handle()
            .read::<u32>(&wireless::MODE)
            .map(Nm80211Mode::from)
    }

    /// Current bitrate in Kbit/s.
    pub fn bitrate(&self) -> Result<u32> {
        self.core.handle().read(&wireless::BITRATE)
    }

    pub fn access_point_paths(&self) -> Result<Vec<OwnedObjectPath>> {
        self.core.handle().read(&wireless::ACCESS_POINTS)
    }

    /// Access points seen in the last scan.
    pub fn access_points(&self) -> Result<Vec<AccessPoint>> {
        let paths = self.access_point_paths()?;
        Ok(access_points_at(self.core.handle(), paths))
    }

    /// The access point the device is associated with, if any.
    pub fn active_access_point(&self) -> Result<Option<AccessPoint>> {
        let handle = self.core.handle();
        Ok(handle
            .read_path(&wireless::ACTIVE_ACCESS_POINT)?
            .map(|p| AccessPoint::new(handle.rebind(p))))
    }

    pub fn wireless_capabilities(&self) -> Result<WifiCapabilities> {
        self.core
            .handle()
            .read::<u32>(&wireless::WIRELESS_CAPABILITIES)
            .map(WifiCapabilities::from_bits_truncate)
    }

    /// `CLOCK_BOOTTIME` milliseconds of the last scan; -1 if never.
    pub fn last_scan(&self) -> Result<i64> {
        self.core.handle().read(&wireless::LAST_SCAN)
    }

    pub(crate) fn write_fields(&self, b: &mut SnapshotBuilder) -> Result<()> {
        let active = self
            .core
            .handle()
            .read_path(&wireless::ACTIVE_ACCESS_POINT)
            .map(path_string);
        b.field("HwAddress", self.hw_address())?
            .field("PermHwAddress", self.perm_hw_address())?
            .field("Mode", self.mode().map(|m| m.to_string()))?
            .field("Bitrate", self.bitrate())?
            .field("AccessPoints", self.access_point_paths().map(|p| path_strings(&p)))?
            .field("ActiveAccessPoint", active)?
            .field(
                "WirelessCapabilities",
                self.wireless_capabilities().map(|c| c.bits()),
            )?
            .field("LastScan", self.last_scan())?;
        Ok(())
    }
}
