//! Utility functions for value conversion.
//!
//! Provides helpers for converting between NetworkManager data
//! representations: SSID bytes to strings, frequency to channel, and the
//! `/` null object path to `Option`.

use log::warn;
use std::str;
use zvariant::OwnedObjectPath;

use crate::types::constants::{NULL_PATH, frequency};

/// Decodes SSID bytes into a string.
///
/// Valid UTF-8 is returned unchanged. Anything else is decoded lossily,
/// since SSIDs are arbitrary octets and need not be text.
pub(crate) fn decode_ssid(bytes: &[u8]) -> String {
    match str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(e) => {
            warn!("Invalid UTF-8 in SSID: {e}");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Converts a Wi-Fi frequency in MHz to a channel number.
///
/// Supports 2.4GHz (channels 1-14), 5GHz, and 6GHz bands.
/// Returns `None` for frequencies outside known Wi-Fi bands.
pub(crate) fn channel_from_freq(mhz: u32) -> Option<u16> {
    match mhz {
        frequency::BAND_2_4_START..=frequency::BAND_2_4_END => {
            Some(((mhz - frequency::BAND_2_4_START) / frequency::CHANNEL_SPACING + 1) as u16)
        }
        frequency::BAND_2_4_CH14 => Some(14),
        frequency::BAND_5_START..=frequency::BAND_5_END => {
            Some(((mhz - frequency::BAND_5_BASE) / frequency::CHANNEL_SPACING) as u16)
        }
        frequency::BAND_6_START..=frequency::BAND_6_END => {
            Some(((mhz - frequency::BAND_6_START) / frequency::CHANNEL_SPACING + 1) as u16)
        }
        _ => None,
    }
}

/// NetworkManager uses `/` for "no object"; map it to `None`.
pub(crate) fn non_null_path(path: OwnedObjectPath) -> Option<OwnedObjectPath> {
    (path.as_str() != NULL_PATH).then_some(path)
}

/// Renders an optional object path for a snapshot; `None` becomes JSON null.
pub(crate) fn path_string(path: Option<OwnedObjectPath>) -> Option<String> {
    path.map(|p| p.as_str().to_owned())
}

/// Renders a list of object paths for a snapshot.
pub(crate) fn path_strings(paths: &[OwnedObjectPath]) -> Vec<String> {
    paths.iter().map(|p| p.as_str().to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_from_freq_2_4ghz() {
        assert_eq!(channel_from_freq(2412), Some(1));
        assert_eq!(channel_from_freq(2437), Some(6));
        assert_eq!(channel_from_freq(2472), Some(13));
        assert_eq!(channel_from_freq(2484), Some(14));
    }

    #[test]
    fn test_channel_from_freq_5ghz() {
        assert_eq!(channel_from_freq(5180), Some(36));
        assert_eq!(channel_from_freq(5745), Some(149));
    }

    #[test]
    fn test_channel_from_freq_6ghz() {
        assert_eq!(channel_from_freq(5955), Some(1));
        assert_eq!(channel_from_freq(6115), Some(33));
    }

    #[test]
    fn test_channel_from_freq_invalid() {
        assert_eq!(channel_from_freq(1000), None);
        assert_eq!(channel_from_freq(9999), None);
    }

    #[test]
    fn test_decode_ssid_exact() {
        assert_eq!(decode_ssid(&[0x4D, 0x79, 0x4E, 0x65, 0x74]), "MyNet");
        assert_eq!(decode_ssid("café".as_bytes()), "café");
        assert_eq!(decode_ssid(&[]), "");
    }

    #[test]
    fn test_decode_ssid_invalid_utf8() {
        assert_eq!(decode_ssid(&[0x41, 0xFF, 0x42]), "A\u{FFFD}B");
    }

    #[test]
    fn test_non_null_path() {
        let null = OwnedObjectPath::try_from("/").unwrap();
        assert_eq!(non_null_path(null), None);

        let ap = OwnedObjectPath::try_from("/org/freedesktop/NetworkManager/AccessPoint/3").unwrap();
        assert_eq!(non_null_path(ap.clone()), Some(ap.clone()));
        assert_eq!(
            path_string(Some(ap)).as_deref(),
            Some("/org/freedesktop/NetworkManager/AccessPoint/3")
        );
        assert_eq!(path_string(None), None);
    }
}
