//! Tests for access point reads and snapshots.

mod common;

use common::{AP, MockBus};
use nmobj::{ApSecurityFlags, Nm80211Mode, NmError, NmObject, SnapshotPolicy};
use serde_json::json;

const AP_PATH: &str = "/org/freedesktop/NetworkManager/AccessPoint/1";

fn scenario() -> MockBus {
    MockBus::new()
        .with(AP_PATH, AP, "Flags", 1u32)
        .with(AP_PATH, AP, "WpaFlags", 0u32)
        .with(AP_PATH, AP, "RsnFlags", 0u32)
        .with(AP_PATH, AP, "Ssid", b"MyNet".to_vec())
        .with(AP_PATH, AP, "Frequency", 2412u32)
        .with(AP_PATH, AP, "HwAddress", "AA:BB:CC:DD:EE:FF")
        .with(AP_PATH, AP, "Mode", 2u32)
        .with(AP_PATH, AP, "MaxBitrate", 54000u32)
        .with(AP_PATH, AP, "Bandwidth", 20u32)
        .with(AP_PATH, AP, "Strength", 80u8)
        .with(AP_PATH, AP, "LastSeen", -1i32)
}

#[test]
fn test_snapshot_matches_scenario() {
    let (_bus, nm) = scenario().into_nm();
    let ap = nm.access_point(common::owned_path(AP_PATH));

    let snapshot = ap.snapshot().unwrap();

    assert_eq!(
        snapshot.into_json(),
        json!({
            "Flags": 1,
            "WPAFlags": 0,
            "RSNFlags": 0,
            "SSID": "MyNet",
            "Frequency": 2412,
            "HWAddress": "AA:BB:CC:DD:EE:FF",
            "Mode": "Infra",
            "MaxBitrate": 54000,
            "Strength": 80,
            "LastSeen": -1
        })
    );
}

#[test]
fn test_serialize_goes_through_snapshot() {
    let (_bus, nm) = scenario().into_nm();
    let ap = nm.access_point(common::owned_path(AP_PATH));

    let value = serde_json::to_value(&ap).unwrap();
    assert_eq!(value["Mode"], "Infra");
    assert_eq!(value["SSID"], "MyNet");
    assert_eq!(value.as_object().unwrap().len(), 10);
}

#[test]
fn test_getters_return_native_values() {
    let (_bus, nm) = scenario().into_nm();
    let ap = nm.access_point(common::owned_path(AP_PATH));

    assert_eq!(ap.flags().unwrap(), 1);
    assert_eq!(ap.ssid().unwrap(), "MyNet");
    assert_eq!(ap.ssid_bytes().unwrap(), b"MyNet");
    assert_eq!(ap.frequency().unwrap(), 2412);
    assert_eq!(ap.channel().unwrap(), Some(1));
    assert_eq!(ap.mode().unwrap(), Nm80211Mode::Infra);
    assert_eq!(ap.strength().unwrap(), 80);
    assert_eq!(ap.last_seen().unwrap(), -1);
    assert_eq!(ap.bandwidth().unwrap(), 20);
    assert!(!ap.security().unwrap().secured());
}

#[test]
fn test_mode_renders_as_name() {
    for (code, name) in [(0u32, "Unknown"), (1, "Adhoc"), (2, "Infra"), (3, "AP"), (4, "Mesh")] {
        let (_bus, nm) = scenario().with(AP_PATH, AP, "Mode", code).into_nm();
        let ap = nm.access_point(common::owned_path(AP_PATH));
        assert_eq!(ap.snapshot().unwrap().get("Mode").unwrap(), name);
    }
}

#[test]
fn test_ssid_bytes_round_trip() {
    let raw = "Café ☕".as_bytes().to_vec();
    let (_bus, nm) = scenario().with(AP_PATH, AP, "Ssid", raw.clone()).into_nm();
    let ap = nm.access_point(common::owned_path(AP_PATH));

    assert_eq!(ap.ssid_bytes().unwrap(), raw);
    assert_eq!(ap.ssid().unwrap(), "Café ☕");
}

#[test]
fn test_wrong_wire_type_is_type_mismatch() {
    // Strength is declared as a byte
    let (_bus, nm) = scenario().with(AP_PATH, AP, "Strength", 80u32).into_nm();
    let ap = nm.access_point(common::owned_path(AP_PATH));

    match ap.strength() {
        Err(NmError::TypeMismatch {
            property,
            expected,
            found,
        }) => {
            assert_eq!(property, "org.freedesktop.NetworkManager.AccessPoint.Strength");
            assert_eq!(expected.signature(), "y");
            assert_eq!(found, "u");
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_ssid_as_string_is_type_mismatch() {
    let (_bus, nm) = scenario().with(AP_PATH, AP, "Ssid", "MyNet").into_nm();
    let ap = nm.access_point(common::owned_path(AP_PATH));

    assert!(matches!(ap.ssid(), Err(NmError::TypeMismatch { .. })));
    assert!(matches!(ap.snapshot(), Err(NmError::TypeMismatch { .. })));
}

/// Snapshot fields in read order, by D-Bus property name.
const SNAPSHOT_READS: [&str; 10] = [
    "Flags",
    "WpaFlags",
    "RsnFlags",
    "Ssid",
    "Frequency",
    "HwAddress",
    "Mode",
    "MaxBitrate",
    "Strength",
    "LastSeen",
];

#[test]
fn test_fail_fast_returns_kth_error() {
    for (k, name) in SNAPSHOT_READS.iter().enumerate() {
        let (bus, nm) = scenario()
            .failing(AP_PATH, AP, name, "object vanished")
            .into_nm();
        let ap = nm.access_point(common::owned_path(AP_PATH));
        assert_eq!(ap.snapshot_policy(), SnapshotPolicy::FailFast);

        match ap.snapshot() {
            Err(NmError::Transport(zbus::Error::Failure(msg))) => {
                assert_eq!(msg, "object vanished", "{name}")
            }
            other => panic!("expected transport error at {name}, got {other:?}"),
        }
        // Nothing after the failing read is attempted
        assert_eq!(bus.calls(), SNAPSHOT_READS[..=k], "{name}");
    }
}

#[test]
fn test_security_flags_union() {
    let (_bus, nm) = scenario()
        .with(AP_PATH, AP, "WpaFlags", 0x0000_0100u32)
        .with(AP_PATH, AP, "RsnFlags", 0x0000_0008u32 | 0x0000_0100)
        .into_nm();
    let ap = nm.access_point(common::owned_path(AP_PATH));

    let sec = ap.security().unwrap();
    assert!(sec.contains(ApSecurityFlags::KEY_MGMT_PSK | ApSecurityFlags::PAIR_CCMP));
    assert!(sec.is_psk());
    assert!(!sec.is_eap());
}

#[test]
fn test_properties_dump_uses_dbus_names() {
    let (_bus, nm) = scenario().into_nm();
    let ap = nm.access_point(common::owned_path(AP_PATH));

    let props = ap.properties().unwrap();
    assert_eq!(props.len(), 11);
    assert_eq!(props.get("Ssid").unwrap(), &json!([77, 121, 78, 101, 116]));
    assert_eq!(props.get("Mode").unwrap(), 2);
    assert_eq!(props.get("Bandwidth").unwrap(), 20);
}
