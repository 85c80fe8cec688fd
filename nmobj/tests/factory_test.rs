//! Tests for resolving object paths to concrete wrapper types.

mod common;

use common::{ACTIVE, DEVICE, MockBus, NM};
use nmobj::{
    ActiveConnection, Device, DeviceType, NmError, NmObject, SnapshotPolicy, resolve_device,
};

const ETH: &str = "/org/freedesktop/NetworkManager/Devices/1";
const WLAN: &str = "/org/freedesktop/NetworkManager/Devices/2";
const BR: &str = "/org/freedesktop/NetworkManager/Devices/3";
const OVS: &str = "/org/freedesktop/NetworkManager/Devices/4";
const ROOT: &str = "/org/freedesktop/NetworkManager";

const BRIDGE: &str = "org.freedesktop.NetworkManager.Device.Bridge";
const WIRED: &str = "org.freedesktop.NetworkManager.Device.Wired";

fn bridged() -> MockBus {
    MockBus::new()
        .with_device(ETH, 1, "eth0")
        .with(ETH, WIRED, "Carrier", true)
        .with_device(WLAN, 2, "wlan0")
        .with_device(BR, 13, "br0")
        .with(BR, BRIDGE, "HwAddress", "02:00:00:00:00:01")
        .with(BR, BRIDGE, "Carrier", true)
        .with(BR, BRIDGE, "Slaves", common::paths(&[ETH, WLAN]))
}

#[test]
fn test_resolves_by_device_type() {
    let (bus, _nm) = bridged().into_nm();

    let eth = resolve_device(common::handle(&bus, ETH)).unwrap();
    assert!(matches!(eth, Device::Wired(_)));
    assert_eq!(eth.device_type(), DeviceType::Ethernet);
    assert_eq!(eth.interface(), WIRED);
    assert_eq!(eth.path().as_str(), ETH);

    let wlan = resolve_device(common::handle(&bus, WLAN)).unwrap();
    assert!(wlan.as_wireless().is_some());
    assert_eq!(wlan.snapshot_policy(), SnapshotPolicy::BestEffort);
}

#[test]
fn test_unknown_device_type_is_unsupported() {
    // 24 is an OVS interface, which has no wrapper
    let (bus, _nm) = MockBus::new()
        .with(OVS, DEVICE, "DeviceType", 24u32)
        .into_nm();

    match resolve_device(common::handle(&bus, OVS)) {
        Err(NmError::UnsupportedVariant {
            discriminator,
            value,
            path,
        }) => {
            assert_eq!(discriminator, "DeviceType");
            assert_eq!(value, "24");
            assert_eq!(path, OVS);
        }
        other => panic!("expected UnsupportedVariant, got {other:?}"),
    }
    // Only the discriminator was read
    assert_eq!(bus.calls(), ["DeviceType"]);
}

#[test]
fn test_discriminator_transport_error_propagates() {
    let (bus, _nm) = MockBus::new()
        .failing(ETH, DEVICE, "DeviceType", "access denied")
        .into_nm();

    match resolve_device(common::handle(&bus, ETH)) {
        Err(NmError::Transport(zbus::Error::Failure(msg))) => assert_eq!(msg, "access denied"),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn test_discriminator_wrong_type_is_mismatch() {
    let (bus, _nm) = MockBus::new()
        .with(ETH, DEVICE, "DeviceType", "ethernet")
        .into_nm();

    assert!(matches!(
        resolve_device(common::handle(&bus, ETH)),
        Err(NmError::TypeMismatch { .. })
    ));
}

#[test]
fn test_bridge_slaves_resolve_polymorphically() {
    let (bus, _nm) = bridged().into_nm();

    let Device::Bridge(bridge) = resolve_device(common::handle(&bus, BR)).unwrap() else {
        panic!("expected a bridge");
    };
    let slaves = bridge.slaves().unwrap();

    assert_eq!(slaves.len(), 2);
    assert!(matches!(slaves[0], Device::Wired(_)));
    assert!(matches!(slaves[1], Device::Wireless(_)));
    assert_eq!(slaves[1].core().interface_name().unwrap(), "wlan0");
}

#[test]
fn test_bridge_snapshot_nests_slaves() {
    let (bus, _nm) = bridged().into_nm();
    let bridge = resolve_device(common::handle(&bus, BR)).unwrap();

    let snapshot = bridge.snapshot().unwrap();
    assert_eq!(snapshot.get("Interface").unwrap(), "br0");
    assert_eq!(snapshot.get("DeviceType").unwrap(), "Bridge");
    assert_eq!(snapshot.get("Carrier").unwrap(), true);

    let slaves = snapshot.get("Slaves").unwrap().as_array().unwrap();
    assert_eq!(slaves.len(), 2);
    assert_eq!(slaves[0]["Interface"], "eth0");
    assert_eq!(slaves[0]["Carrier"], true);
    assert_eq!(slaves[1]["Interface"], "wlan0");
}

#[test]
fn test_bridge_snapshot_drops_unresolvable_slaves() {
    let (bus, _nm) = bridged()
        .with(OVS, DEVICE, "DeviceType", 24u32)
        .with(BR, BRIDGE, "Slaves", common::paths(&[ETH, OVS]))
        .into_nm();
    let bridge = resolve_device(common::handle(&bus, BR)).unwrap();

    let snapshot = bridge.snapshot().unwrap();
    assert!(!snapshot.contains_key("Slaves"));
    assert_eq!(snapshot.get("HwAddress").unwrap(), "02:00:00:00:00:01");
}

#[test]
fn test_bridge_snapshot_fails_on_shared_field() {
    let (bus, _nm) = bridged()
        .failing(BR, DEVICE, "Interface", "object vanished")
        .into_nm();
    let bridge = resolve_device(common::handle(&bus, BR)).unwrap();

    match bridge.snapshot() {
        Err(NmError::Transport(zbus::Error::Failure(msg))) => {
            assert_eq!(msg, "object vanished")
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    assert!(!bus.calls().iter().any(|c| c == "Slaves"));
}

#[test]
fn test_bridge_snapshot_fails_on_slave_shared_field() {
    let (bus, _nm) = bridged()
        .failing(WLAN, DEVICE, "Mtu", "object vanished")
        .into_nm();
    let bridge = resolve_device(common::handle(&bus, BR)).unwrap();

    // The slave resolves, so its snapshot error is not a missing field
    assert!(matches!(bridge.snapshot(), Err(NmError::Transport(_))));
}

#[test]
fn test_manager_devices_resolve() {
    let (_bus, nm) = bridged()
        .with(ROOT, NM, "Devices", common::paths(&[ETH, WLAN, BR]))
        .into_nm();

    let types: Vec<DeviceType> = nm.devices().unwrap().iter().map(Device::device_type).collect();
    assert_eq!(
        types,
        [DeviceType::Ethernet, DeviceType::Wifi, DeviceType::Bridge]
    );

    let found = nm.device_by_interface("br0").unwrap().unwrap();
    assert_eq!(found.path().as_str(), BR);
    assert!(nm.device_by_interface("eth9").unwrap().is_none());
}

const CONN: &str = "/org/freedesktop/NetworkManager/ActiveConnection/1";

#[test]
fn test_active_connection_vpn() {
    let (_bus, nm) = MockBus::new()
        .with(CONN, ACTIVE, "Type", "vpn")
        .with(CONN, "org.freedesktop.NetworkManager.VPN.Connection", "VpnState", 5u32)
        .into_nm();

    let conn = nm.active_connection(common::owned_path(CONN)).unwrap();
    let vpn = conn.as_vpn().expect("a VPN connection");
    assert_eq!(vpn.vpn_state().unwrap().to_string(), "activated");
    assert_eq!(conn.interface(), "org.freedesktop.NetworkManager.VPN.Connection");
}

#[test]
fn test_active_connection_standard() {
    for ty in ["802-11-wireless", "802-3-ethernet", "bridge", "pppoe"] {
        let (_bus, nm) = MockBus::new().with(CONN, ACTIVE, "Type", ty).into_nm();
        let conn = nm.active_connection(common::owned_path(CONN)).unwrap();
        assert!(matches!(conn, ActiveConnection::Standard(_)), "{ty}");
    }
}

#[test]
fn test_active_connection_unknown_type() {
    let (_bus, nm) = MockBus::new().with(CONN, ACTIVE, "Type", "team").into_nm();

    match nm.active_connection(common::owned_path(CONN)) {
        Err(NmError::UnsupportedVariant {
            discriminator,
            value,
            ..
        }) => {
            assert_eq!(discriminator, "Type");
            assert_eq!(value, "team");
        }
        other => panic!("expected UnsupportedVariant, got {other:?}"),
    }
}

#[test]
fn test_no_caching_between_resolutions() {
    let (bus, _nm) = bridged().into_nm();

    resolve_device(common::handle(&bus, ETH)).unwrap();
    resolve_device(common::handle(&bus, ETH)).unwrap();
    assert_eq!(bus.calls(), ["DeviceType", "DeviceType"]);
}
