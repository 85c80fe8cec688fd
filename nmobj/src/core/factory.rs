//! Resolves object paths to the most specific wrapper type.
//!
//! Resolution reads a discriminator property from the remote object and
//! looks it up in an explicit table. Unknown discriminators are reported as
//! [`NmError::UnsupportedVariant`] and nothing is constructed. Nothing is
//! cached: every call reads the discriminator again.

use log::debug;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::api::models::NmError;
use crate::core::object::{NmObject, ObjectHandle};
use crate::objects::active_connection::{ActiveConnection, ActiveConnectionCore, VpnConnection};
use crate::objects::device::{Device, DeviceCore};
use crate::types::constants::connection_type;
use crate::types::device_type_registry::{get_device_type_info, is_device_connection_type};
use crate::types::schema::{active_connection, device};

/// Builds the [`Device`] variant matching the object's `DeviceType`.
///
/// # Errors
///
/// - [`NmError::Transport`] if the discriminator cannot be read
/// - [`NmError::TypeMismatch`] if it is not a `u32`
/// - [`NmError::UnsupportedVariant`] if no wrapper exists for the code
pub fn resolve_device(handle: ObjectHandle) -> Result<Device> {
    let core = DeviceCore::new(handle);
    let code = core.device_type_code()?;

    let Some(info) = get_device_type_info(code) else {
        debug!(
            "no wrapper for device type {code} at {}",
            core.handle().path().as_str()
        );
        return Err(NmError::UnsupportedVariant {
            discriminator: device::DEVICE_TYPE.name,
            value: code.to_string(),
            path: core.handle().path().as_str().to_owned(),
        });
    };

    debug!(
        "resolved {} as {} device",
        core.handle().path().as_str(),
        info.display_name()
    );
    Ok(info.wrap(core.into_handle()))
}

/// Resolves every path in order. The first failure aborts the whole list.
pub fn resolve_devices(origin: &ObjectHandle, paths: Vec<OwnedObjectPath>) -> Result<Vec<Device>> {
    paths
        .into_iter()
        .map(|p| resolve_device(origin.rebind(p)))
        .collect()
}

/// Builds the [`ActiveConnection`] variant matching the object's `Type`.
///
/// `"vpn"` yields [`ActiveConnection::Vpn`]; any connection type a known
/// device can carry yields [`ActiveConnection::Standard`].
///
/// # Errors
///
/// As [`resolve_device`], with `Type` as the discriminator.
pub fn resolve_active_connection(handle: ObjectHandle) -> Result<ActiveConnection> {
    let core = ActiveConnectionCore::new(handle);
    let ty = core.connection_type()?;

    if ty == connection_type::VPN {
        debug!("resolved {} as VPN connection", core.handle().path().as_str());
        return Ok(ActiveConnection::Vpn(VpnConnection::from(core.into_handle())));
    }

    if is_device_connection_type(&ty) {
        debug!("resolved {} as {ty} connection", core.handle().path().as_str());
        return Ok(ActiveConnection::Standard(core));
    }

    debug!(
        "no wrapper for connection type {ty} at {}",
        core.handle().path().as_str()
    );
    Err(NmError::UnsupportedVariant {
        discriminator: active_connection::TYPE.name,
        value: ty,
        path: core.handle().path().as_str().to_owned(),
    })
}

/// Resolves every active connection path in order.
pub fn resolve_active_connections(
    origin: &ObjectHandle,
    paths: Vec<OwnedObjectPath>,
) -> Result<Vec<ActiveConnection>> {
    paths
        .into_iter()
        .map(|p| resolve_active_connection(origin.rebind(p)))
        .collect()
}
