//! Type definitions and constants.
//!
//! NetworkManager constants, the property schema, and the device type
//! registry used by the factory.

pub mod constants;
pub(crate) mod device_type_registry;
pub mod schema;
