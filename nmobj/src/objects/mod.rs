//! Typed wrappers for NetworkManager D-Bus objects.

pub mod access_point;
pub mod active_connection;
pub mod device;
pub mod ip_config;
pub mod manager;
pub mod settings;
