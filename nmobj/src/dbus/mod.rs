//! D-Bus plumbing.
//!
//! The property transport and the wire-type layer that checks and decodes
//! raw variant payloads.

pub mod transport;
pub mod wire;
