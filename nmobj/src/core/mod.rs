//! Core machinery shared by every wrapper.
//!
//! The object handle and typed accessor, snapshot policies, and the
//! factory that turns object paths into concrete wrapper types.

pub mod factory;
pub mod object;
pub mod snapshot;
