//! Swift and Kotlin bindings for `ScanBridge`.
//!
//! Everything lives in [`scanbridge_core`]; this crate only links it into the static and
//! dynamic libraries the mobile packages ship.

pub use scanbridge_core::*;
