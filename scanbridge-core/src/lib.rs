#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
//! Bridge between a mobile app's messaging channel and a closed-source biometric scanning SDK
//! (face liveness checks and ID document scans).
//!
//! The host app forwards inbound channel calls to [`ScanBridge`], which starts SDK sessions,
//! relays the SDK's intermediate samples back over the channel, parks the SDK's resume handle
//! until the app decides how to proceed, and resolves the original call once the SDK is done.
//!
//! All platform pieces (the SDK itself, the root surface, the outbound channel and the log
//! sink) are foreign traits implemented by the host; see [`ScanSdk`].

mod args;
pub use args::*;

mod bridge;
pub use bridge::*;

mod channel;
pub use channel::Channel;

mod config;
pub use config::*;

pub mod defaults;

mod error;
pub use error::*;

pub mod logger;

mod message;
pub use message::*;

mod overrides;
pub use overrides::*;

mod registry;
pub use registry::SessionPhase;

mod sdk;
pub use sdk::*;

mod variant;
pub use variant::*;

// private modules
mod launcher;
mod relay;
mod resolver;
mod router;

#[cfg(test)]
mod tests_utils;

uniffi::setup_scaffolding!("scanbridge_core");
