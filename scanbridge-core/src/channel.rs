use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{BridgeConfig, ScanFlow};

/// The messaging channel a call arrived on, carried explicitly with every call and event.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
    uniffi::Enum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// SDK lifecycle and session-start calls.
    Sdk,
    /// Liveness-check processor calls and events.
    Liveness,
    /// ID-scan processor calls and events.
    IdScan,
}

impl Channel {
    /// The processor channel that carries a flow's results and decisions.
    #[must_use]
    pub const fn for_flow(flow: ScanFlow) -> Self {
        match flow {
            ScanFlow::Liveness => Self::Liveness,
            ScanFlow::IdScan => Self::IdScan,
        }
    }

    /// The flow a processor channel serves. `None` for the SDK channel.
    #[must_use]
    pub const fn flow(self) -> Option<ScanFlow> {
        match self {
            Self::Sdk => None,
            Self::Liveness => Some(ScanFlow::Liveness),
            Self::IdScan => Some(ScanFlow::IdScan),
        }
    }

    /// The transport name of this channel under `config`.
    #[must_use]
    pub fn name(self, config: &BridgeConfig) -> &str {
        match self {
            Self::Sdk => &config.sdk_channel,
            Self::Liveness => &config.liveness_channel,
            Self::IdScan => &config.id_scan_channel,
        }
    }

    /// Resolves a transport name to its channel under `config`.
    #[must_use]
    pub fn from_name(name: &str, config: &BridgeConfig) -> Option<Self> {
        [Self::Sdk, Self::Liveness, Self::IdScan]
            .into_iter()
            .find(|channel| channel.name(config) == name)
    }
}

/// Inbound methods understood by the router. Which channel accepts which method is decided
/// by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum BridgeMethod {
    #[strum(serialize = "initialize")]
    Initialize,
    #[strum(serialize = "startLivenessCheck")]
    StartLivenessCheck,
    // `startIdscann` is the name older hosts still send.
    #[strum(to_string = "startIdScan", serialize = "startIdscann")]
    StartIdScan,
    #[strum(serialize = "startMatchIdScan")]
    StartMatchIdScan,
    #[strum(serialize = "createAPIUserAgentString")]
    CreateApiUserAgentString,
    #[strum(serialize = "onScanResultBlobReceived")]
    OnScanResultBlobReceived,
    #[strum(serialize = "cancelFaceScan")]
    CancelFaceScan,
    #[strum(serialize = "cancelSession")]
    CancelSession,
    #[strum(serialize = "onScanResultUploadDelay")]
    OnScanResultUploadDelay,
}
