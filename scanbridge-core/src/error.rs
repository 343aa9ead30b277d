use thiserror::Error;

use crate::defaults::{ID_SCAN_CANCELED_MESSAGE, LIVENESS_CANCELED_MESSAGE};
use crate::ScanFlow;

/// Error outputs from `ScanBridge`.
///
/// Every variant maps to the short code the host app receives through [`BridgeError::code`].
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum BridgeError {
    /// A required argument was missing or had the wrong type. No SDK call was made.
    #[error("{message}")]
    InvalidArguments {
        /// What was wrong with the arguments.
        message: String,
    },
    /// The SDK failed to initialize.
    #[error("{message}")]
    InitError {
        /// The SDK's description of its current status.
        message: String,
    },
    /// The liveness check was canceled before it completed.
    #[error("{message}")]
    LivenessCheckFailed {
        /// Human-readable reason.
        message: String,
    },
    /// The ID scan was canceled before it completed.
    #[error("{message}")]
    IdScanFailed {
        /// Human-readable reason.
        message: String,
    },
    /// A session was started while another one is still outstanding.
    #[error("session already in progress: {active}")]
    SessionInProgress {
        /// The flow of the session that is still outstanding.
        active: ScanFlow,
    },
    /// The SDK handed over a resume handle while a previous one was still unconsumed.
    #[error("result callback already awaiting a decision: {flow}")]
    HandleAlreadyParked {
        /// The flow whose slot was occupied.
        flow: ScanFlow,
    },
    /// Unexpected internal failure.
    #[error("internal_error: {message}")]
    Internal {
        /// Details.
        message: String,
    },
}

impl BridgeError {
    /// Returns the short error code delivered to the host app.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArguments { .. } => "InvalidArguments",
            Self::InitError { .. } => "InitError",
            Self::LivenessCheckFailed { .. } => "LivenessCheckFailed",
            Self::IdScanFailed { .. } => "IDScanFailed",
            Self::SessionInProgress { .. } => "SessionInProgress",
            Self::HandleAlreadyParked { .. } => "HandleAlreadyParked",
            Self::Internal { .. } => "InternalError",
        }
    }

    pub(crate) fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    /// The error a pending invocation of `flow` resolves with when its session is canceled.
    pub(crate) fn canceled(flow: ScanFlow) -> Self {
        match flow {
            ScanFlow::Liveness => Self::LivenessCheckFailed {
                message: LIVENESS_CANCELED_MESSAGE.to_string(),
            },
            ScanFlow::IdScan => Self::IdScanFailed {
                message: ID_SCAN_CANCELED_MESSAGE.to_string(),
            },
        }
    }
}
