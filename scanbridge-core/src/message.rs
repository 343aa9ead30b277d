use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::defaults::{PROCESS_SESSION_METHOD, STATUS_COMPLETED_SUCCESSFULLY};
use crate::{
    ArgValue, BridgeError, Channel, FaceScanSessionResult, IdScanSessionResult, ScanFlow,
    ScanVariant,
};

/// Liveness sample relayed to the host app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LivenessScanMessage {
    /// Always `sessionCompletedSuccessfully`; unsuccessful samples are never relayed.
    pub status: String,
    /// SDK session identifier.
    pub session_id: String,
    /// User-agent string for the backend call, bound to the session.
    #[serde(rename = "ftUserAgentString")]
    pub user_agent: String,
    /// `liveness`, or `faceScan` for a photo ID match.
    pub scan_type: String,
    /// First low quality audit trail image.
    pub low_quality_audit_trail_compressed_base64: Option<String>,
    /// First audit trail image.
    pub audit_trail_compressed_base64: Option<String>,
    /// Encrypted face scan.
    pub face_scan_base64: Option<String>,
}

impl LivenessScanMessage {
    /// Normalizes a successful face-scan sample taken for the `requested` variant.
    #[must_use]
    pub fn from_session_result(
        result: &FaceScanSessionResult,
        requested: ScanVariant,
        user_agent: String,
    ) -> Self {
        Self {
            status: STATUS_COMPLETED_SUCCESSFULLY.to_string(),
            session_id: result.session_id.clone(),
            user_agent,
            scan_type: requested.scan_type().to_string(),
            low_quality_audit_trail_compressed_base64: first(
                result.low_quality_audit_trail_compressed_base64.as_deref(),
            ),
            audit_trail_compressed_base64: first(result.audit_trail_compressed_base64.as_deref()),
            face_scan_base64: result.face_scan_base64.clone(),
        }
    }
}

/// ID-scan sample relayed to the host app.
///
/// Image keys are omitted when the SDK returned no image for that side. The side flags come
/// from the variant requested at launch, never from the SDK's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)] // wire format
pub struct IdScanMessage {
    /// Always `sessionCompletedSuccessfully`.
    pub status: String,
    /// SDK session identifier.
    pub session_id: String,
    /// User-agent string for the backend call, bound to the session.
    #[serde(rename = "ftUserAgentString")]
    pub user_agent: String,
    /// Always `idScan`.
    pub scan_type: String,
    /// Always `true`.
    pub success: bool,
    /// Encrypted ID scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_base64: Option<String>,
    /// First front side image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_front_image: Option<String>,
    /// First back side image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_scan_back_image: Option<String>,
    /// The front side was requested.
    pub is_front_scan: bool,
    /// The back side was requested.
    pub is_back_scan: bool,
    /// The host still has to request the back side.
    pub is_back_scan_required: bool,
}

impl IdScanMessage {
    /// Normalizes a successful ID-scan sample for the `requested` variant.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if `requested` is not an ID-scan variant.
    pub fn from_id_scan_result(
        result: &IdScanSessionResult,
        requested: ScanVariant,
        user_agent: String,
    ) -> Result<Self, BridgeError> {
        let flags = requested.side_flags().ok_or_else(|| BridgeError::Internal {
            message: format!("{requested} is not an ID scan variant"),
        })?;

        Ok(Self {
            status: STATUS_COMPLETED_SUCCESSFULLY.to_string(),
            session_id: result.session_id.clone(),
            user_agent,
            scan_type: requested.scan_type().to_string(),
            success: true,
            id_scan_base64: result.id_scan_base64.clone(),
            id_scan_front_image: first(result.front_images.as_deref()),
            id_scan_back_image: first(result.back_images.as_deref()),
            is_front_scan: flags.is_front_scan,
            is_back_scan: flags.is_back_scan,
            is_back_scan_required: flags.is_back_scan_required,
        })
    }
}

/// The normalized payload of a `processSession` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScanResultMessage {
    /// A liveness sample.
    Liveness(LivenessScanMessage),
    /// An ID-scan sample.
    IdScan(IdScanMessage),
}

impl ScanResultMessage {
    /// The flow this message is reported on.
    #[must_use]
    pub const fn flow(&self) -> ScanFlow {
        match self {
            Self::Liveness(_) => ScanFlow::Liveness,
            Self::IdScan(_) => ScanFlow::IdScan,
        }
    }

    /// Flattens the message into the key-value payload sent over the channel.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the message cannot be serialized.
    pub fn to_payload(&self) -> Result<HashMap<String, ArgValue>, BridgeError> {
        let internal = |message: String| BridgeError::Internal { message };

        match serde_json::to_value(self).map_err(|e| internal(e.to_string()))? {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| ArgValue::from_json(value).map(|value| (key, value)))
                .collect(),
            other => Err(internal(format!("scan result serialized to {other}"))),
        }
    }

    /// Wraps the message into the `processSession` event for its flow's channel.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the message cannot be serialized.
    pub fn into_event(self) -> Result<OutboundEvent, BridgeError> {
        Ok(OutboundEvent {
            channel: Channel::for_flow(self.flow()),
            method: PROCESS_SESSION_METHOD.to_string(),
            payload: self.to_payload()?,
        })
    }
}

/// An event delivered to the host app through the [`EventSink`](crate::EventSink).
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct OutboundEvent {
    /// Channel the event is delivered on.
    pub channel: Channel,
    /// Method invoked on the host side.
    pub method: String,
    /// Event arguments.
    pub payload: HashMap<String, ArgValue>,
}

/// The answer to an inbound method call.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum MethodReply {
    /// The call succeeded. Acknowledgements carry `Null`.
    Success {
        /// The result value.
        value: ArgValue,
    },
    /// The call failed.
    Error {
        /// Short error code, e.g. `InvalidArguments` or `IDScanFailed`.
        code: String,
        /// Human-readable message.
        message: String,
    },
    /// The channel does not implement the method. Not an error.
    NotImplemented,
}

impl MethodReply {
    pub(crate) const fn ack() -> Self {
        Self::Success {
            value: ArgValue::Null,
        }
    }

    pub(crate) fn success(value: impl Into<ArgValue>) -> Self {
        Self::Success {
            value: value.into(),
        }
    }
}

impl From<Result<MethodReply, BridgeError>> for MethodReply {
    fn from(result: Result<MethodReply, BridgeError>) -> Self {
        result.unwrap_or_else(|error| Self::Error {
            code: error.code().to_string(),
            message: error.to_string(),
        })
    }
}

fn first(values: Option<&[String]>) -> Option<String> {
    values.and_then(<[String]>::first).cloned()
}
