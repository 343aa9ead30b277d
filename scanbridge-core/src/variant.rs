use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The delegate family a session belongs to.
///
/// The SDK exposes one result-callback contract for face scans and another for ID scans, so
/// pending invocations and parked handles are kept per flow.
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
pub enum ScanFlow {
    /// A live face scan proving the subject is a real, present human.
    Liveness,
    /// A document capture session covering the front and/or back of an identity document.
    IdScan,
}

/// Which scan an invocation concerns.
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
pub enum ScanVariant {
    /// Face liveness check.
    Liveness,
    /// Front side of an identity document.
    IdFront,
    /// Back side of an identity document.
    IdBack,
    /// Face scan matched against a previously captured photo ID. Reported through the
    /// face-scan delegate.
    PhotoIdMatch,
}

impl ScanVariant {
    /// Picks the ID-scan variant for the requested side.
    #[must_use]
    pub const fn id_scan(is_back_scan: bool) -> Self {
        if is_back_scan {
            Self::IdBack
        } else {
            Self::IdFront
        }
    }

    /// The delegate family this variant is reported through.
    #[must_use]
    pub const fn flow(self) -> ScanFlow {
        match self {
            Self::Liveness | Self::PhotoIdMatch => ScanFlow::Liveness,
            Self::IdFront | Self::IdBack => ScanFlow::IdScan,
        }
    }

    /// The `scanType` reported in outbound messages for this variant.
    #[must_use]
    pub const fn scan_type(self) -> &'static str {
        match self {
            Self::Liveness => "liveness",
            Self::IdFront | Self::IdBack => "idScan",
            Self::PhotoIdMatch => "faceScan",
        }
    }

    /// Whether the session shows ID-scan upload and result screens.
    #[must_use]
    pub const fn shows_id_scan_screens(self) -> bool {
        !matches!(self, Self::Liveness)
    }

    /// Side flags reported with ID-scan results, derived from the requested variant only.
    ///
    /// A front scan always announces that the back still has to be captured; a back scan
    /// never does. `None` for the face-scan variants.
    #[must_use]
    pub const fn side_flags(self) -> Option<SideFlags> {
        match self {
            Self::Liveness | Self::PhotoIdMatch => None,
            Self::IdFront => Some(SideFlags {
                is_front_scan: true,
                is_back_scan: false,
                is_back_scan_required: true,
            }),
            Self::IdBack => Some(SideFlags {
                is_front_scan: false,
                is_back_scan: true,
                is_back_scan_required: false,
            }),
        }
    }
}

/// Which side of a document an ID-scan result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideFlags {
    /// The front side was requested.
    pub is_front_scan: bool,
    /// The back side was requested.
    pub is_back_scan: bool,
    /// The host still has to request the back side afterwards.
    pub is_back_scan_required: bool,
}

/// One externally initiated request to run a scanning session.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct SessionInvocation {
    /// Opaque session credential issued by the scanning backend.
    pub session_token: String,
    /// The scan being requested.
    pub variant: ScanVariant,
    /// Whether the host wants both document sides back. Informational; the SDK decides
    /// which images it returns.
    pub should_return_both_sides: bool,
}

impl SessionInvocation {
    /// A liveness check invocation.
    #[must_use]
    pub fn liveness(session_token: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
            variant: ScanVariant::Liveness,
            should_return_both_sides: false,
        }
    }

    /// A photo ID match invocation.
    #[must_use]
    pub fn photo_id_match(session_token: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
            variant: ScanVariant::PhotoIdMatch,
            should_return_both_sides: false,
        }
    }

    /// An ID-scan invocation for the requested side.
    #[must_use]
    pub fn id_scan(
        session_token: impl Into<String>,
        is_back_scan: bool,
        should_return_both_sides: bool,
    ) -> Self {
        Self {
            session_token: session_token.into(),
            variant: ScanVariant::id_scan(is_back_scan),
            should_return_both_sides,
        }
    }

    /// The delegate family of this invocation.
    #[must_use]
    pub const fn flow(&self) -> ScanFlow {
        self.variant.flow()
    }
}
