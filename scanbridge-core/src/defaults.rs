//! Wire names and default values shared with the host app.

/// Channel carrying SDK lifecycle and session-start calls.
pub const SDK_CHANNEL: &str = "com.facetec.sdk";
/// Channel carrying liveness-check processor calls and events.
pub const LIVENESS_CHANNEL: &str = "com.facetec.sdk/livenesscheck";
/// Channel carrying ID-scan processor calls and events.
pub const ID_SCAN_CHANNEL: &str = "com.facetec.sdk/idscann";

/// Method name of the outbound event carrying an intermediate scan result.
pub const PROCESS_SESSION_METHOD: &str = "processSession";

/// Value a session-start invocation resolves with once the SDK is completely done.
pub const SESSION_SUCCESS: &str = "Success";

/// `status` reported in outbound scan result messages.
pub const STATUS_COMPLETED_SUCCESSFULLY: &str = "sessionCompletedSuccessfully";

pub(crate) const LIVENESS_CANCELED_MESSAGE: &str =
    "Liveness check failed and session was canceled.";
pub(crate) const ID_SCAN_CANCELED_MESSAGE: &str = "ID scan failed and session was canceled.";

pub(crate) const PHOTO_ID_MATCH_SUCCESS_MESSAGE: &str = "Face Scanned\n3D Liveness Proven";
pub(crate) const BRANDING_IMAGE: &str = "FaceTec_logo";
pub(crate) const CAPTURE_SCREEN_BACKGROUND_COLOR: &str = "#FFFFFF";
pub(crate) const BUTTON_BACKGROUND_NORMAL_COLOR: &str = "#000000";
pub(crate) const BUTTON_TEXT_NORMAL_COLOR: &str = "#FFFFFF";
pub(crate) const BUTTON_TEXT_HIGHLIGHT_COLOR: &str = "#FFFFFF";
