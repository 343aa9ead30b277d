//! Platform capabilities the bridge consumes.
//!
//! The scanning SDK is closed-source and only reachable from the host platform, so every
//! capability is a foreign trait the host app implements and hands to
//! [`ScanBridge::new`](crate::ScanBridge::new).
//!
//! - [`ScanSdk`]: bootstrap, user-agent strings, customization and session controllers
//! - [`SessionView`]: a presentable scanning controller created by the SDK
//! - [`SurfacePresenter`]: the app's root surface that displays a [`SessionView`]
//! - [`ScanResultCallback`]: the resume handle the SDK blocks on after producing a sample
//! - [`EventSink`]: the outbound leg of the messaging channel
//!
//! # Example (Swift)
//!
//! ```swift
//! final class FaceScanCallbackBridge: ScanResultCallback {
//!     let callback: FaceTecFaceScanResultCallback
//!
//!     func proceedToNextStep(scanResultBlob: String) {
//!         callback.onFaceScanGoToNextStep(scanResultBlob: scanResultBlob)
//!     }
//!
//!     func cancel() {
//!         callback.onFaceScanResultCancel()
//!     }
//!     // ...
//! }
//! ```

use std::sync::Arc;

use crate::{IdScanMessageOverrides, OutboundEvent, ScanFlow, SdkMode};

/// The vendor scanning SDK.
#[uniffi::export(with_foreign)]
pub trait ScanSdk: Send + Sync {
    /// Bootstraps the SDK. Returns `true` on success.
    fn initialize(
        &self,
        device_key_identifier: String,
        public_face_scan_encryption_key: String,
        mode: SdkMode,
    ) -> bool;

    /// Human-readable description of the SDK's current status, used to explain a failed
    /// bootstrap.
    fn status_description(&self) -> String;

    /// Builds the opaque user-agent string expected by the scanning backend. `session_id` is
    /// empty outside of a session.
    fn create_api_user_agent_string(&self, session_id: String) -> String;

    /// Applies visual options to the next session.
    fn set_customization(&self, customization: ScanCustomization);

    /// Creates a presentable controller for a new session of `flow`.
    fn create_session_view(&self, flow: ScanFlow, session_token: String) -> Arc<dyn SessionView>;
}

/// A scanning controller created by the SDK, ready to be presented.
#[uniffi::export(with_foreign)]
pub trait SessionView: Send + Sync {
    /// The flow this controller runs.
    fn flow(&self) -> ScanFlow;
}

/// The app surface that displays SDK controllers.
#[uniffi::export(with_foreign)]
pub trait SurfacePresenter: Send + Sync {
    /// Presents `view` over the app's root surface. Returns `false` if there is no root
    /// surface to present on.
    fn present(&self, view: Arc<dyn SessionView>) -> bool;
}

/// The resume handle the SDK blocks on after producing a scan sample.
///
/// Exactly one of [`proceed_to_next_step`](Self::proceed_to_next_step) or
/// [`cancel`](Self::cancel) is called per handle. The upload notifications may be called any
/// number of times before that.
#[uniffi::export(with_foreign)]
pub trait ScanResultCallback: Send + Sync {
    /// Lets the SDK continue with the backend's response blob.
    fn proceed_to_next_step(&self, scan_result_blob: String);

    /// Aborts the SDK's pending step.
    fn cancel(&self);

    /// Replaces the upload message shown while the sample is being processed.
    fn upload_message_override(&self, message: String);

    /// Reports upload progress, from `0.0` to `100.0`.
    fn upload_progress(&self, uploaded_percent: f32);
}

/// The outbound leg of the host app's messaging channel.
#[uniffi::export(with_foreign)]
pub trait EventSink: Send + Sync {
    /// Delivers an event to the host app.
    fn send(&self, event: OutboundEvent);
}

/// Visual options pushed to the SDK before a session is created.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ScanCustomization {
    /// Asset name of the overlay branding image.
    pub branding_image: Option<String>,
    /// Options for the ID-scan screens. `None` for face-scan sessions.
    pub id_scan: Option<IdScanCustomization>,
    /// ID-scan upload and result screen texts. `None` for plain liveness sessions.
    pub id_scan_messages: Option<IdScanMessageOverrides>,
    /// Result screen text shown on success, replacing the SDK's own.
    pub result_screen_success_message: Option<String>,
}

/// ID-scan screen options.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct IdScanCustomization {
    /// Whether the capture frame is set up for the back side of the document.
    pub is_back_scan: bool,
    /// Show the document image on the selection screen.
    pub show_selection_screen_document_image: bool,
    /// Capture screen background, as `#RRGGBB`.
    pub capture_screen_background_color: String,
    /// Button background in its normal state.
    pub button_background_normal_color: String,
    /// Button text in its normal state.
    pub button_text_normal_color: String,
    /// Button text while highlighted.
    pub button_text_highlight_color: String,
}

/// Terminal status the SDK reports with a face-scan sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum SessionStatus {
    /// The sample was captured and is ready to be processed.
    SessionCompletedSuccessfully,
    /// The user backed out.
    UserCancelled,
    /// The session timed out.
    Timeout,
    /// The app was backgrounded mid-session.
    ContextSwitch,
    /// The camera could not be used.
    CameraPermissionDenied,
    /// Too many failed attempts.
    LockedOut,
    /// The SDK was not initialized.
    NotInitialized,
    /// Any other status.
    UnknownInternalError,
}

/// Terminal status the SDK reports with an ID-scan sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum IdScanStatus {
    /// The document was captured.
    Success,
    /// The capture did not succeed.
    Unsuccess,
    /// The user backed out.
    UserCancelled,
    /// The session timed out.
    TimedOut,
    /// The app was backgrounded mid-session.
    ContextSwitch,
    /// The camera could not be used.
    CameraError,
    /// The user skipped the ID scan.
    Skipped,
}

/// Face-scan sample handed over by the SDK while it waits for a decision.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FaceScanSessionResult {
    /// Outcome of the capture.
    pub status: SessionStatus,
    /// SDK session identifier.
    pub session_id: String,
    /// Encrypted face scan.
    pub face_scan_base64: Option<String>,
    /// Audit trail images; only the first one is relayed.
    pub audit_trail_compressed_base64: Option<Vec<String>>,
    /// Low quality audit trail images; only the first one is relayed.
    pub low_quality_audit_trail_compressed_base64: Option<Vec<String>>,
}

/// ID-scan sample handed over by the SDK while it waits for a decision.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct IdScanSessionResult {
    /// Outcome of the capture.
    pub status: IdScanStatus,
    /// SDK session identifier.
    pub session_id: String,
    /// Encrypted ID scan.
    pub id_scan_base64: Option<String>,
    /// Front side images; only the first one is relayed.
    pub front_images: Option<Vec<String>>,
    /// Back side images; only the first one is relayed.
    pub back_images: Option<Vec<String>>,
}
