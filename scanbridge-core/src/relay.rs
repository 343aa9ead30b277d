use std::sync::Arc;

use crate::registry::{ParkOutcome, SessionRegistry};
use crate::{
    BridgeError, EventSink, FaceScanSessionResult, IdScanMessage, IdScanSessionResult,
    IdScanStatus, LivenessScanMessage, ScanFlow, ScanResultCallback, ScanResultMessage, ScanSdk,
    SessionInvocation, SessionStatus,
};

/// Receives samples from the SDK's result delegates, relays them to the host app and resumes
/// the parked handle once the host has decided.
pub struct CallbackRelay {
    registry: Arc<SessionRegistry>,
    sdk: Arc<dyn ScanSdk>,
    sink: Arc<dyn EventSink>,
}

impl CallbackRelay {
    pub const fn new(
        registry: Arc<SessionRegistry>,
        sdk: Arc<dyn ScanSdk>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            registry,
            sdk,
            sink,
        }
    }

    /// Face-scan delegate entry point.
    pub fn on_face_scan_result(
        &self,
        result: &FaceScanSessionResult,
        callback: Arc<dyn ScanResultCallback>,
    ) -> Result<(), BridgeError> {
        if result.status != SessionStatus::SessionCompletedSuccessfully {
            tracing::info!(
                "face scan ended with {:?}, cancelling the pending step",
                result.status
            );
            callback.cancel();
            return Ok(());
        }

        self.relay(ScanFlow::Liveness, callback, |invocation| {
            let user_agent = self
                .sdk
                .create_api_user_agent_string(result.session_id.clone());
            Ok(ScanResultMessage::Liveness(
                LivenessScanMessage::from_session_result(result, invocation.variant, user_agent),
            ))
        })
    }

    /// ID-scan delegate entry point.
    pub fn on_id_scan_result(
        &self,
        result: &IdScanSessionResult,
        callback: Arc<dyn ScanResultCallback>,
    ) -> Result<(), BridgeError> {
        if result.status != IdScanStatus::Success {
            tracing::info!(
                "ID scan ended with {:?}, cancelling the pending step",
                result.status
            );
            callback.cancel();
            return Ok(());
        }

        self.relay(ScanFlow::IdScan, callback, |invocation| {
            tracing::debug!(
                "ID scan sample: front image {}, back image {}, requested {}",
                result.front_images.as_ref().is_some_and(|images| !images.is_empty()),
                result.back_images.as_ref().is_some_and(|images| !images.is_empty()),
                invocation.variant
            );
            let user_agent = self
                .sdk
                .create_api_user_agent_string(result.session_id.clone());
            IdScanMessage::from_id_scan_result(result, invocation.variant, user_agent)
                .map(ScanResultMessage::IdScan)
        })
    }

    /// Parks `callback`, then sends the message built for the pending invocation.
    ///
    /// The message is dropped if the session was canceled while it was being built.
    fn relay(
        &self,
        flow: ScanFlow,
        callback: Arc<dyn ScanResultCallback>,
        build: impl FnOnce(&SessionInvocation) -> Result<ScanResultMessage, BridgeError>,
    ) -> Result<(), BridgeError> {
        let invocation = match self.registry.park(flow, Arc::clone(&callback)) {
            ParkOutcome::Parked(invocation) => invocation,
            ParkOutcome::NoSession(callback) => {
                tracing::warn!("{flow} sample arrived with no pending session, cancelling");
                callback.cancel();
                return Ok(());
            }
            ParkOutcome::AlreadyParked(callback) => {
                tracing::error!("{flow} sample arrived while a previous one awaits a decision");
                callback.cancel();
                return Err(BridgeError::HandleAlreadyParked { flow });
            }
        };

        let event = match build(&invocation).and_then(ScanResultMessage::into_event) {
            Ok(event) => event,
            Err(error) => {
                // The host never hears about this sample, so nobody would resume the handle.
                if let Some(callback) = self.registry.take_handle(flow) {
                    callback.cancel();
                }
                return Err(error);
            }
        };

        // Whoever took the handle meanwhile (a cancel) has already dealt with it.
        if !self.registry.is_parked(flow, &callback) {
            tracing::info!("{} session canceled before its sample was sent", invocation.variant);
            return Ok(());
        }

        self.sink.send(event);
        Ok(())
    }

    /// Resumes the parked handle with the backend's response. No-op when nothing is parked.
    pub fn proceed(&self, flow: ScanFlow, scan_result_blob: String) {
        let Some(callback) = self.registry.take_handle(flow) else {
            tracing::debug!("{flow} scan result blob received with no parked handle");
            return;
        };
        callback.proceed_to_next_step(scan_result_blob);
    }

    /// Shows `message` while the SDK waits for the upload. The handle stays parked.
    pub fn upload_delay(&self, flow: ScanFlow, message: String) {
        let Some(callback) = self.registry.parked_handle(flow) else {
            tracing::debug!("{flow} upload delay reported with no parked handle");
            return;
        };
        callback.upload_message_override(message);
    }

    /// Forwards upload progress to the SDK. The handle stays parked.
    pub fn upload_progress(&self, flow: ScanFlow, uploaded_percent: f32) {
        if let Some(callback) = self.registry.parked_handle(flow) {
            callback.upload_progress(uploaded_percent.clamp(0.0, 100.0));
        }
    }
}
