//! Common test utilities shared across integration tests.

// Not every integration test uses every fake.
#![allow(dead_code, missing_docs)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use scanbridge_core::{
    ArgValue, BridgeConfig, EventSink, FaceScanSessionResult, IdScanSessionResult,
    IdScanStatus, OutboundEvent, ScanBridge, ScanCustomization, ScanFlow, ScanResultCallback,
    ScanSdk, SdkMode, SessionStatus, SessionView, SurfacePresenter,
};

static TRACING: Once = Once::new();

/// Routes the bridge's logs to the test output. Filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Debug, Clone, PartialEq)]
pub enum SdkCall {
    Initialize {
        device_key_identifier: String,
        public_face_scan_encryption_key: String,
        mode: SdkMode,
    },
    SetCustomization(ScanCustomization),
    CreateSessionView {
        flow: ScanFlow,
        session_token: String,
    },
}

/// SDK fake that records every call that changes its state.
pub struct FakeSdk {
    initializes: bool,
    calls: Mutex<Vec<SdkCall>>,
}

impl FakeSdk {
    pub fn new() -> Self {
        Self {
            initializes: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_initialization() -> Self {
        Self {
            initializes: false,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<SdkCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn customizations(&self) -> Vec<ScanCustomization> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SdkCall::SetCustomization(customization) => Some(customization),
                _ => None,
            })
            .collect()
    }

    pub fn sessions_created(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, SdkCall::CreateSessionView { .. }))
            .count()
    }
}

impl Default for FakeSdk {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSdk for FakeSdk {
    fn initialize(
        &self,
        device_key_identifier: String,
        public_face_scan_encryption_key: String,
        mode: SdkMode,
    ) -> bool {
        self.calls.lock().unwrap().push(SdkCall::Initialize {
            device_key_identifier,
            public_face_scan_encryption_key,
            mode,
        });
        self.initializes
    }

    fn status_description(&self) -> String {
        if self.initializes {
            "Initialized".to_string()
        } else {
            "Key validation failed".to_string()
        }
    }

    fn create_api_user_agent_string(&self, session_id: String) -> String {
        format!("facetec|sdk|ios|{session_id}")
    }

    fn set_customization(&self, customization: ScanCustomization) {
        self.calls
            .lock()
            .unwrap()
            .push(SdkCall::SetCustomization(customization));
    }

    fn create_session_view(&self, flow: ScanFlow, session_token: String) -> Arc<dyn SessionView> {
        self.calls.lock().unwrap().push(SdkCall::CreateSessionView {
            flow,
            session_token,
        });
        Arc::new(FakeView(flow))
    }
}

pub struct FakeView(ScanFlow);

impl SessionView for FakeView {
    fn flow(&self) -> ScanFlow {
        self.0
    }
}

/// Root surface fake. A presenter without a root surface refuses every view.
pub struct FakePresenter {
    has_root: bool,
    presented: Mutex<Vec<ScanFlow>>,
}

impl FakePresenter {
    pub fn new() -> Self {
        Self {
            has_root: true,
            presented: Mutex::new(Vec::new()),
        }
    }

    pub fn without_root() -> Self {
        Self {
            has_root: false,
            ..Self::new()
        }
    }

    pub fn presented(&self) -> Vec<ScanFlow> {
        self.presented.lock().unwrap().clone()
    }
}

impl SurfacePresenter for FakePresenter {
    fn present(&self, view: Arc<dyn SessionView>) -> bool {
        if self.has_root {
            self.presented.lock().unwrap().push(view.flow());
        }
        self.has_root
    }
}

#[derive(Default)]
pub struct CollectingSink(Mutex<Vec<OutboundEvent>>);

impl CollectingSink {
    pub fn events(&self) -> Vec<OutboundEvent> {
        self.0.lock().unwrap().clone()
    }
}

impl EventSink for CollectingSink {
    fn send(&self, event: OutboundEvent) {
        self.0.lock().unwrap().push(event);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallbackCall {
    Proceed(String),
    Cancel,
    UploadMessage(String),
    UploadProgress(f32),
}

#[derive(Default)]
pub struct RecordingCallback(Mutex<Vec<CallbackCall>>);

impl RecordingCallback {
    pub fn calls(&self) -> Vec<CallbackCall> {
        self.0.lock().unwrap().clone()
    }
}

impl ScanResultCallback for RecordingCallback {
    fn proceed_to_next_step(&self, scan_result_blob: String) {
        self.0
            .lock()
            .unwrap()
            .push(CallbackCall::Proceed(scan_result_blob));
    }

    fn cancel(&self) {
        self.0.lock().unwrap().push(CallbackCall::Cancel);
    }

    fn upload_message_override(&self, message: String) {
        self.0
            .lock()
            .unwrap()
            .push(CallbackCall::UploadMessage(message));
    }

    fn upload_progress(&self, uploaded_percent: f32) {
        self.0
            .lock()
            .unwrap()
            .push(CallbackCall::UploadProgress(uploaded_percent));
    }
}

/// A bridge together with the fakes it was built on.
pub struct Harness {
    pub bridge: Arc<ScanBridge>,
    pub sdk: Arc<FakeSdk>,
    pub presenter: Arc<FakePresenter>,
    pub sink: Arc<CollectingSink>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(FakeSdk::new(), FakePresenter::new(), None)
    }

    pub fn with(sdk: FakeSdk, presenter: FakePresenter, config: Option<BridgeConfig>) -> Self {
        init_tracing();
        let sdk = Arc::new(sdk);
        let presenter = Arc::new(presenter);
        let sink = Arc::new(CollectingSink::default());
        let bridge = ScanBridge::new(sdk.clone(), presenter.clone(), sink.clone(), config);
        Self {
            bridge,
            sdk,
            presenter,
            sink,
        }
    }

    /// Waits until `count` sessions have been presented.
    pub async fn wait_for_presented(&self, count: usize) {
        for _ in 0..500 {
            if self.presenter.presented().len() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        panic!("session was never presented");
    }
}

pub fn args(pairs: &[(&str, ArgValue)]) -> HashMap<String, ArgValue> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

pub fn face_scan(status: SessionStatus) -> FaceScanSessionResult {
    FaceScanSessionResult {
        status,
        session_id: "session-1".to_string(),
        face_scan_base64: Some("face-scan".to_string()),
        audit_trail_compressed_base64: Some(vec!["audit-1".to_string(), "audit-2".to_string()]),
        low_quality_audit_trail_compressed_base64: Some(vec!["low-1".to_string()]),
    }
}

pub fn id_scan(
    status: IdScanStatus,
    front_images: Option<Vec<&str>>,
    back_images: Option<Vec<&str>>,
) -> IdScanSessionResult {
    let owned = |images: Option<Vec<&str>>| {
        images.map(|images| images.into_iter().map(str::to_string).collect())
    };
    IdScanSessionResult {
        status,
        session_id: "session-2".to_string(),
        id_scan_base64: Some("id-scan".to_string()),
        front_images: owned(front_images),
        back_images: owned(back_images),
    }
}
