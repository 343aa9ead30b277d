use std::collections::HashMap;
use std::sync::Arc;

use crate::launcher::SessionLauncher;
use crate::registry::SessionRegistry;
use crate::relay::CallbackRelay;
use crate::resolver::CompletionResolver;
use crate::router::ChannelRouter;
use crate::{
    ArgValue, BridgeConfig, BridgeError, Channel, EventSink, FaceScanSessionResult,
    IdScanSessionResult, MethodArgs, MethodReply, ScanFlow, ScanResultCallback, ScanSdk,
    SessionPhase, SurfacePresenter,
};

/// Entry point for the host app.
///
/// The host forwards every inbound channel call to [`handle_method_call`](Self::handle_method_call)
/// and wires the SDK's result delegates to the `process_*` methods and
/// [`on_sdk_completely_done`](Self::on_sdk_completely_done).
///
/// # Example (Swift)
///
/// ```swift
/// let bridge = ScanBridge(sdk: sdk, presenter: presenter, sink: sink, config: nil)
///
/// channel.setMethodCallHandler { call, result in
///     Task {
///         switch await bridge.handleMethodCall(channel: .sdk, method: call.method, arguments: args) {
///         case .success(let value): result(value.toFlutter())
///         case .error(let code, let message): result(FlutterError(code: code, message: message, details: nil))
///         case .notImplemented: result(FlutterMethodNotImplemented)
///         }
///     }
/// }
///
/// func processSessionWhileFaceTecSDKWaits(sessionResult: FaceTecSessionResult,
///                                         faceScanResultCallback: FaceTecFaceScanResultCallback) {
///     try? bridge.processFaceScanWhileSdkWaits(result: sessionResult.toBridge(),
///                                              callback: FaceScanCallbackBridge(faceScanResultCallback))
/// }
///
/// func onFaceTecSDKCompletelyDone() {
///     bridge.onSdkCompletelyDone()
/// }
/// ```
#[derive(uniffi::Object)]
pub struct ScanBridge {
    router: ChannelRouter,
    relay: Arc<CallbackRelay>,
    resolver: Arc<CompletionResolver>,
    registry: Arc<SessionRegistry>,
    config: BridgeConfig,
}

#[uniffi::export]
#[allow(clippy::needless_pass_by_value)] // owned across FFI
impl ScanBridge {
    /// Creates a bridge over the host's SDK, root surface and outbound channel.
    ///
    /// `config` defaults to [`BridgeConfig::default`].
    #[uniffi::constructor]
    #[must_use]
    pub fn new(
        sdk: Arc<dyn ScanSdk>,
        presenter: Arc<dyn SurfacePresenter>,
        sink: Arc<dyn EventSink>,
        config: Option<BridgeConfig>,
    ) -> Arc<Self> {
        let config = config.unwrap_or_default();
        let registry = Arc::new(SessionRegistry::new());
        let relay = Arc::new(CallbackRelay::new(
            Arc::clone(&registry),
            Arc::clone(&sdk),
            sink,
        ));
        let resolver = Arc::new(CompletionResolver::new(Arc::clone(&registry)));
        let launcher = SessionLauncher::new(Arc::clone(&sdk), presenter, config.clone());
        let router = ChannelRouter::new(
            sdk,
            Arc::clone(&registry),
            launcher,
            Arc::clone(&relay),
            Arc::clone(&resolver),
            config.clone(),
        );

        Arc::new(Self {
            router,
            relay,
            resolver,
            registry,
            config,
        })
    }

    /// Handles a call that arrived on `channel`.
    ///
    /// `startLivenessCheck` and `startIdScan` only return once the session is resolved.
    pub async fn handle_method_call(
        &self,
        channel: Channel,
        method: String,
        arguments: HashMap<String, ArgValue>,
    ) -> MethodReply {
        let args = MethodArgs::new(arguments);
        self.router.handle(channel, &method, &args).await.into()
    }

    /// Handles a call identified by its transport channel name, with JSON-encoded arguments.
    ///
    /// Calls on unknown channels are reported as not implemented.
    pub async fn handle_encoded_method_call(
        &self,
        channel_name: String,
        method: String,
        arguments_json: Option<String>,
    ) -> MethodReply {
        let Some(channel) = Channel::from_name(&channel_name, &self.config) else {
            tracing::warn!("{method} called on unknown channel {channel_name}");
            return MethodReply::NotImplemented;
        };

        let result = async {
            let args = MethodArgs::from_json(arguments_json.as_deref())?;
            self.router.handle(channel, &method, &args).await
        }
        .await;
        result.into()
    }

    /// The SDK produced a face-scan sample and waits on `callback` for a decision.
    ///
    /// # Errors
    ///
    /// Returns `HandleAlreadyParked` if a previous sample still awaits a decision; `callback`
    /// is cancelled in that case.
    pub fn process_face_scan_while_sdk_waits(
        &self,
        result: FaceScanSessionResult,
        callback: Arc<dyn ScanResultCallback>,
    ) -> Result<(), BridgeError> {
        self.relay.on_face_scan_result(&result, callback)
    }

    /// The SDK produced an ID-scan sample and waits on `callback` for a decision.
    ///
    /// # Errors
    ///
    /// Returns `HandleAlreadyParked` if a previous sample still awaits a decision; `callback`
    /// is cancelled in that case.
    pub fn process_id_scan_while_sdk_waits(
        &self,
        result: IdScanSessionResult,
        callback: Arc<dyn ScanResultCallback>,
    ) -> Result<(), BridgeError> {
        self.relay.on_id_scan_result(&result, callback)
    }

    /// Forwards upload progress of the current sample to the SDK.
    pub fn report_upload_progress(&self, flow: ScanFlow, uploaded_percent: f32) {
        self.relay.upload_progress(flow, uploaded_percent);
    }

    /// The SDK is completely done with the current session.
    ///
    /// For a session the host already canceled, this only releases the flow so a new session
    /// can start.
    pub fn on_sdk_completely_done(&self) {
        self.resolver.on_sdk_completely_done();
    }

    /// The phase of `flow`'s session slot.
    #[must_use]
    pub fn session_phase(&self, flow: ScanFlow) -> SessionPhase {
        self.registry.phase(flow)
    }

    /// The flow of the session currently outstanding, if any.
    #[must_use]
    pub fn active_flow(&self) -> Option<ScanFlow> {
        self.registry.active_flow()
    }
}
