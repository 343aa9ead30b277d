use std::str::FromStr;
use std::sync::Arc;

use crate::channel::BridgeMethod;
use crate::defaults::SESSION_SUCCESS;
use crate::launcher::SessionLauncher;
use crate::registry::SessionRegistry;
use crate::relay::CallbackRelay;
use crate::resolver::CompletionResolver;
use crate::{
    BridgeError, Channel, MethodArgs, MethodReply, ScanFlow, ScanSdk, ScanVariant,
    SessionInvocation,
};

/// Dispatches inbound method calls to the SDK, the launcher, the relay and the resolver.
pub struct ChannelRouter {
    sdk: Arc<dyn ScanSdk>,
    registry: Arc<SessionRegistry>,
    launcher: SessionLauncher,
    relay: Arc<CallbackRelay>,
    resolver: Arc<CompletionResolver>,
    config: crate::BridgeConfig,
}

impl ChannelRouter {
    pub const fn new(
        sdk: Arc<dyn ScanSdk>,
        registry: Arc<SessionRegistry>,
        launcher: SessionLauncher,
        relay: Arc<CallbackRelay>,
        resolver: Arc<CompletionResolver>,
        config: crate::BridgeConfig,
    ) -> Self {
        Self {
            sdk,
            registry,
            launcher,
            relay,
            resolver,
            config,
        }
    }

    /// Handles one call. Session starts only return once their session is resolved.
    pub async fn handle(
        &self,
        channel: Channel,
        method: &str,
        args: &MethodArgs,
    ) -> Result<MethodReply, BridgeError> {
        let Ok(parsed) = BridgeMethod::from_str(method) else {
            tracing::debug!("{method} is not implemented on {}", channel.name(&self.config));
            return Ok(MethodReply::NotImplemented);
        };

        let Some(flow) = channel.flow() else {
            return self.handle_sdk_call(parsed, args).await;
        };
        self.handle_processor_call(flow, parsed, args)
    }

    async fn handle_sdk_call(
        &self,
        method: BridgeMethod,
        args: &MethodArgs,
    ) -> Result<MethodReply, BridgeError> {
        match method {
            BridgeMethod::Initialize => self.initialize(args),
            BridgeMethod::StartLivenessCheck => {
                let session_token = args.required_str("sessionToken")?;
                self.run_session(SessionInvocation::liveness(session_token))
                    .await
            }
            BridgeMethod::StartIdScan => {
                let session_token = args.required_str("sessionToken")?;
                let invocation = SessionInvocation::id_scan(
                    session_token,
                    args.optional_bool("isBackScan", false),
                    args.optional_bool("shouldReturnBothSides", false),
                );
                self.run_session(invocation).await
            }
            BridgeMethod::StartMatchIdScan => {
                let session_token = args.required_str("sessionToken")?;
                self.run_session(SessionInvocation::photo_id_match(session_token))
                    .await
            }
            BridgeMethod::CreateApiUserAgentString => Ok(self.user_agent()),
            BridgeMethod::CancelSession => {
                if let Some(flow) = self.registry.active_flow() {
                    self.resolver.cancel(flow);
                }
                Ok(MethodReply::ack())
            }
            _ => Ok(MethodReply::NotImplemented),
        }
    }

    fn handle_processor_call(
        &self,
        flow: ScanFlow,
        method: BridgeMethod,
        args: &MethodArgs,
    ) -> Result<MethodReply, BridgeError> {
        match (flow, method) {
            (_, BridgeMethod::OnScanResultBlobReceived) => {
                let scan_result_blob = args.required_str("scanResultBlob")?;
                self.relay.proceed(flow, scan_result_blob.to_string());
                Ok(MethodReply::ack())
            }
            (_, BridgeMethod::OnScanResultUploadDelay) => {
                let message = args.optional_str("uploadMessage").unwrap_or_default();
                self.relay.upload_delay(flow, message.to_string());
                Ok(MethodReply::ack())
            }
            (ScanFlow::Liveness, BridgeMethod::CancelFaceScan)
            | (ScanFlow::IdScan, BridgeMethod::CancelSession) => {
                self.resolver.cancel(flow);
                Ok(MethodReply::ack())
            }
            (ScanFlow::IdScan, BridgeMethod::CreateApiUserAgentString) => Ok(self.user_agent()),
            _ => Ok(MethodReply::NotImplemented),
        }
    }

    fn initialize(&self, args: &MethodArgs) -> Result<MethodReply, BridgeError> {
        let device_key_identifier = args.required_str("deviceKeyIdentifier")?;
        let public_face_scan_encryption_key = args.required_str("publicFaceScanEncryptionKey")?;

        self.sdk
            .set_customization(self.launcher.customization_for(ScanVariant::Liveness));

        if self.sdk.initialize(
            device_key_identifier.to_string(),
            public_face_scan_encryption_key.to_string(),
            self.config.sdk_mode,
        ) {
            tracing::info!("SDK initialized in {} mode", self.config.sdk_mode);
            Ok(MethodReply::success(true))
        } else {
            let message = self.sdk.status_description();
            tracing::warn!("SDK initialization failed: {message}");
            Err(BridgeError::InitError { message })
        }
    }

    fn user_agent(&self) -> MethodReply {
        MethodReply::success(self.sdk.create_api_user_agent_string(String::new()))
    }

    async fn run_session(
        &self,
        invocation: SessionInvocation,
    ) -> Result<MethodReply, BridgeError> {
        let receiver = self.registry.begin(invocation.clone())?;
        self.launcher.launch(&invocation);

        receiver.await.map_err(|_| BridgeError::Internal {
            message: format!("{} session abandoned before completion", invocation.variant),
        })??;

        Ok(MethodReply::success(SESSION_SUCCESS))
    }
}
