use std::sync::Arc;

use crate::{
    BridgeConfig, IdScanCustomization, ScanCustomization, ScanSdk, ScanVariant,
    SessionInvocation, SurfacePresenter,
};

/// Opens the SDK's scanning interface for an invocation.
///
/// Nothing is reported back from here; samples arrive later through the callback relay.
pub struct SessionLauncher {
    sdk: Arc<dyn ScanSdk>,
    presenter: Arc<dyn SurfacePresenter>,
    config: BridgeConfig,
}

impl SessionLauncher {
    pub const fn new(
        sdk: Arc<dyn ScanSdk>,
        presenter: Arc<dyn SurfacePresenter>,
        config: BridgeConfig,
    ) -> Self {
        Self {
            sdk,
            presenter,
            config,
        }
    }

    /// Customizes, creates and presents the session controller for `invocation`.
    ///
    /// # Panics
    ///
    /// Panics if the host has no root surface to present on. That is a wiring error in the
    /// host app, not a condition callers can recover from.
    pub fn launch(&self, invocation: &SessionInvocation) {
        let flow = invocation.flow();
        tracing::info!("launching {} session", invocation.variant);

        self.sdk
            .set_customization(self.customization_for(invocation.variant));
        let view = self
            .sdk
            .create_session_view(flow, invocation.session_token.clone());

        let presented = self.presenter.present(view);
        assert!(presented, "no root surface to present the {flow} session on");
    }

    /// Visual options for a session. Front and back ID scans share the same styling and
    /// only differ in capture framing. ID scans and photo ID matches also get the ID-scan
    /// screen texts.
    pub fn customization_for(&self, variant: ScanVariant) -> ScanCustomization {
        let style = &self.config.id_scan_style;
        let id_scan = variant.side_flags().map(|flags| IdScanCustomization {
            is_back_scan: flags.is_back_scan,
            show_selection_screen_document_image: true,
            capture_screen_background_color: style.capture_screen_background_color.clone(),
            button_background_normal_color: style.button_background_normal_color.clone(),
            button_text_normal_color: style.button_text_normal_color.clone(),
            button_text_highlight_color: style.button_text_highlight_color.clone(),
        });

        let id_scan_messages = variant
            .shows_id_scan_screens()
            .then(|| self.config.id_scan_messages.clone());
        let result_screen_success_message = (variant == ScanVariant::PhotoIdMatch)
            .then(|| self.config.photo_id_match_success_message.clone());

        ScanCustomization {
            branding_image: self.config.branding_image.clone(),
            id_scan,
            id_scan_messages,
            result_screen_success_message,
        }
    }
}
