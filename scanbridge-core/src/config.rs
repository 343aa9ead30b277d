use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::defaults::{
    BRANDING_IMAGE, BUTTON_BACKGROUND_NORMAL_COLOR, BUTTON_TEXT_HIGHLIGHT_COLOR,
    BUTTON_TEXT_NORMAL_COLOR, CAPTURE_SCREEN_BACKGROUND_COLOR, ID_SCAN_CHANNEL,
    LIVENESS_CHANNEL, PHOTO_ID_MATCH_SUCCESS_MESSAGE, SDK_CHANNEL,
};
use crate::error::BridgeError;
use crate::IdScanMessageOverrides;

/// How the SDK is bootstrapped.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Display,
    EnumString,
    Serialize,
    Deserialize,
    uniffi::Enum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SdkMode {
    /// Development mode. Sessions are not billed and no production key is required.
    #[default]
    Development,
    /// Production mode with a production key.
    Production,
}

/// Colours applied to the ID-scan screens. Front and back scans share them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct IdScanStyle {
    /// Capture screen background, as `#RRGGBB`.
    pub capture_screen_background_color: String,
    /// Button background in its normal state.
    pub button_background_normal_color: String,
    /// Button text in its normal state.
    pub button_text_normal_color: String,
    /// Button text while highlighted.
    pub button_text_highlight_color: String,
}

impl Default for IdScanStyle {
    fn default() -> Self {
        Self {
            capture_screen_background_color: CAPTURE_SCREEN_BACKGROUND_COLOR.to_string(),
            button_background_normal_color: BUTTON_BACKGROUND_NORMAL_COLOR.to_string(),
            button_text_normal_color: BUTTON_TEXT_NORMAL_COLOR.to_string(),
            button_text_highlight_color: BUTTON_TEXT_HIGHLIGHT_COLOR.to_string(),
        }
    }
}

/// Bridge configuration.
///
/// Every field has a default, so a partial JSON document is enough to override a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct BridgeConfig {
    /// How `initialize` bootstraps the SDK.
    pub sdk_mode: SdkMode,
    /// Transport name of the SDK lifecycle channel.
    pub sdk_channel: String,
    /// Transport name of the liveness-check processor channel.
    pub liveness_channel: String,
    /// Transport name of the ID-scan processor channel.
    pub id_scan_channel: String,
    /// Asset name of the overlay branding image, if any.
    pub branding_image: Option<String>,
    /// ID-scan screen colours.
    pub id_scan_style: IdScanStyle,
    /// Upload and result screen texts for ID scans and photo ID matches.
    pub id_scan_messages: IdScanMessageOverrides,
    /// Result screen text shown when a photo ID match succeeds.
    pub photo_id_match_success_message: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            sdk_mode: SdkMode::default(),
            sdk_channel: SDK_CHANNEL.to_string(),
            liveness_channel: LIVENESS_CHANNEL.to_string(),
            id_scan_channel: ID_SCAN_CHANNEL.to_string(),
            branding_image: Some(BRANDING_IMAGE.to_string()),
            id_scan_style: IdScanStyle::default(),
            id_scan_messages: IdScanMessageOverrides::default(),
            photo_id_match_success_message: PHOTO_ID_MATCH_SUCCESS_MESSAGE.to_string(),
        }
    }
}

impl BridgeConfig {
    /// Parses a JSON configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` if the document is not valid JSON or has mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(json)
            .map_err(|e| BridgeError::invalid_arguments(format!("invalid bridge config: {e}")))
    }
}

/// Returns the default bridge configuration.
#[uniffi::export]
#[must_use]
pub fn default_bridge_config() -> BridgeConfig {
    BridgeConfig::default()
}

/// Parses a JSON bridge configuration. Missing fields take their defaults.
///
/// # Errors
///
/// Returns `InvalidArguments` if the document is malformed.
#[uniffi::export]
#[allow(clippy::needless_pass_by_value)] // owned across FFI
pub fn bridge_config_from_json(json: String) -> Result<BridgeConfig, BridgeError> {
    BridgeConfig::from_json(&json)
}
