//! Text overrides for the SDK's ID-scan upload and result screens.
//!
//! The SDK ships generic English copy for these screens. Sessions that capture or match an
//! identity document replace it with the texts below, which the host can change through
//! [`BridgeConfig`](crate::BridgeConfig). Line breaks are kept as `\n`; the SDK renders them.

use serde::{Deserialize, Serialize};

/// Messages shown while one kind of payload is uploaded and processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct UploadStageMessages {
    /// Shown when the upload starts.
    pub upload_started: String,
    /// Shown when the upload is slow.
    pub still_uploading: String,
    /// Shown once uploaded, while waiting for the backend's response.
    pub upload_complete_awaiting_response: String,
    /// Shown once uploaded, while the backend processes the payload.
    pub upload_complete_awaiting_processing: String,
}

impl UploadStageMessages {
    fn new(
        upload_started: &str,
        upload_complete_awaiting_response: &str,
        upload_complete_awaiting_processing: &str,
    ) -> Self {
        Self {
            upload_started: upload_started.to_string(),
            still_uploading: "Still Uploading...\nSlow Connection".to_string(),
            upload_complete_awaiting_response: upload_complete_awaiting_response.to_string(),
            upload_complete_awaiting_processing: upload_complete_awaiting_processing.to_string(),
        }
    }
}

/// Upload screen texts for every stage of an ID scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct IdScanUploadMessages {
    /// Front side of the document.
    pub front_side: UploadStageMessages,
    /// Back side of the document.
    pub back_side: UploadStageMessages,
    /// Details the user confirmed after OCR.
    pub user_confirmed_info: UploadStageMessages,
    /// NFC chip details.
    pub nfc: UploadStageMessages,
    /// Document details when the NFC step was skipped.
    pub skipped_nfc: UploadStageMessages,
}

impl Default for IdScanUploadMessages {
    fn default() -> Self {
        Self {
            front_side: UploadStageMessages::new(
                "Uploading\nEncrypted\nID Scan",
                "Upload Complete",
                "Processing ID Scan",
            ),
            back_side: UploadStageMessages::new(
                "Uploading\nEncrypted\nBack of ID",
                "Upload Complete",
                "Processing Back of ID",
            ),
            user_confirmed_info: UploadStageMessages::new(
                "Saving\nYour Confirmed Info",
                "Info Saved",
                "Processing",
            ),
            nfc: UploadStageMessages::new(
                "Uploading Encrypted\nNFC Details",
                "Upload Complete",
                "Processing\nNFC Details",
            ),
            skipped_nfc: UploadStageMessages::new(
                "Uploading Encrypted\nID Details",
                "Upload Complete",
                "Processing\nID Details",
            ),
        }
    }
}

/// Result screen texts of an ID scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct IdScanResultScreenMessages {
    /// Front side accepted, nothing else to capture.
    pub success_front_side: String,
    /// Front side accepted, back side next.
    pub success_front_side_back_next: String,
    /// Front side accepted, NFC next.
    pub success_front_side_nfc_next: String,
    /// Back side accepted.
    pub success_back_side: String,
    /// Back side accepted, NFC next.
    pub success_back_side_nfc_next: String,
    /// Passport accepted.
    pub success_passport: String,
    /// Passport accepted, NFC next.
    pub success_passport_nfc_next: String,
    /// User confirmed the extracted details.
    pub success_user_confirmation: String,
    /// NFC details read.
    pub success_nfc: String,
    /// Document accepted with the NFC step skipped.
    pub success_skipped_nfc: String,
    /// The face did not match the document photo.
    pub retry_face_did_not_match: String,
    /// The document was cut off.
    pub retry_id_not_fully_visible: String,
    /// OCR could not read the document.
    pub retry_ocr_results_not_good_enough: String,
    /// The document type is not the one expected.
    pub retry_id_type_not_supported: String,
    /// The NFC step was skipped or failed.
    pub skip_or_error_nfc: String,
}

impl Default for IdScanResultScreenMessages {
    fn default() -> Self {
        Self {
            success_front_side: "Front Scan Complete".to_string(),
            success_front_side_back_next: "Front of ID\nScanned".to_string(),
            success_front_side_nfc_next: "Front of ID\nScanned".to_string(),
            success_back_side: "ID Scan Complete".to_string(),
            success_back_side_nfc_next: "Back of ID\nScanned".to_string(),
            success_passport: "Passport Scan Complete".to_string(),
            success_passport_nfc_next: "Passport Scanned".to_string(),
            success_user_confirmation: "Photo ID Scan\nComplete".to_string(),
            success_nfc: "ID Scan Complete".to_string(),
            success_skipped_nfc: "ID Photo Capture\nComplete".to_string(),
            retry_face_did_not_match: "Face Didn't Match\nHighly Enough".to_string(),
            retry_id_not_fully_visible: "ID Document\nNot Fully Visible".to_string(),
            retry_ocr_results_not_good_enough: "ID Text Not Legible".to_string(),
            retry_id_type_not_supported: "ID Type Mismatch\nPlease Try Again".to_string(),
            skip_or_error_nfc: "ID Details\nUploaded".to_string(),
        }
    }
}

/// Upload and result screen texts applied to sessions that show ID-scan screens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct IdScanMessageOverrides {
    /// Upload screen texts.
    pub upload: IdScanUploadMessages,
    /// Result screen texts.
    pub result_screen: IdScanResultScreenMessages,
}
