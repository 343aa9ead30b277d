//! Test doubles shared by unit tests.

// Variant payloads are only inspected through equality in assertions.
#![allow(dead_code)]

use std::sync::Mutex;

use crate::ScanResultCallback;

#[derive(Debug, Clone, PartialEq)]
pub enum CallbackCall {
    Proceed(String),
    Cancel,
    UploadMessage(String),
    UploadProgress(f32),
}

/// Resume handle that records every call made on it.
#[derive(Default)]
pub struct RecordingCallback {
    calls: Mutex<Vec<CallbackCall>>,
}

impl RecordingCallback {
    pub fn calls(&self) -> Vec<CallbackCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: CallbackCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ScanResultCallback for RecordingCallback {
    fn proceed_to_next_step(&self, scan_result_blob: String) {
        self.record(CallbackCall::Proceed(scan_result_blob));
    }

    fn cancel(&self) {
        self.record(CallbackCall::Cancel);
    }

    fn upload_message_override(&self, message: String) {
        self.record(CallbackCall::UploadMessage(message));
    }

    fn upload_progress(&self, uploaded_percent: f32) {
        self.record(CallbackCall::UploadProgress(uploaded_percent));
    }
}
