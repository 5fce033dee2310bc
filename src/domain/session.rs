// ============================================================
// SESSION STATE
// ============================================================
// One submission pipeline's state, replaced wholesale per transition

use serde::{Deserialize, Serialize};

use super::table::Record;
use super::threshold::ThresholdPercent;

/// Where the upload pipeline currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Idle,
    Decoding,
    Requesting,
    Success,
    Failed,
}

impl SessionStatus {
    /// True while a submission is in flight and a new one must be rejected
    pub fn is_busy(&self) -> bool {
        matches!(self, SessionStatus::Decoding | SessionStatus::Requesting)
    }
}

/// Snapshot of the upload/clean pipeline for one page view.
///
/// Each state-machine step builds a fresh `Session` through one of the
/// constructors below instead of patching individual fields, so stale
/// combinations (e.g. `Success` with a leftover error message) cannot occur.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub status: SessionStatus,
    pub file_name: Option<String>,
    pub threshold: ThresholdPercent,
    pub initial_row_count: usize,
    pub cleaned_data: Vec<Record>,
    pub cleaned_row_count: usize,
    pub error: Option<String>,
}

impl Session {
    pub fn idle(threshold: ThresholdPercent) -> Self {
        Self {
            status: SessionStatus::Idle,
            file_name: None,
            threshold,
            initial_row_count: 0,
            cleaned_data: Vec::new(),
            cleaned_row_count: 0,
            error: None,
        }
    }

    pub fn decoding(file_name: &str, threshold: ThresholdPercent) -> Self {
        Self {
            status: SessionStatus::Decoding,
            file_name: Some(file_name.to_string()),
            threshold,
            initial_row_count: 0,
            cleaned_data: Vec::new(),
            cleaned_row_count: 0,
            error: None,
        }
    }

    pub fn requesting(
        file_name: &str,
        threshold: ThresholdPercent,
        initial_row_count: usize,
    ) -> Self {
        Self {
            status: SessionStatus::Requesting,
            file_name: Some(file_name.to_string()),
            threshold,
            initial_row_count,
            cleaned_data: Vec::new(),
            cleaned_row_count: 0,
            error: None,
        }
    }

    pub fn success(
        file_name: &str,
        threshold: ThresholdPercent,
        initial_row_count: usize,
        cleaned_data: Vec<Record>,
        cleaned_row_count: usize,
    ) -> Self {
        Self {
            status: SessionStatus::Success,
            file_name: Some(file_name.to_string()),
            threshold,
            initial_row_count,
            cleaned_data,
            cleaned_row_count,
            error: None,
        }
    }

    pub fn failed(
        file_name: Option<String>,
        threshold: ThresholdPercent,
        message: String,
    ) -> Self {
        Self {
            status: SessionStatus::Failed,
            file_name,
            threshold,
            initial_row_count: 0,
            cleaned_data: Vec::new(),
            cleaned_row_count: 0,
            error: Some(message),
        }
    }
}
