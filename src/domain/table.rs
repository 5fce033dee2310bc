// ============================================================
// TABULAR DATA TYPES
// ============================================================
// Data structures exchanged with the cleaning service

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::AppError;

/// A record of one cleaned row: column name -> cell value.
///
/// `serde_json`'s `preserve_order` feature keeps the key order as received
/// from the service, which fixes the CSV header order and makes JSON export
/// byte-stable.
pub type Record = serde_json::Map<String, Value>;

/// Kind of uploaded file, derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    Csv,
    Xlsx,
}

impl FileKind {
    /// Recognize a file kind from its name (case-insensitive extension)
    pub fn from_file_name(name: &str) -> Result<Self, AppError> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".csv") {
            Ok(FileKind::Csv)
        } else if lower.ends_with(".xlsx") {
            Ok(FileKind::Xlsx)
        } else {
            Err(AppError::UnsupportedFormat(format!(
                "expected a .csv or .xlsx file, got '{}'",
                name
            )))
        }
    }
}

/// Decoded tabular data: ordered rows of ordered cells.
///
/// Row 0 is not treated as a header here; header interpretation belongs to
/// the remote service. Cells are restricted by construction to string,
/// number, boolean or null values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTable(pub Vec<Vec<Value>>);

impl RawTable {
    pub fn new(rows: Vec<Vec<Value>>) -> Self {
        Self(rows)
    }

    pub fn row_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.0
    }
}

/// An uploaded file: its name (for kind detection) and raw bytes
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn kind(&self) -> Result<FileKind, AppError> {
        FileKind::from_file_name(&self.name)
    }
}
