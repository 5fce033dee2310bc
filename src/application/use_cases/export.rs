// ============================================================
// RESULT EXPORTER
// ============================================================
// Serialize cleaned records into downloadable CSV/JSON artifacts

use serde_json::Value;
use tracing::info;

use crate::domain::error::{AppError, Result};
use crate::domain::table::Record;

/// Download format for a cleaned table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Suggested download file name
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "cleaned_data.csv",
            ExportFormat::Json => "cleaned_data.json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

/// A ready-to-download blob. Writing it to disk or triggering a browser
/// download is the host's concern; this crate stops at the bytes and the
/// suggested name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: String,
    pub content: String,
}

/// Stateless serializer for cleaned records
#[derive(Debug, Default)]
pub struct ResultExporter;

impl ResultExporter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize records for the requested format and pair the text with
    /// its suggested file name
    pub fn export(&self, records: &[Record], format: ExportFormat) -> Result<ExportArtifact> {
        let content = match format {
            ExportFormat::Csv => self.to_csv(records)?,
            ExportFormat::Json => self.to_json(records)?,
        };

        info!(
            format = ?format,
            records = records.len(),
            bytes = content.len(),
            "Prepared export artifact"
        );

        Ok(ExportArtifact {
            file_name: format.file_name().to_string(),
            content_type: format.content_type().to_string(),
            content,
        })
    }

    /// Render records as CSV text: a header line from the first record's
    /// key order, then one line per record with values in that same order.
    ///
    /// Known fidelity limitation carried over from the original exporter:
    /// values are emitted as-is, with no quoting or escaping of embedded
    /// delimiters or newlines.
    pub fn to_csv(&self, records: &[Record]) -> Result<String> {
        let first = records.first().ok_or_else(Self::empty_input)?;

        let columns: Vec<&String> = first.keys().collect();
        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(
            columns
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(","),
        );

        for record in records {
            let line = columns
                .iter()
                .map(|column| {
                    record
                        .get(column.as_str())
                        .map(render_cell)
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>()
                .join(",");
            lines.push(line);
        }

        Ok(lines.join("\n"))
    }

    /// Render records as a pretty-printed JSON array with stable key order,
    /// byte-identical across repeated calls on the same input
    pub fn to_json(&self, records: &[Record]) -> Result<String> {
        if records.is_empty() {
            return Err(Self::empty_input());
        }

        serde_json::to_string_pretty(records)
            .map_err(|e| AppError::IoError(format!("failed to serialize records: {}", e)))
    }

    fn empty_input() -> AppError {
        AppError::EmptyExport("No cleaned data available to export.".to_string())
    }
}

/// Render a single cell for CSV output. Nulls become the empty string,
/// strings are taken verbatim, numbers and booleans use their display form.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
