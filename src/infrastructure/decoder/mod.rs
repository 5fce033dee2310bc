// ============================================================
// TABULAR DECODER
// ============================================================
// Convert uploaded file bytes into a canonical row-oriented table

mod csv;
mod xlsx;

use tracing::info;

use crate::domain::error::Result;
use crate::domain::table::{FileKind, RawTable};

/// Decoder from raw upload bytes to a [`RawTable`].
///
/// The whole file is read into memory; downstream transmission needs the
/// full table at once, so there is nothing to gain from streaming. Row 0 is
/// decoded like any other row, header interpretation is left to the remote
/// service.
pub struct TabularDecoder {
    /// Delimiter character for CSV input (default: comma)
    delimiter: u8,
}

impl Default for TabularDecoder {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl TabularDecoder {
    /// Create a new decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom CSV delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Decode an upload into a table, dispatching on the declared file kind
    pub fn decode(&self, bytes: &[u8], kind: FileKind) -> Result<RawTable> {
        let table = match kind {
            FileKind::Csv => csv::decode(bytes, self.delimiter)?,
            FileKind::Xlsx => xlsx::decode(bytes)?,
        };

        info!(
            kind = ?kind,
            rows = table.row_count(),
            "Decoded upload into raw table"
        );

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use serde_json::Value;

    #[test]
    fn test_decode_simple_csv() {
        let decoder = TabularDecoder::new();
        let table = decoder
            .decode(b"name,age\nAlice,30\nBob,25", FileKind::Csv)
            .unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.rows()[0],
            vec![
                Value::String("name".to_string()),
                Value::String("age".to_string())
            ]
        );
        assert_eq!(table.rows()[1][1], Value::from(30));
    }

    #[test]
    fn test_decode_first_row_is_plain_data() {
        // Row 0 must come back verbatim, not swallowed as a header.
        let decoder = TabularDecoder::new();
        let table = decoder.decode(b"1,2\n3,4", FileKind::Csv).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0], vec![Value::from(1), Value::from(2)]);
    }

    #[test]
    fn test_decode_infers_cell_types() {
        let decoder = TabularDecoder::new();
        let table = decoder
            .decode(b"x,3.5,true,,hello", FileKind::Csv)
            .unwrap();
        let row = &table.rows()[0];
        assert_eq!(row[0], Value::String("x".to_string()));
        assert_eq!(row[1], Value::from(3.5));
        assert_eq!(row[2], Value::Bool(true));
        assert_eq!(row[3], Value::Null);
        assert_eq!(row[4], Value::String("hello".to_string()));
    }

    #[test]
    fn test_decode_ragged_rows_preserved() {
        let decoder = TabularDecoder::new();
        let table = decoder.decode(b"a,b,c\nd,e", FileKind::Csv).unwrap();
        assert_eq!(table.rows()[0].len(), 3);
        assert_eq!(table.rows()[1].len(), 2);
    }

    #[test]
    fn test_decode_custom_delimiter() {
        let decoder = TabularDecoder::new().with_delimiter(b';');
        let table = decoder.decode(b"a;b\nc;d", FileKind::Csv).unwrap();
        assert_eq!(table.rows()[0].len(), 2);
    }

    #[test]
    fn test_decode_csv_with_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"name,age\nAlice,30");
        let decoder = TabularDecoder::new();
        let table = decoder.decode(&bytes, FileKind::Csv).unwrap();
        assert_eq!(table.rows()[0][0], Value::String("name".to_string()));
    }

    #[test]
    fn test_decode_xlsx_workbook() {
        // Minimal hand-built workbook: inline-string header row plus one
        // data row with a numeric cell.
        let bytes = include_bytes!("testdata/people.xlsx");
        let decoder = TabularDecoder::new();
        let table = decoder.decode(bytes, FileKind::Xlsx).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows()[0],
            vec![
                Value::String("name".to_string()),
                Value::String("age".to_string())
            ]
        );
        assert_eq!(table.rows()[1][0], Value::String("Alice".to_string()));
        assert_eq!(table.rows()[1][1], Value::from(30.0));
    }

    #[test]
    fn test_decode_rejects_corrupt_xlsx() {
        let decoder = TabularDecoder::new();
        let err = decoder
            .decode(b"this is not a zip container", FileKind::Xlsx)
            .unwrap_err();
        assert!(matches!(err, AppError::CorruptFile(_)));
    }
}
