use csv::ReaderBuilder;
use serde_json::Value;

use crate::domain::error::{AppError, Result};
use crate::domain::table::RawTable;

/// Decode CSV bytes into a table, one record per non-empty line.
///
/// `has_headers(false)` keeps row 0 as plain data and `flexible(true)`
/// allows ragged rows; the remote service decides what a header means.
pub fn decode(bytes: &[u8], delimiter: u8) -> Result<RawTable> {
    let content = decode_text(bytes);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            AppError::CorruptFile(format!("failed to parse CSV row {}: {}", index + 1, e))
        })?;

        let row: Vec<Value> = record.iter().map(infer_cell).collect();
        rows.push(row);
    }

    Ok(RawTable::new(rows))
}

/// Decode bytes to text with BOM handling and lossy replacement of invalid
/// sequences, so a mis-encoded upload still yields a parseable table.
fn decode_text(bytes: &[u8]) -> String {
    let (text, _, _) = encoding_rs::UTF_8.decode(bytes);
    text.into_owned()
}

/// Infer a typed cell value from a raw CSV field.
///
/// Mirrors the typing the original spreadsheet reader applied: empty cells
/// become null, numeric and boolean literals get their native type, and
/// everything else stays a string.
fn infer_cell(field: &str) -> Value {
    if field.is_empty() {
        return Value::Null;
    }

    if let Ok(int) = field.parse::<i64>() {
        return Value::from(int);
    }

    if let Ok(float) = field.parse::<f64>() {
        if float.is_finite() {
            return Value::from(float);
        }
    }

    match field {
        "true" | "TRUE" | "True" => return Value::Bool(true),
        "false" | "FALSE" | "False" => return Value::Bool(false),
        _ => {}
    }

    Value::String(field.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_cell_types() {
        assert_eq!(infer_cell(""), Value::Null);
        assert_eq!(infer_cell("42"), Value::from(42));
        assert_eq!(infer_cell("-3.25"), Value::from(-3.25));
        assert_eq!(infer_cell("true"), Value::Bool(true));
        assert_eq!(infer_cell("FALSE"), Value::Bool(false));
        assert_eq!(infer_cell("abc"), Value::String("abc".to_string()));
    }

    #[test]
    fn test_infer_cell_keeps_ambiguous_strings() {
        // Surrounding whitespace is meaningful, keep the field as text.
        assert_eq!(infer_cell(" 42"), Value::String(" 42".to_string()));
        assert_eq!(infer_cell("NaN"), Value::String("NaN".to_string()));
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let table = decode(b"a,b\n\nc,d\n", b',').unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_decode_quoted_fields() {
        let table = decode(b"\"hello, world\",2", b',').unwrap();
        assert_eq!(
            table.rows()[0][0],
            Value::String("hello, world".to_string())
        );
    }
}
