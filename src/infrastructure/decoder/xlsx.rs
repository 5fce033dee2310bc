use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use serde_json::Value;

use crate::domain::error::{AppError, Result};
use crate::domain::table::RawTable;

/// Decode an in-memory XLSX upload into a table.
///
/// Only the first worksheet (by declared order, not by name) is read, and
/// row 1 is flattened like any other row.
pub fn decode(bytes: &[u8]) -> Result<RawTable> {
    let cursor = Cursor::new(bytes);

    let mut workbook: Xlsx<_> = open_workbook_from_rs(cursor)
        .map_err(|e| AppError::CorruptFile(format!("failed to open Excel container: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::CorruptFile("no worksheet found in Excel file".to_string()))?
        .map_err(|e| AppError::CorruptFile(format!("failed to read Excel range: {}", e)))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    Ok(RawTable::new(rows))
}

/// Map a spreadsheet cell to a JSON cell value
fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => serde_json::Number::from_f64(dt.as_f64())
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::DateTimeIso(s) => Value::String(s.clone()),
        Data::DurationIso(s) => Value::String(s.clone()),
        // Cell-level errors (#DIV/0! etc.) carry no usable value
        Data::Error(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_mapping() {
        assert_eq!(cell_value(&Data::Empty), Value::Null);
        assert_eq!(
            cell_value(&Data::String("x".to_string())),
            Value::String("x".to_string())
        );
        assert_eq!(cell_value(&Data::Int(7)), Value::from(7));
        assert_eq!(cell_value(&Data::Float(2.5)), Value::from(2.5));
        assert_eq!(cell_value(&Data::Bool(true)), Value::Bool(true));
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        assert_eq!(cell_value(&Data::Float(f64::NAN)), Value::Null);
    }

    #[test]
    fn test_decode_rejects_non_container_bytes() {
        let err = decode(b"plain text, not xlsx").unwrap_err();
        assert!(matches!(err, AppError::CorruptFile(_)));
    }
}
