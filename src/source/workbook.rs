//! XLSX workbook reader using calamine.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, DataType, Reader};

use crate::error::{Error, Result};
use crate::model::{CellValue, Dataset};

use super::DatasetReader;

/// Reads the first worksheet of a workbook.
#[derive(Debug, Clone, Default)]
pub struct XlsxReader {
    _private: (),
}

impl XlsxReader {
    /// Create a new workbook reader.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DatasetReader for XlsxReader {
    fn supported_extensions(&self) -> &[&str] {
        &["xlsx", "xlsm", "xls", "ods"]
    }

    fn name(&self) -> &str {
        "xlsx"
    }

    fn read(&self, path: &Path) -> Result<Dataset> {
        let mut workbook = open_workbook_auto(path)?;
        first_sheet(&mut workbook)
    }

    fn read_bytes(&self, bytes: &[u8]) -> Result<Dataset> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        first_sheet(&mut workbook)
    }
}

/// Collect the first worksheet as a dataset; the first row is the header.
fn first_sheet<RS, R>(workbook: &mut R) -> Result<Dataset>
where
    RS: Read + Seek,
    R: Reader<RS>,
    Error: From<R::Error>,
{
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Spreadsheet("workbook has no worksheets".into()))??;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_value).collect())
        .collect::<Vec<Vec<CellValue>>>();

    log::debug!("Read {} rows from first worksheet", rows.len());
    Ok(Dataset::from_rows(rows))
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(dt) => CellValue::DateTime(dt),
            None => CellValue::Text(cell.to_string()),
        },
        Data::DurationIso(_) | Data::Error(_) => CellValue::Text(cell.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_extensions() {
        let reader = XlsxReader::new();
        assert!(reader.supports_extension("xlsx"));
        assert!(reader.supports_extension("XLSX"));
        assert!(!reader.supports_extension("csv"));
        assert_eq!(reader.name(), "xlsx");
    }

    #[test]
    fn test_cell_value_conversion() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(
            cell_value(&Data::String("EMP1001".into())),
            CellValue::text("EMP1001")
        );
        assert_eq!(cell_value(&Data::Float(9500.5)), CellValue::Float(9500.5));
        assert_eq!(cell_value(&Data::Int(3)), CellValue::Int(3));
        assert_eq!(cell_value(&Data::Bool(false)), CellValue::Bool(false));
    }

    #[test]
    fn test_read_bytes_detects_workbook_type() {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "id").unwrap();
        sheet.write_string(0, 1, "salary").unwrap();
        sheet.write_string(1, 0, "EMP1001").unwrap();
        sheet.write_number(1, 1, 8000.0).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let ds = XlsxReader::new().read_bytes(&bytes).unwrap();
        assert_eq!(ds.header(), ["id", "salary"]);
        assert_eq!(ds.row_count(), 1);
        assert_eq!(ds.rows[0][1].to_string(), "8000.0");
    }

    #[test]
    fn test_read_bytes_rejects_non_workbook() {
        let reader = XlsxReader::new();
        assert!(reader.read_bytes(b"id,name\n1,2\n").is_err());
    }
}
