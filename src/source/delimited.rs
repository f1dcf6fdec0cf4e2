//! CSV reader.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::Result;
use crate::model::{CellValue, Dataset};

use super::DatasetReader;

/// Reads comma- or semicolon-separated text.
///
/// Every field is kept as text so the document shows it exactly as written.
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    delimiter: Option<u8>,
}

impl CsvReader {
    /// Create a reader that detects the delimiter from the first line.
    pub fn new() -> Self {
        Self { delimiter: None }
    }

    /// Create a reader with a fixed delimiter.
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter: Some(delimiter),
        }
    }

    fn parse<R: Read>(&self, input: R, delimiter: u8) -> Result<Dataset> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(input);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(CellValue::text).collect::<Vec<_>>());
        }

        log::debug!("Read {} CSV records", rows.len());
        Ok(Dataset::from_rows(rows))
    }
}

impl DatasetReader for CsvReader {
    fn supported_extensions(&self) -> &[&str] {
        &["csv"]
    }

    fn name(&self) -> &str {
        "csv"
    }

    fn read(&self, path: &Path) -> Result<Dataset> {
        let delimiter = match self.delimiter {
            Some(d) => d,
            None => {
                let mut first_line = String::new();
                BufReader::new(File::open(path)?).read_line(&mut first_line)?;
                detect_delimiter(&first_line)
            }
        };
        self.parse(File::open(path)?, delimiter)
    }

    fn read_bytes(&self, bytes: &[u8]) -> Result<Dataset> {
        let delimiter = self.delimiter.unwrap_or_else(|| {
            let first_line = bytes.split(|&b| b == b'\n').next().unwrap_or_default();
            detect_delimiter(&String::from_utf8_lossy(first_line))
        });
        self.parse(bytes, delimiter)
    }
}

/// Pick `;` when the header line has more semicolons than commas, else `,`.
fn detect_delimiter(first_line: &str) -> u8 {
    let commas = first_line.matches(',').count();
    let semicolons = first_line.matches(';').count();
    if semicolons > commas {
        b';'
    } else {
        b','
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("id,name,department"), b',');
        assert_eq!(detect_delimiter("id;name;department"), b';');
        assert_eq!(detect_delimiter("single"), b',');
    }

    #[test]
    fn test_read_bytes_keeps_text() {
        let data = "id,salary\nEMP1001,012000.50\n";
        let ds = CsvReader::new().read_bytes(data.as_bytes()).unwrap();
        assert_eq!(ds.header(), &["id".to_string(), "salary".to_string()]);
        assert_eq!(ds.rows[0][1], CellValue::text("012000.50"));
    }

    #[test]
    fn test_semicolon_input() {
        let data = "a;b\n1;2\n3;4\n";
        let ds = CsvReader::new().read_bytes(data.as_bytes()).unwrap();
        assert_eq!(ds.column_count(), 2);
        assert_eq!(ds.row_count(), 2);
    }

    #[test]
    fn test_ragged_rows_allowed() {
        let data = "a,b,c\n1\n1,2,3,4\n";
        let ds = CsvReader::with_delimiter(b',')
            .read_bytes(data.as_bytes())
            .unwrap();
        assert_eq!(ds.rows[0].len(), 1);
        assert_eq!(ds.rows[1].len(), 4);
    }

    #[test]
    fn test_empty_input() {
        let ds = CsvReader::new().read_bytes(b"").unwrap();
        assert!(ds.is_empty());
    }
}
