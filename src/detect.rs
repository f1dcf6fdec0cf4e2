//! Dataset format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Zip local file header, which starts every xlsx workbook.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Number of bytes inspected when sniffing a file.
const SNIFF_LEN: u64 = 512;

/// Supported dataset formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// Office Open XML workbook
    Xlsx,
    /// Comma-separated values
    Csv,
}

impl DatasetFormat {
    /// Canonical file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            DatasetFormat::Xlsx => "xlsx",
            DatasetFormat::Csv => "csv",
        }
    }
}

impl std::fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetFormat::Xlsx => write!(f, "XLSX workbook"),
            DatasetFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// Detect dataset format from a file path by reading its first bytes.
///
/// # Example
/// ```no_run
/// use stampdoc::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("test_files/test_data.xlsx").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DatasetFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN as usize);
    file.take(SNIFF_LEN).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect dataset format from the leading bytes of a file.
///
/// Zip archives are taken to be workbooks. Other data is accepted as CSV
/// when it is non-empty UTF-8 text without NUL bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DatasetFormat> {
    if data.starts_with(ZIP_MAGIC) {
        return Ok(DatasetFormat::Xlsx);
    }
    if looks_like_text(data) {
        return Ok(DatasetFormat::Csv);
    }
    Err(Error::UnknownFormat)
}

fn looks_like_text(data: &[u8]) -> bool {
    if data.is_empty() || data.contains(&0) {
        return false;
    }
    match std::str::from_utf8(data) {
        Ok(_) => true,
        // A multi-byte character cut off at the sniff boundary is still text.
        Err(e) => e.error_len().is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_xlsx() {
        let data = b"PK\x03\x04\x14\x00\x06\x00";
        assert_eq!(detect_format_from_bytes(data).unwrap(), DatasetFormat::Xlsx);
    }

    #[test]
    fn test_detect_csv() {
        let data = "id,name\nEMP1001,王伟\n".as_bytes();
        assert_eq!(detect_format_from_bytes(data).unwrap(), DatasetFormat::Csv);
    }

    #[test]
    fn test_truncated_utf8_is_text() {
        let text = "id,名".as_bytes();
        let cut = &text[..text.len() - 1];
        assert_eq!(detect_format_from_bytes(cut).unwrap(), DatasetFormat::Csv);
    }

    #[test]
    fn test_detect_unknown() {
        assert!(matches!(
            detect_format_from_bytes(&[]),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_bytes(&[0x89, 0x50, 0x4E, 0x47, 0x00, 0x0A]),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_bytes(&[0xFF, 0xFE, 0xFD]),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(DatasetFormat::Xlsx.extension(), "xlsx");
        assert_eq!(DatasetFormat::Csv.to_string(), "CSV");
    }
}
