//! Integration tests for dataset readers and the reader registry.

use std::path::Path;
use std::sync::Arc;

use stampdoc::error::Result;
use stampdoc::{CellValue, CsvReader, Dataset, DatasetReader, Error, ReaderRegistry};

/// Mock reader for testing.
struct MockReader {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockReader {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl DatasetReader for MockReader {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn read(&self, _path: &Path) -> Result<Dataset> {
        let mut ds = Dataset::new(["source"]);
        ds.push_row(vec![CellValue::text(self.name)]);
        Ok(ds)
    }

    fn read_bytes(&self, _bytes: &[u8]) -> Result<Dataset> {
        Ok(Dataset::new(["bytes"]))
    }
}

#[test]
fn test_registry_new_is_empty() {
    let registry = ReaderRegistry::new();
    assert!(!registry.supports("xlsx"));
    assert!(!registry.supports("csv"));
}

#[test]
fn test_registry_with_defaults() {
    let registry = ReaderRegistry::with_defaults();
    assert!(registry.supports("xlsx"));
    assert!(registry.supports("XLSX"));
    assert!(registry.supports("csv"));
    assert!(!registry.supports("docx"));
}

#[test]
fn test_registry_register() {
    let mut registry = ReaderRegistry::new();
    registry.register(Arc::new(MockReader::new(vec!["tsv", "tab"], "tabbed")));

    assert!(registry.supports("tsv"));
    assert!(registry.supports("tab"));
    assert_eq!(registry.get_by_name("tabbed").unwrap().name(), "tabbed");
    assert!(registry.get_by_name("missing").is_none());
}

#[test]
fn test_registry_dispatches_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.tsv");
    std::fs::write(&path, "anything").unwrap();

    let mut registry = ReaderRegistry::new();
    registry.register(Arc::new(MockReader::new(vec!["tsv"], "tabbed")));

    let ds = registry.read(&path).unwrap();
    assert_eq!(ds.header(), &["source".to_string()]);
    assert_eq!(ds.rows[0][0], CellValue::text("tabbed"));

    let bytes = registry.read_bytes(b"x", "tsv").unwrap();
    assert_eq!(bytes.header(), &["bytes".to_string()]);
}

#[test]
fn test_registry_missing_file() {
    let registry = ReaderRegistry::with_defaults();
    let result = registry.read(Path::new("/nonexistent/data.xlsx"));
    assert!(matches!(result, Err(Error::DatasetNotFound(_))));
}

#[test]
fn test_unknown_extension_falls_back_to_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.dat");
    std::fs::write(&path, "id,name\nEMP1001,王伟\n").unwrap();

    let ds = ReaderRegistry::with_defaults().read(&path).unwrap();
    assert_eq!(ds.column_count(), 2);
    assert_eq!(ds.rows[0][1], CellValue::text("王伟"));
}

#[test]
fn test_binary_content_is_unknown_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blob");
    std::fs::write(&path, [0u8, 1, 2, 3, 0, 0]).unwrap();

    let result = ReaderRegistry::with_defaults().read(&path);
    assert!(matches!(result, Err(Error::UnknownFormat)));
}

#[test]
fn test_csv_reader_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.csv");
    std::fs::write(&path, "a;b;c\n1;2;3\n").unwrap();

    let ds = CsvReader::new().read(&path).unwrap();
    assert_eq!(ds.column_count(), 3);
    assert_eq!(ds.rows[0][2], CellValue::text("3"));
}
