//! Dataset sources with a pluggable reader per file format.
//!
//! # Example
//!
//! ```no_run
//! use stampdoc::source::ReaderRegistry;
//! use std::path::Path;
//!
//! fn main() -> stampdoc::Result<()> {
//!     let registry = ReaderRegistry::with_defaults();
//!     let dataset = registry.read(Path::new("test_files/test_data.xlsx"))?;
//!     println!("{} rows", dataset.row_count());
//!     Ok(())
//! }
//! ```

mod delimited;
mod workbook;

pub use delimited::CsvReader;
pub use workbook::XlsxReader;

use crate::detect::detect_format_from_path;
use crate::error::{Error, Result};
use crate::model::Dataset;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for dataset readers.
///
/// Implement this trait to add support for a new tabular file format.
pub trait DatasetReader: Send + Sync {
    /// Get the supported file extensions for this reader.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["xlsx"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this reader.
    fn name(&self) -> &str;

    /// Read a dataset from a file. The first row becomes the header.
    fn read(&self, path: &Path) -> Result<Dataset>;

    /// Read a dataset from in-memory file contents.
    fn read_bytes(&self, bytes: &[u8]) -> Result<Dataset>;

    /// Check if this reader supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry mapping file extensions to dataset readers.
pub struct ReaderRegistry {
    readers: HashMap<String, Arc<dyn DatasetReader>>,
    by_name: HashMap<String, Arc<dyn DatasetReader>>,
}

impl ReaderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            readers: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in readers (xlsx, csv).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(XlsxReader::new()));
        registry.register(Arc::new(CsvReader::new()));
        registry
    }

    /// Register a reader for all its supported extensions.
    pub fn register(&mut self, reader: Arc<dyn DatasetReader>) {
        for ext in reader.supported_extensions() {
            self.readers.insert(ext.to_lowercase(), reader.clone());
        }
        self.by_name.insert(reader.name().to_lowercase(), reader);
    }

    /// Get a reader by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DatasetReader>> {
        self.readers.get(&ext.to_lowercase()).cloned()
    }

    /// Get a reader by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DatasetReader>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.readers.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.readers.keys().map(|s| s.as_str()).collect()
    }

    /// Read a dataset file with the reader matching its extension.
    ///
    /// Files without a known extension are sniffed by content.
    pub fn read(&self, path: &Path) -> Result<Dataset> {
        if !path.is_file() {
            return Err(Error::DatasetNotFound(path.to_path_buf()));
        }

        let by_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| self.get_by_extension(ext));

        let reader = match by_ext {
            Some(reader) => reader,
            None => {
                let format = detect_format_from_path(path)?;
                log::debug!("Detected {} for {}", format, path.display());
                self.get_by_extension(format.extension()).ok_or_else(|| {
                    Error::Other(format!("No reader for format: {}", format))
                })?
            }
        };

        log::debug!("Reading {} with {} reader", path.display(), reader.name());
        reader.read(path)
    }

    /// Read a dataset from bytes, using `ext` to pick the reader.
    pub fn read_bytes(&self, bytes: &[u8], ext: &str) -> Result<Dataset> {
        let reader = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::Other(format!("No reader for extension: {}", ext)))?;
        reader.read_bytes(bytes)
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
