//! # stampdoc
//!
//! Paginate spreadsheet rows into a stamped Word document.
//!
//! Rows of a workbook or CSV file are copied into fixed-size tables, one
//! table per page, with the header repeated on every page and a stamp image
//! placed once under each table.
//!
//! ## Quick Start
//!
//! ```no_run
//! use stampdoc::Stampdoc;
//!
//! fn main() -> stampdoc::Result<()> {
//!     Stampdoc::new()
//!         .with_page_capacity(5)
//!         .load("test_files/test_data.xlsx", "test_files/stamp.png")?
//!         .write_docx("test_files/output.docx")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Sources**: `.xlsx` workbooks and `.csv` files, sniffed by content
//!   when the extension is unknown
//! - **Pagination**: pure index arithmetic, testable without any renderer
//! - **Outputs**: Word (.docx), plain-text preview, JSON
//! - **Test data**: random roster workbook and a drawn stamp image

pub mod detect;
pub mod error;
pub mod generate;
pub mod model;
pub mod paginate;
pub mod paths;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, DatasetFormat};
pub use error::{Error, Result};
pub use generate::{generate_test_files, GenerateOptions, GeneratedFiles, StampOptions};
pub use model::{
    Alignment, Block, CellValue, Dataset, Document, Metadata, Page, PageSetup, Resource, Table,
    TableCell, TableRow,
};
pub use paginate::{ErrorMode, PaginateOptions, Paginator};
pub use paths::Paths;
pub use render::{DocumentStats, JsonFormat, RenderOptions};
pub use source::{CsvReader, DatasetReader, ReaderRegistry, XlsxReader};

use std::path::Path;

/// Read a dataset, choosing the reader by extension or content.
///
/// # Example
///
/// ```no_run
/// use stampdoc::read_dataset;
///
/// let dataset = read_dataset("test_files/test_data.xlsx").unwrap();
/// println!("Rows: {}", dataset.row_count());
/// ```
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    ReaderRegistry::with_defaults().read(path.as_ref())
}

/// Paginate a dataset and embed the stamp into a document.
pub fn build_document(
    dataset: &Dataset,
    stamp: Resource,
    options: &PaginateOptions,
) -> Result<Document> {
    paginate::assemble_document(dataset, stamp, options)
}

/// Convert a dataset file into a stamped .docx with default options.
///
/// # Arguments
///
/// * `dataset` - Path to the workbook or CSV file
/// * `stamp` - Path to the stamp image
/// * `output` - Path of the .docx to create or overwrite
///
/// # Example
///
/// ```no_run
/// use stampdoc::convert_file;
///
/// convert_file(
///     "test_files/test_data.xlsx",
///     "test_files/stamp.png",
///     "test_files/output.docx",
/// )
/// .unwrap();
/// ```
pub fn convert_file<P, Q, R>(dataset: P, stamp: Q, output: R) -> Result<Document>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let result = Stampdoc::new().load(dataset, stamp)?;
    result.write_docx(output)?;
    Ok(result.document)
}

/// Builder for reading, paginating and rendering a dataset.
///
/// # Example
///
/// ```no_run
/// use stampdoc::Stampdoc;
///
/// let preview = Stampdoc::new()
///     .with_page_capacity(10)
///     .lenient()
///     .load("rows.csv", "stamp.png")?
///     .to_text();
/// println!("{}", preview);
/// # Ok::<(), stampdoc::Error>(())
/// ```
pub struct Stampdoc {
    paginate_options: PaginateOptions,
    render_options: RenderOptions,
    registry: ReaderRegistry,
}

impl Stampdoc {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            paginate_options: PaginateOptions::default(),
            render_options: RenderOptions::default(),
            registry: ReaderRegistry::with_defaults(),
        }
    }

    /// Set the number of data rows per page.
    pub fn with_page_capacity(mut self, capacity: usize) -> Self {
        self.paginate_options = self.paginate_options.with_page_capacity(capacity);
        self
    }

    /// Truncate rows wider than the header instead of failing.
    pub fn lenient(mut self) -> Self {
        self.paginate_options = self.paginate_options.lenient();
        self
    }

    /// Replace the pagination options.
    pub fn with_paginate_options(mut self, options: PaginateOptions) -> Self {
        self.paginate_options = options;
        self
    }

    /// Replace the render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Use a custom reader registry.
    pub fn with_registry(mut self, registry: ReaderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Read the dataset and stamp, and paginate them into a document.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        self,
        dataset_path: P,
        stamp_path: Q,
    ) -> Result<StampdocResult> {
        let dataset_path = dataset_path.as_ref();
        let dataset = self.registry.read(dataset_path)?;
        let stamp = Resource::open(stamp_path)?;
        let mut result = self.build(&dataset, stamp)?;
        result.document.metadata.source = Some(dataset_path.display().to_string());
        result.document.metadata.title = dataset_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
        Ok(result)
    }

    /// Paginate an in-memory dataset.
    pub fn build(self, dataset: &Dataset, stamp: Resource) -> Result<StampdocResult> {
        let mut document = build_document(dataset, stamp, &self.paginate_options)?;
        document.metadata.created = Some(chrono::Utc::now());
        Ok(StampdocResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Stampdoc {
    fn default() -> Self {
        Self::new()
    }
}

/// A paginated document ready for rendering.
pub struct StampdocResult {
    /// The paginated document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl StampdocResult {
    /// Write the document as .docx, creating or truncating the file.
    pub fn write_docx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::write_docx(&self.document, &self.render_options, path)
    }

    /// Render the plain-text preview.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Collect document statistics.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::from_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
