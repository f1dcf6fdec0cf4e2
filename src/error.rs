//! Error types for stampdoc library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stampdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading, paginating or writing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The dataset file does not exist.
    #[error("Dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    /// The stamp image file does not exist.
    #[error("Stamp image not found: {}", .0.display())]
    StampNotFound(PathBuf),

    /// The file format is not a supported dataset format.
    #[error("Unknown file format: not a supported dataset")]
    UnknownFormat,

    /// Error reading a spreadsheet workbook.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Error reading CSV data.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Error writing a spreadsheet workbook.
    #[error("Workbook write error: {0}")]
    Workbook(String),

    /// Error decoding or encoding an image.
    #[error("Image error: {0}")]
    Image(String),

    /// A data row has more cells than the header.
    #[error("Row {row} has {found} cells but the header has {expected}")]
    RowWidth {
        /// 1-based dataset row index
        row: usize,
        /// Header column count
        expected: usize,
        /// Cells found in the row
        found: usize,
    },

    /// Page capacity must be at least one row.
    #[error("Invalid page capacity: {0}")]
    InvalidCapacity(usize),

    /// Error during rendering (docx, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        match err {
            calamine::Error::Io(e) => Error::Io(e),
            _ => Error::Spreadsheet(err.to_string()),
        }
    }
}

impl From<calamine::XlsxError> for Error {
    fn from(err: calamine::XlsxError) -> Self {
        match err {
            calamine::XlsxError::Io(e) => Error::Io(e),
            _ => Error::Spreadsheet(err.to_string()),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return Error::Csv(err.to_string());
        }
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Error::Io(e),
            kind => Error::Csv(format!("{:?}", kind)),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Error::Workbook(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            _ => Error::Image(err.to_string()),
        }
    }
}
