//! Fixed file layout of a working directory.

use std::path::{Path, PathBuf};

/// Default working directory, relative to the current directory.
pub const DEFAULT_DIR: &str = "test_files";

/// Dataset workbook file name.
pub const DATASET_FILE: &str = "test_data.xlsx";

/// Stamp image file name.
pub const STAMP_FILE: &str = "stamp.png";

/// Output document file name.
pub const OUTPUT_FILE: &str = "output.docx";

/// File paths inside a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    dir: PathBuf,
}

impl Paths {
    /// Paths rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The working directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the dataset workbook.
    pub fn dataset(&self) -> PathBuf {
        self.dir.join(DATASET_FILE)
    }

    /// Path of the stamp image.
    pub fn stamp(&self) -> PathBuf {
        self.dir.join(STAMP_FILE)
    }

    /// Path of the output document.
    pub fn output(&self) -> PathBuf {
        self.dir.join(OUTPUT_FILE)
    }

    /// Check if the dataset workbook exists.
    pub fn has_dataset(&self) -> bool {
        self.dataset().is_file()
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new(DEFAULT_DIR)
    }
}
