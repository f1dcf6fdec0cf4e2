//! Test-data generation: a random roster workbook and a stamp image.

mod roster;
mod stamp;

pub use roster::{generate_roster, write_roster, DEPARTMENTS, ROSTER_HEADER};
pub use stamp::{draw_stamp, write_stamp, StampLabel, StampOptions};

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::paths::Paths;

/// Default number of generated roster rows.
pub const DEFAULT_ROW_COUNT: usize = 20;

/// Default worksheet name.
pub const DEFAULT_SHEET_NAME: &str = "Employees";

/// Options for generating test files.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Where to write the files
    pub paths: Paths,

    /// Number of roster rows
    pub row_count: usize,

    /// Worksheet name
    pub sheet_name: String,

    /// Stamp drawing options
    pub stamp: StampOptions,

    /// Seed for reproducible output; random when `None`
    pub seed: Option<u64>,

    /// Latest possible hire date; today when `None`
    pub today: Option<NaiveDate>,
}

impl GenerateOptions {
    /// Create generation options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the working directory.
    pub fn with_paths(mut self, paths: Paths) -> Self {
        self.paths = paths;
        self
    }

    /// Set the number of roster rows.
    pub fn with_row_count(mut self, rows: usize) -> Self {
        self.row_count = rows;
        self
    }

    /// Set stamp options.
    pub fn with_stamp(mut self, stamp: StampOptions) -> Self {
        self.stamp = stamp;
        self
    }

    /// Use a fixed random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fix the reference date for hire dates.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            paths: Paths::default(),
            row_count: DEFAULT_ROW_COUNT,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            stamp: StampOptions::default(),
            seed: None,
            today: None,
        }
    }
}

/// Paths of generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// Roster workbook
    pub dataset: PathBuf,
    /// Stamp image
    pub stamp: PathBuf,
}

/// Generate the roster workbook and the stamp image.
///
/// The working directory is created if needed and existing files are
/// overwritten.
pub fn generate_test_files(options: &GenerateOptions) -> Result<GeneratedFiles> {
    fs::create_dir_all(options.paths.dir())?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let today = options.today.unwrap_or_else(|| Local::now().date_naive());

    let dataset = generate_roster(options.row_count, today, &mut rng);
    let files = GeneratedFiles {
        dataset: options.paths.dataset(),
        stamp: options.paths.stamp(),
    };

    write_roster(&dataset, &options.sheet_name, &files.dataset)?;
    write_stamp(&options.stamp, &files.stamp)?;
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_options_builder() {
        let options = GenerateOptions::new()
            .with_row_count(7)
            .with_seed(3)
            .with_paths(Paths::new("out"));
        assert_eq!(options.row_count, 7);
        assert_eq!(options.seed, Some(3));
        assert_eq!(options.paths.dir(), std::path::Path::new("out"));
        assert_eq!(options.sheet_name, "Employees");
    }

    #[test]
    fn test_defaults() {
        let options = GenerateOptions::default();
        assert_eq!(options.row_count, 20);
        assert!(options.seed.is_none());
    }
}
