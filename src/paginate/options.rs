//! Pagination options and configuration.

/// Default number of data rows per page.
pub const DEFAULT_PAGE_CAPACITY: usize = 5;

/// Resource ID used for the stamp image.
pub const STAMP_RESOURCE_ID: &str = "stamp";

/// Options for paginating a dataset.
#[derive(Debug, Clone)]
pub struct PaginateOptions {
    /// Maximum data rows per page
    pub page_capacity: usize,

    /// Error handling mode for malformed rows
    pub error_mode: ErrorMode,

    /// Resource ID of the image placed on every page
    pub stamp_id: String,
}

impl PaginateOptions {
    /// Create new pagination options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page capacity.
    pub fn with_page_capacity(mut self, capacity: usize) -> Self {
        self.page_capacity = capacity;
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (truncate over-long rows).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the stamp resource ID.
    pub fn with_stamp_id(mut self, id: impl Into<String>) -> Self {
        self.stamp_id = id.into();
        self
    }
}

impl Default for PaginateOptions {
    fn default() -> Self {
        Self {
            page_capacity: DEFAULT_PAGE_CAPACITY,
            error_mode: ErrorMode::Strict,
            stamp_id: STAMP_RESOURCE_ID.to_string(),
        }
    }
}

/// Error handling mode during pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on a row wider than the header
    #[default]
    Strict,
    /// Drop the extra cells and continue
    Lenient,
}
