//! Document-level types.

use super::{Page, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Line placed between pages in plain text.
pub const PAGE_SEPARATOR: &str = "\u{c}";

/// A paginated document ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, source, counts)
    pub metadata: Metadata,

    /// Physical page layout
    pub setup: PageSetup,

    /// Pages in the document
    pub pages: Vec<Page>,

    /// Embedded resources, referenced from pages by ID
    pub resources: HashMap<String, Resource>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            setup: PageSetup::default(),
            pages: Vec::new(),
            resources: HashMap::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Add a resource to the document.
    pub fn add_resource(&mut self, id: impl Into<String>, resource: Resource) {
        self.resources.insert(id.into(), resource);
    }

    /// Get a resource by ID.
    pub fn get_resource(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of page breaks across all pages.
    pub fn page_break_count(&self) -> usize {
        self.pages.iter().map(Page::page_break_count).sum()
    }

    /// Total number of image blocks across all pages.
    pub fn image_count(&self) -> usize {
        self.pages.iter().map(|p| p.images().count()).sum()
    }

    /// Get plain text content of the entire document, one grid per page,
    /// with a form-feed line between pages.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", PAGE_SEPARATOR))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Path of the dataset the document was built from
    pub source: Option<String>,

    /// Creation time
    pub created: Option<DateTime<Utc>>,

    /// Total number of pages
    pub page_count: u32,

    /// Number of data rows transcribed
    pub row_count: u32,

    /// Maximum data rows per page
    pub page_capacity: u32,
}

/// Physical page size and margins, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    /// Page width
    pub width_cm: f32,

    /// Page height
    pub height_cm: f32,

    /// Top margin
    pub top_margin_cm: f32,

    /// Bottom margin
    pub bottom_margin_cm: f32,
}

impl PageSetup {
    /// A4 portrait (21 x 29.7 cm) with 2.54 cm top and bottom margins.
    pub fn a4() -> Self {
        Self {
            width_cm: 21.0,
            height_cm: 29.7,
            top_margin_cm: 2.54,
            bottom_margin_cm: 2.54,
        }
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width_cm > self.height_cm
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a4()
    }
}
