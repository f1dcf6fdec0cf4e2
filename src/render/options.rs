//! Rendering options and unit conversions.

use crate::model::PageSetup;

/// Twentieths of a point per centimeter.
const TWIPS_PER_CM: f32 = 1440.0 / 2.54;

/// English Metric Units per centimeter.
const EMU_PER_CM: f32 = 360_000.0;

/// Default width of each table column.
pub const DEFAULT_COLUMN_WIDTH_CM: f32 = 4.0;

/// Default display width of the stamp image.
pub const DEFAULT_STAMP_WIDTH_CM: f32 = 3.5;

/// Options for rendering a document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Page layout; the document's own setup is used when `None`
    pub page_setup: Option<PageSetup>,

    /// Width of every table column
    pub column_width_cm: f32,

    /// Display width of the stamp; the height follows the aspect ratio
    pub stamp_width_cm: f32,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the page layout.
    pub fn with_page_setup(mut self, setup: PageSetup) -> Self {
        self.page_setup = Some(setup);
        self
    }

    /// Set the column width.
    pub fn with_column_width(mut self, cm: f32) -> Self {
        self.column_width_cm = cm;
        self
    }

    /// Set the stamp display width.
    pub fn with_stamp_width(mut self, cm: f32) -> Self {
        self.stamp_width_cm = cm;
        self
    }

    /// Column width in twips.
    pub fn column_width_twips(&self) -> usize {
        cm_to_twips(self.column_width_cm) as usize
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_setup: None,
            column_width_cm: DEFAULT_COLUMN_WIDTH_CM,
            stamp_width_cm: DEFAULT_STAMP_WIDTH_CM,
        }
    }
}

/// Convert centimeters to twips, rounded to the nearest unit.
pub fn cm_to_twips(cm: f32) -> u32 {
    (cm * TWIPS_PER_CM).round().max(0.0) as u32
}

/// Convert centimeters to EMUs, rounded to the nearest unit.
pub fn cm_to_emu(cm: f32) -> u32 {
    (cm * EMU_PER_CM).round().max(0.0) as u32
}
