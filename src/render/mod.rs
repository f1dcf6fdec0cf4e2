//! Rendering module for writing documents to output formats.

mod docx;
mod json;
mod options;
mod stats;
mod text;

pub use docx::{to_docx, write_docx, DocxRenderer};
pub use json::{to_json, JsonFormat};
pub use options::{
    cm_to_emu, cm_to_twips, RenderOptions, DEFAULT_COLUMN_WIDTH_CM, DEFAULT_STAMP_WIDTH_CM,
};
pub use stats::DocumentStats;
pub use text::{to_text, PAGE_SEPARATOR};
