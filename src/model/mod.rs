//! Document model types.
//!
//! This module defines the intermediate representation (IR) that bridges
//! dataset reading and document rendering. Pagination produces these types
//! without touching any rendering library, so page layout can be checked
//! on its own.

mod dataset;
mod document;
mod page;
mod resource;
mod table;

pub use dataset::{CellValue, Dataset};
pub use document::{Document, Metadata, PageSetup, PAGE_SEPARATOR};
pub use page::{Alignment, Block, Page};
pub use resource::Resource;
pub use table::{Table, TableCell, TableRow};
