//! Pagination of tabular datasets into fixed-size pages.
//!
//! Rows are placed purely by index: with a page capacity of `K`, dataset
//! row `i` (1-based, row 1 being the header) goes to page `(i - 2) / K`,
//! grid row `(i - 2) % K + 1`. See [`layout::position`].

pub mod layout;
mod options;
mod paginator;

pub use layout::{is_page_start, page_count, position, RowPosition};
pub use options::{ErrorMode, PaginateOptions, DEFAULT_PAGE_CAPACITY, STAMP_RESOURCE_ID};
pub use paginator::Paginator;

use crate::error::Result;
use crate::model::{Dataset, Document, Metadata, Page, Resource};

/// Paginate a dataset with the given options.
pub fn paginate(dataset: &Dataset, options: &PaginateOptions) -> Result<Vec<Page>> {
    Paginator::with_options(options.clone())?.paginate(dataset)
}

/// Paginate a dataset and assemble a document that embeds the stamp once.
pub fn assemble_document(
    dataset: &Dataset,
    stamp: Resource,
    options: &PaginateOptions,
) -> Result<Document> {
    let pages = paginate(dataset, options)?;

    let mut doc = Document::new();
    doc.metadata = Metadata {
        page_count: pages.len() as u32,
        row_count: dataset.row_count() as u32,
        page_capacity: options.page_capacity as u32,
        ..Metadata::default()
    };
    doc.pages = pages;
    doc.add_resource(options.stamp_id.clone(), stamp);
    Ok(doc)
}
