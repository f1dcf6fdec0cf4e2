//! Document statistics.

use serde::{Deserialize, Serialize};

use crate::model::Document;

/// Counts describing a paginated document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of pages
    pub page_count: u32,

    /// Number of data rows placed on pages
    pub row_count: u32,

    /// Data rows per page
    pub page_capacity: u32,

    /// Number of table columns
    pub column_count: u32,

    /// Number of page breaks
    pub page_break_count: u32,

    /// Number of stamp images placed
    pub image_count: u32,

    /// Unfilled body rows on the last page
    pub blank_row_count: u32,
}

impl DocumentStats {
    /// Collect statistics from a document.
    pub fn from_document(doc: &Document) -> Self {
        let column_count = doc
            .pages
            .first()
            .and_then(|page| page.table())
            .map(|table| table.column_count())
            .unwrap_or(0);
        let blank_row_count = doc
            .pages
            .last()
            .and_then(|page| page.table())
            .map(|table| table.body().len() - table.filled_body_rows())
            .unwrap_or(0);

        Self {
            page_count: doc.page_count(),
            row_count: doc.pages.iter().map(|p| p.rows.len() as u32).sum(),
            page_capacity: doc.metadata.page_capacity,
            column_count: column_count as u32,
            page_break_count: doc.page_break_count() as u32,
            image_count: doc.image_count() as u32,
            blank_row_count: blank_row_count as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;
    use crate::paginate::{paginate, PaginateOptions};

    #[test]
    fn test_stats_for_seven_rows() {
        let mut ds = Dataset::new(["a", "b", "c"]);
        for i in 0..7 {
            ds.push_row(vec![(i as i64).into(), "x".into(), "y".into()]);
        }
        let mut doc = Document::new();
        doc.pages = paginate(&ds, &PaginateOptions::default()).unwrap();
        doc.metadata.page_capacity = 5;

        let stats = DocumentStats::from_document(&doc);
        assert_eq!(stats.page_count, 2);
        assert_eq!(stats.row_count, 7);
        assert_eq!(stats.column_count, 3);
        assert_eq!(stats.page_break_count, 1);
        assert_eq!(stats.image_count, 2);
        assert_eq!(stats.blank_row_count, 3);
    }

    #[test]
    fn test_empty_document_stats() {
        let stats = DocumentStats::from_document(&Document::new());
        assert_eq!(stats, DocumentStats::default());
    }
}
