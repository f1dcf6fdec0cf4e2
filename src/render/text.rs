//! Plain text preview.

use crate::model::Document;

pub use crate::model::PAGE_SEPARATOR;

/// Convert a document to a plain-text preview.
///
/// Each page is printed as its tab-separated grid and pages are separated
/// by a form-feed line.
pub fn to_text(doc: &Document) -> String {
    doc.plain_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dataset, Page, Table};

    #[test]
    fn test_to_text_single_page() {
        let mut doc = Document::new();
        let mut page = Page::new(1);
        let mut table = Table::grid(2, 2);
        table.fill_row(0, ["id", "name"]);
        table.fill_row(1, ["EMP1001", "王伟"]);
        page.add_table(table);
        doc.add_page(page);

        assert_eq!(to_text(&doc), "id\tname\nEMP1001\t王伟");
    }

    #[test]
    fn test_pages_separated_by_form_feed() {
        let mut ds = Dataset::new(["n"]);
        for i in 0..3 {
            ds.push_row(vec![(i as i64).into()]);
        }
        let options = crate::paginate::PaginateOptions::new().with_page_capacity(2);
        let pages = crate::paginate::paginate(&ds, &options).unwrap();
        let mut doc = Document::new();
        doc.pages = pages;

        let text = to_text(&doc);
        assert_eq!(text, doc.plain_text());
        let parts: Vec<&str> = text.split("\n\u{c}\n").collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].starts_with("n\n0\n1"));
        assert!(parts[1].starts_with("n\n2"));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_text(&Document::new()), "");
    }
}
