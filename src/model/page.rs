//! Page-level types.

use super::Table;
use serde::{Deserialize, Serialize};

/// A single page in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Data rows placed on this page, as display text, in dataset order
    pub rows: Vec<Vec<String>>,

    /// Content blocks on the page, in render order
    pub elements: Vec<Block>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            rows: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: Block) {
        self.elements.push(block);
    }

    /// Add a table to the page.
    pub fn add_table(&mut self, table: Table) {
        self.elements.push(Block::Table(table));
    }

    /// The first table on the page.
    pub fn table(&self) -> Option<&Table> {
        self.elements.iter().find_map(|block| match block {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Mutable access to the first table on the page.
    pub fn table_mut(&mut self) -> Option<&mut Table> {
        self.elements.iter_mut().find_map(|block| match block {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Number of page breaks on the page.
    pub fn page_break_count(&self) -> usize {
        self.elements.iter().filter(|b| b.is_page_break()).count()
    }

    /// Check if the page starts with a page break.
    pub fn starts_with_break(&self) -> bool {
        self.elements.first().is_some_and(Block::is_page_break)
    }

    /// Whether a page break precedes this page in the rendered document.
    pub fn page_break_before(&self) -> bool {
        self.starts_with_break()
    }

    /// Image blocks on the page.
    pub fn images(&self) -> impl Iterator<Item = &Block> {
        self.elements.iter().filter(|b| b.is_image())
    }

    /// Get plain text content of the page.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|block| match block {
                Block::Table(t) => Some(t.plain_text()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Check if the page is empty (no content blocks).
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Horizontal alignment of a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}

/// A content block on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A table
    Table(Table),

    /// An image reference
    Image {
        /// Resource ID for the image
        resource_id: String,
        /// Paragraph alignment of the image
        alignment: Alignment,
    },

    /// A page break marker
    PageBreak,
}

impl Block {
    /// Create an image block.
    pub fn image(resource_id: impl Into<String>, alignment: Alignment) -> Self {
        Block::Image {
            resource_id: resource_id.into(),
            alignment,
        }
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, Block::Image { .. })
    }

    /// Check if this block is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(1);
        assert_eq!(page.number, 1);
        assert!(page.is_empty());
        assert!(page.table().is_none());
        assert!(!page.starts_with_break());
    }

    #[test]
    fn test_page_blocks() {
        let mut page = Page::new(2);
        page.add_block(Block::PageBreak);
        page.add_table(Table::grid(2, 2));
        page.add_block(Block::image("stamp", Alignment::Right));

        assert!(page.starts_with_break());
        assert_eq!(page.page_break_count(), 1);
        assert_eq!(page.images().count(), 1);
        assert_eq!(page.elements.len(), 3);
        assert!(page.table().is_some());
    }

    #[test]
    fn test_block_variants() {
        let img = Block::image("img1", Alignment::Right);
        assert!(img.is_image());
        assert!(!img.is_table());
        assert!(Block::PageBreak.is_page_break());
    }
}
