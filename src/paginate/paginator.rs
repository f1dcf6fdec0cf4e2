//! Dataset paginator.

use crate::error::{Error, Result};
use crate::model::{Alignment, Block, Dataset, Page, Table};

use super::layout::{is_page_start, position};
use super::options::{ErrorMode, PaginateOptions};

/// Splits a dataset into fixed-capacity pages.
///
/// Every page gets a full grid of `capacity + 1` rows by `header.len()`
/// columns with the header in row 0, followed by the stamp image. Pages
/// after the first start with a page break.
#[derive(Debug, Clone)]
pub struct Paginator {
    options: PaginateOptions,
}

impl Paginator {
    /// Create a paginator with default options.
    pub fn new() -> Self {
        Self {
            options: PaginateOptions::default(),
        }
    }

    /// Create a paginator with custom options.
    pub fn with_options(options: PaginateOptions) -> Result<Self> {
        if options.page_capacity == 0 {
            return Err(Error::InvalidCapacity(0));
        }
        Ok(Self { options })
    }

    /// Get the options in use.
    pub fn options(&self) -> &PaginateOptions {
        &self.options
    }

    /// Paginate a dataset.
    ///
    /// A dataset without a header yields no pages; a header with no data
    /// rows yields one header-only page.
    pub fn paginate(&self, dataset: &Dataset) -> Result<Vec<Page>> {
        let Some(header) = dataset.header.as_deref() else {
            log::warn!("Dataset has no header row, no pages produced");
            return Ok(Vec::new());
        };
        let capacity = self.options.page_capacity;

        let fold = dataset
            .indexed_rows()
            .try_fold(PageFold::default(), |mut acc, (index, cells)| {
                if is_page_start(index, capacity) {
                    let number = acc.pages.len() as u32 + acc.current.is_some() as u32 + 1;
                    acc.start(self.open_page(number, header));
                }

                if let Some(pos) = position(index, capacity) {
                    let cells = self.fit_row(index, cells, header.len())?;
                    let page = acc
                        .current
                        .as_mut()
                        .ok_or_else(|| Error::Other(format!("row {} has no open page", index)))?;
                    if let Some(table) = page.table_mut() {
                        table.fill_row(pos.row_in_page, cells.iter().cloned());
                    }
                    page.rows.push(cells);
                }

                Ok::<_, Error>(acc)
            })?;

        Ok(fold.finish())
    }

    fn open_page(&self, number: u32, header: &[String]) -> Page {
        log::debug!("Opening page {}", number);

        let mut page = Page::new(number);
        if number > 1 {
            page.add_block(Block::PageBreak);
        }

        let mut table = Table::grid(self.options.page_capacity + 1, header.len());
        table.fill_row(0, header.iter().cloned());
        page.add_table(table);

        page.add_block(Block::image(
            self.options.stamp_id.clone(),
            Alignment::Right,
        ));
        page
    }

    fn fit_row(&self, index: usize, mut cells: Vec<String>, width: usize) -> Result<Vec<String>> {
        if cells.len() <= width {
            return Ok(cells);
        }
        match self.options.error_mode {
            ErrorMode::Strict => Err(Error::RowWidth {
                row: index,
                expected: width,
                found: cells.len(),
            }),
            ErrorMode::Lenient => {
                log::warn!(
                    "Row {} has {} cells, dropping {} past the header width",
                    index,
                    cells.len(),
                    cells.len() - width
                );
                cells.truncate(width);
                Ok(cells)
            }
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold state: finished pages plus the page currently being filled.
#[derive(Default)]
struct PageFold {
    pages: Vec<Page>,
    current: Option<Page>,
}

impl PageFold {
    fn start(&mut self, page: Page) {
        if let Some(done) = self.current.replace(page) {
            self.pages.push(done);
        }
    }

    fn finish(mut self) -> Vec<Page> {
        self.pages.extend(self.current.take());
        self.pages
    }
}
