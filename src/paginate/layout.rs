//! Row placement arithmetic.
//!
//! Dataset rows are numbered from 1, with row 1 being the header. Data rows
//! start at index 2. Placement depends only on the row index and the page
//! capacity, never on row content.

use serde::{Deserialize, Serialize};

/// Where a data row lands in the paginated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPosition {
    /// 0-based page index
    pub page_index: usize,

    /// 1-based grid row within the page (grid row 0 is the header)
    pub row_in_page: usize,
}

/// Map a 1-based dataset row index to its page and grid row.
///
/// Returns `None` for the header (index 1), for index 0, and when
/// `capacity` is 0.
pub fn position(row_index: usize, capacity: usize) -> Option<RowPosition> {
    if row_index < 2 || capacity == 0 {
        return None;
    }
    let offset = row_index - 2;
    Some(RowPosition {
        page_index: offset / capacity,
        row_in_page: offset % capacity + 1,
    })
}

/// Check whether the row at `row_index` opens a new page.
///
/// The header opens the first page. After that a page opens at every data
/// row that lands in grid row 1, so a boundary row is always the first row
/// of its own page.
pub fn is_page_start(row_index: usize, capacity: usize) -> bool {
    if capacity == 0 {
        return false;
    }
    row_index == 1
        || position(row_index, capacity).is_some_and(|p| p.row_in_page == 1 && p.page_index > 0)
}

/// Number of pages produced for `data_rows` data rows.
///
/// A header with no data still gets one page.
pub fn page_count(data_rows: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    data_rows.div_ceil(capacity).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_has_no_position() {
        assert_eq!(position(0, 5), None);
        assert_eq!(position(1, 5), None);
        assert_eq!(position(2, 0), None);
    }

    #[test]
    fn test_first_page_positions() {
        assert_eq!(
            position(2, 5),
            Some(RowPosition {
                page_index: 0,
                row_in_page: 1
            })
        );
        assert_eq!(
            position(6, 5),
            Some(RowPosition {
                page_index: 0,
                row_in_page: 5
            })
        );
    }

    #[test]
    fn test_rollover_to_next_page() {
        assert_eq!(
            position(7, 5),
            Some(RowPosition {
                page_index: 1,
                row_in_page: 1
            })
        );
        assert_eq!(
            position(21, 5),
            Some(RowPosition {
                page_index: 3,
                row_in_page: 5
            })
        );
    }

    #[test]
    fn test_page_starts() {
        let starts: Vec<usize> = (1..=21).filter(|&i| is_page_start(i, 5)).collect();
        assert_eq!(starts, vec![1, 7, 12, 17]);
        assert!(!is_page_start(0, 5));
        assert!(!is_page_start(1, 0));
    }

    #[test]
    fn test_page_start_matches_rollover() {
        for capacity in 1..8 {
            let mut pages = 1;
            for i in 2..50 {
                if is_page_start(i, capacity) {
                    pages += 1;
                }
                let pos = position(i, capacity).unwrap();
                assert_eq!(pos.page_index + 1, pages);
            }
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(7, 5), 2);
        assert_eq!(page_count(20, 5), 4);
        assert_eq!(page_count(3, 0), 0);
    }
}
