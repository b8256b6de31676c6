//! Row slot: where a logical row lives inside the table file.

use std::fmt;

use crate::common::config::{ROWS_PER_PAGE, ROW_SIZE};
use crate::common::{PageId, Result};

/// The (page, offset) location of a row.
///
/// Row `i` lives on page `i / ROWS_PER_PAGE` at byte offset
/// `(i % ROWS_PER_PAGE) * ROW_SIZE` within that page. The mapping is pure:
/// it never touches the pager.
///
/// # Example
/// ```
/// use rowdb::RowSlot;
///
/// let slot = RowSlot::locate(14).unwrap();
/// assert_eq!(slot.page_id.index(), 1);
/// assert_eq!(slot.byte_offset, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    pub page_id: PageId,
    pub byte_offset: usize,
}

impl RowSlot {
    /// Resolve a row index to its slot.
    ///
    /// # Errors
    /// Returns `Error::PageOutOfBounds` if the row would land past the last
    /// page of the table.
    pub fn locate(row_index: usize) -> Result<Self> {
        let page_id = PageId::new(row_index / ROWS_PER_PAGE)?;
        let byte_offset = (row_index % ROWS_PER_PAGE) * ROW_SIZE;
        Ok(RowSlot {
            page_id,
            byte_offset,
        })
    }
}

impl fmt::Display for RowSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.page_id, self.byte_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::{PAGE_SIZE, TABLE_MAX_ROWS};
    use crate::common::Error;

    #[test]
    fn test_first_row() {
        let slot = RowSlot::locate(0).unwrap();
        assert_eq!(slot.page_id.index(), 0);
        assert_eq!(slot.byte_offset, 0);
    }

    #[test]
    fn test_page_boundary() {
        let last_on_page = RowSlot::locate(13).unwrap();
        assert_eq!(last_on_page.page_id.index(), 0);
        assert_eq!(last_on_page.byte_offset, 13 * 291);

        let first_on_next = RowSlot::locate(14).unwrap();
        assert_eq!(first_on_next.page_id.index(), 1);
        assert_eq!(first_on_next.byte_offset, 0);
    }

    #[test]
    fn test_rows_never_cross_page_end() {
        for row in 0..TABLE_MAX_ROWS {
            let slot = RowSlot::locate(row).unwrap();
            assert!(slot.byte_offset + ROW_SIZE <= PAGE_SIZE);
        }
    }

    #[test]
    fn test_last_row_and_beyond() {
        let slot = RowSlot::locate(TABLE_MAX_ROWS - 1).unwrap();
        assert_eq!(slot.page_id.index(), 99);
        assert_eq!(slot.byte_offset, 13 * 291);

        assert!(matches!(
            RowSlot::locate(TABLE_MAX_ROWS),
            Err(Error::PageOutOfBounds { page: 100, .. })
        ));
    }

    #[test]
    fn test_row_slot_display() {
        assert_eq!(format!("{}", RowSlot::locate(15).unwrap()), "Page(1)+291");
    }
}
