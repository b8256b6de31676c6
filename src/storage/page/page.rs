//! Page - the fundamental 4KB unit of storage.
//!
//! A [`Page`] is a raw 4KB byte array that serves as the unit of I/O
//! between the table file and the pager's cache. It holds
//! `ROWS_PER_PAGE` encoded rows back to back; the trailing bytes after the
//! last row slot carry no data.

use crate::common::config::{PAGE_SIZE, ROW_SIZE};

/// A page of data (4KB, 4KB-aligned).
///
/// # Memory Layout
/// ```text
/// ┌─────────┬─────────┬─────┬──────────┬──────────┐
/// │ Row 0   │ Row 1   │ ... │ Row 13   │ unused   │
/// │ (291B)  │ (291B)  │     │ (291B)   │ (22B)    │
/// └─────────┴─────────┴─────┴──────────┴──────────┘
/// ```
///
/// # Clone Implementation
/// `Page` does NOT implement `Clone` in production code: the pager is the
/// only owner of a page buffer. A `#[cfg(test)]` Clone is provided for tests.
///
/// # Example
/// ```
/// use rowdb::storage::page::Page;
///
/// let mut page = Page::new();
/// if let Some(slot) = page.row_bytes_mut(291) {
///     slot[0] = 0xFF;
/// }
/// assert_eq!(page.as_slice()[291], 0xFF);
/// assert!(page.row_bytes(4000).is_none());
/// ```
#[repr(align(4096))]
pub struct Page {
    data: [u8; PAGE_SIZE],
}

impl Page {
    /// Create a new zeroed page.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0u8; PAGE_SIZE],
        }
    }

    /// Get immutable slice of page data.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable slice of page data.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The `ROW_SIZE` bytes starting at `byte_offset`, or `None` if a row
    /// there would run past the end of the page.
    #[inline]
    pub fn row_bytes(&self, byte_offset: usize) -> Option<&[u8; ROW_SIZE]> {
        self.data.get(byte_offset..)?.first_chunk::<ROW_SIZE>()
    }

    /// Mutable view of the `ROW_SIZE` bytes starting at `byte_offset`, or
    /// `None` if a row there would run past the end of the page.
    #[inline]
    pub fn row_bytes_mut(&mut self, byte_offset: usize) -> Option<&mut [u8; ROW_SIZE]> {
        self.data.get_mut(byte_offset..)?.first_chunk_mut::<ROW_SIZE>()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

// Clone only available in tests - forces explicit copying in production
#[cfg(test)]
impl Clone for Page {
    fn clone(&self) -> Self {
        let mut new_page = Page::new();
        new_page.data.copy_from_slice(&self.data);
        new_page
    }
}

// ============================================================================
// TESTS
// ============================================================================
