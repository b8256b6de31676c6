//! Page identifier type.

use std::fmt;

use crate::common::config::{PAGE_SIZE, TABLE_MAX_PAGES};
use crate::common::{Error, Result};

/// Identifies a page of the table file.
///
/// A `PageId` is always in `[0, TABLE_MAX_PAGES)`: the only way to build one
/// is [`PageId::new`], which checks the bound. Code holding a `PageId` can
/// index the page cache without a further range check.
///
/// # Example
/// ```
/// use rowdb::PageId;
///
/// let page_id = PageId::new(42).unwrap();
/// assert_eq!(page_id.index(), 42);
/// assert_eq!(page_id.file_offset(), 42 * 4096);
///
/// assert!(PageId::new(100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u32);

impl PageId {
    /// Create a new PageId.
    ///
    /// # Errors
    /// Returns `Error::PageOutOfBounds` if `index >= TABLE_MAX_PAGES`.
    #[inline]
    pub fn new(index: usize) -> Result<Self> {
        if index >= TABLE_MAX_PAGES {
            return Err(Error::PageOutOfBounds {
                page: index,
                max: TABLE_MAX_PAGES,
            });
        }
        Ok(PageId(index as u32))
    }

    /// Position of this page in the page cache.
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Raw page number, as stored in error values.
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Byte offset of this page within the table file.
    #[inline]
    pub fn file_offset(&self) -> u64 {
        (self.0 as u64) * (PAGE_SIZE as u64)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
