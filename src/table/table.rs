//! Table - the append-only row sequence on top of the pager.
//!
//! The [`Table`] provides:
//! - Row address translation ([`Table::row_slot`])
//! - Append ([`Table::insert`]) and full scans ([`Table::scan`])
//! - The open/close lifecycle, including row count recovery and the final
//!   flush

use std::path::Path;

use tracing::debug;

use crate::buffer::Pager;
use crate::common::config::{PAGE_SIZE, ROWS_PER_PAGE, ROW_SIZE, TABLE_MAX_ROWS};
use crate::common::{Error, PageId, Result, RowSlot};
use crate::storage::page::Page;
use crate::table::{Row, Scan};

/// A single fixed-schema table stored in one file.
///
/// # Lifecycle
/// ```ignore
/// let mut table = Table::open("users.db")?;
/// table.insert(&Row::new(1, "alice", "alice@example.com")?)?;
/// for row in table.scan() {
///     println!("{}", row?);
/// }
/// table.close()?; // nothing reaches the file before this
/// ```
///
/// Rows are only written back by [`Table::close`]. Dropping a table without
/// closing it discards every insert since it was opened.
pub struct Table {
    pager: Pager,
    num_rows: usize,
}

impl Table {
    /// Open the table stored at `path`, creating an empty file if needed.
    ///
    /// The row count is recovered from the file length. A trailing partial
    /// row is ignored.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let pager = Pager::open(path)?;
        let num_rows = rows_in_file(pager.file_length());

        debug!(
            path = %path.display(),
            file_length = pager.file_length(),
            num_rows,
            "opened table"
        );

        Ok(Self { pager, num_rows })
    }

    /// Number of rows in the table.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.num_rows >= TABLE_MAX_ROWS
    }

    /// The pager backing this table, for inspecting cache state and stats.
    #[inline]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Resolve a row index to its page buffer and byte offset in that page,
    /// loading the page if it is not resident.
    ///
    /// # Errors
    /// - `Error::PageOutOfBounds` if the row lies past the last page
    /// - `Error::Io` if loading the page fails
    pub fn row_slot(&mut self, row_index: usize) -> Result<(&mut Page, usize)> {
        let slot = RowSlot::locate(row_index)?;
        let page = self.pager.get_page(slot.page_id)?;
        Ok((page, slot.byte_offset))
    }

    /// Append a row.
    ///
    /// # Errors
    /// - `Error::TableFull` if the table already holds `TABLE_MAX_ROWS` rows;
    ///   the table is unchanged
    /// - `Error::Io` if loading the target page fails
    pub fn insert(&mut self, row: &Row) -> Result<()> {
        if self.is_full() {
            return Err(Error::TableFull);
        }

        let row_index = self.num_rows;
        let (page, byte_offset) = self.row_slot(row_index)?;
        let slot = page
            .row_bytes_mut(byte_offset)
            .ok_or(Error::SlotOutOfPage { byte_offset })?;
        row.encode_into(slot);

        self.num_rows += 1;
        Ok(())
    }

    /// Read the row at `row_index`.
    ///
    /// Does not check `row_index` against [`Table::num_rows`]; a slot past
    /// the end decodes whatever bytes the page holds there.
    pub fn read_row(&mut self, row_index: usize) -> Result<Row> {
        let (page, byte_offset) = self.row_slot(row_index)?;
        let slot = page
            .row_bytes(byte_offset)
            .ok_or(Error::SlotOutOfPage { byte_offset })?;
        Ok(Row::decode(slot))
    }

    /// Iterate over every row in insertion order.
    ///
    /// The iterator is lazy: pages are loaded as it reaches them. Calling
    /// `scan` again starts over from the first row.
    pub fn scan(&mut self) -> Scan<'_> {
        Scan::new(self)
    }

    /// Collect every row.
    pub fn select_all(&mut self) -> Result<Vec<Row>> {
        self.scan().collect()
    }

    /// Flush occupied pages and close the file.
    ///
    /// Each resident full page is written whole; the last, partially filled
    /// page is written only up to its last row. Pages that were never
    /// loaded are skipped, since the file already holds them.
    ///
    /// # Errors
    /// Returns `Error::Io` if any write or the final sync fails.
    pub fn close(self) -> Result<()> {
        let Table {
            mut pager,
            num_rows,
        } = self;

        let full_pages = num_rows / ROWS_PER_PAGE;
        for index in 0..full_pages {
            let page_id = PageId::new(index)?;
            if !pager.is_resident(page_id) {
                continue;
            }
            pager.flush(page_id, PAGE_SIZE)?;
            pager.release(page_id);
        }

        let additional_rows = num_rows % ROWS_PER_PAGE;
        if additional_rows > 0 {
            let page_id = PageId::new(full_pages)?;
            if pager.is_resident(page_id) {
                pager.flush(page_id, additional_rows * ROW_SIZE)?;
                pager.release(page_id);
            }
        }

        let stats = pager.stats();
        pager.close()?;

        debug!(num_rows, %stats, "closed table");
        Ok(())
    }
}

/// Number of whole rows stored in a file of `file_length` bytes.
///
/// Full pages hold `ROWS_PER_PAGE` rows each, followed by the unused page
/// tail; only the last page may be short.
fn rows_in_file(file_length: u64) -> usize {
    let page_size = PAGE_SIZE as u64;
    let full_pages = (file_length / page_size) as usize;
    let tail = (file_length % page_size) as usize;

    let rows = full_pages
        .saturating_mul(ROWS_PER_PAGE)
        .saturating_add((tail / ROW_SIZE).min(ROWS_PER_PAGE));
    rows.min(TABLE_MAX_ROWS)
}
