//! Disk Manager - low-level file I/O for table pages.
//!
//! The [`DiskManager`] handles all direct file operations:
//! - Opening (and creating) the table file
//! - Reading a page, tolerating a short read at end of file
//! - Writing the leading bytes of a page
//! - Syncing the file on close

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::common::config::PAGE_SIZE;
use crate::common::{Error, PageId, Result};
use crate::storage::page::Page;

/// Manages disk I/O for a single table file.
///
/// # File Layout
/// ```text
/// ┌─────────┬─────────┬─────────┬───────────────┐
/// │ Page 0  │ Page 1  │  ...    │ Page N        │
/// │ (4KB)   │ (4KB)   │         │ (≤ 4KB)       │
/// └─────────┴─────────┴─────────┴───────────────┘
/// Offset:  0      4096     ...    N×4096
/// ```
///
/// Only occupied rows of the last page are ever written, so the file length
/// is usually not a multiple of `PAGE_SIZE`.
///
/// # Durability
/// Writes are not synced individually. [`DiskManager::close`] syncs once;
/// anything not flushed before then is lost.
pub struct DiskManager {
    file: File,
    /// Length of the file when it was opened, in bytes.
    file_length: u64,
}

impl DiskManager {
    /// Open a table file for read/write, creating it if it doesn't exist.
    ///
    /// New files are created with owner-only read/write permissions.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let file = options.open(path)?;
        let file_length = file.metadata()?.len();

        Ok(Self { file, file_length })
    }

    /// Length of the file at open time, in bytes.
    #[inline]
    pub fn file_length(&self) -> u64 {
        self.file_length
    }

    /// Number of pages represented in the file, counting a trailing partial
    /// page as a whole one.
    #[inline]
    pub fn page_count(&self) -> u64 {
        self.file_length.div_ceil(PAGE_SIZE as u64)
    }

    /// Read a page from disk into `page`.
    ///
    /// Reads up to `PAGE_SIZE` bytes starting at the page's offset. Hitting
    /// end of file early is not an error: the rest of `page` is left as it
    /// was (zeroed, for a fresh page).
    ///
    /// Returns the number of bytes read.
    ///
    /// # Errors
    /// Returns `Error::Io` if the seek or read fails.
    pub fn read_page(&mut self, page_id: PageId, page: &mut Page) -> Result<usize> {
        self.file.seek(SeekFrom::Start(page_id.file_offset()))?;

        let buf = page.as_mut_slice();
        let mut filled = 0;
        while filled < PAGE_SIZE {
            match self.file.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(filled)
    }

    /// Write the first `byte_count` bytes of `page` at the page's offset.
    ///
    /// # Errors
    /// - `Error::FlushTooLarge` if `byte_count > PAGE_SIZE`; nothing is written
    /// - `Error::Io` if the seek or write fails
    pub fn write_page(&mut self, page_id: PageId, page: &Page, byte_count: usize) -> Result<()> {
        let bytes = page
            .as_slice()
            .get(..byte_count)
            .ok_or(Error::FlushTooLarge { byte_count })?;

        self.file.seek(SeekFrom::Start(page_id.file_offset()))?;
        self.file.write_all(bytes)?;

        Ok(())
    }

    /// Sync all written data and close the file.
    ///
    /// # Errors
    /// Returns `Error::Io` if the sync fails.
    pub fn close(self) -> Result<()> {
        self.file.sync_all()?;
        Ok(())
    }
}
