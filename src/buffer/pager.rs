//! Pager - the page cache sitting between the table and the file.
//!
//! The [`Pager`] provides:
//! - On-demand loading of pages from the table file
//! - A cache that never evicts: a page stays resident until it is released
//! - Explicit, caller-sized write-back of resident pages

use std::path::Path;

use tracing::trace;

use crate::buffer::PagerStats;
use crate::common::config::{PAGE_SIZE, TABLE_MAX_PAGES};
use crate::common::{Error, PageId, Result};
use crate::storage::page::Page;
use crate::storage::DiskManager;

/// Owns the table file and every resident page buffer.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                          Pager                           │
/// │  ┌──────────────────────────────────────────────────┐    │
/// │  │ pages: [Option<Box<Page>>; TABLE_MAX_PAGES]      │    │
/// │  │  [Some] [Some] [None] [None] ...                 │    │
/// │  └──────────────────────────────────────────────────┘    │
/// │  ┌──────────────┐  ┌──────────────┐                      │
/// │  │ disk_manager │  │    stats     │                      │
/// │  └──────────────┘  └──────────────┘                      │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// The cache is indexed by [`PageId`], which is bounded at construction, so
/// every lookup is in range.
///
/// # Dirty Pages
/// There is no dirty tracking. Any resident page can be flushed, whether or
/// not it changed since it was loaded.
pub struct Pager {
    disk_manager: DiskManager,

    /// One slot per page of the table; `None` until first access.
    pages: [Option<Box<Page>>; TABLE_MAX_PAGES],

    stats: PagerStats,
}

impl Pager {
    /// Open (or create) the table file and start with an empty cache.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let disk_manager = DiskManager::open(path)?;

        Ok(Self {
            disk_manager,
            pages: std::array::from_fn(|_| None),
            stats: PagerStats::new(),
        })
    }

    /// Length of the table file when it was opened.
    #[inline]
    pub fn file_length(&self) -> u64 {
        self.disk_manager.file_length()
    }

    /// Fetch a page, loading it on a cache miss.
    ///
    /// A page inside the persisted region of the file is read from disk; a
    /// short read at end of file leaves the rest zero-filled. A page beyond
    /// the file's extent starts out all zeros.
    ///
    /// # Errors
    /// Returns `Error::Io` if reading the file fails. Nothing is cached in
    /// that case.
    pub fn get_page(&mut self, page_id: PageId) -> Result<&mut Page> {
        let index = page_id.index();

        if self.pages[index].is_some() {
            self.stats.cache_hits += 1;
        } else {
            self.stats.cache_misses += 1;

            let mut page = Box::new(Page::new());
            // `<=` also admits the page just past the end; that read returns
            // zero bytes.
            if index as u64 <= self.disk_manager.page_count() {
                let bytes_read = self.disk_manager.read_page(page_id, &mut page)?;
                self.stats.pages_read += 1;
                trace!(page = index, bytes_read, "loaded page");
            } else {
                trace!(page = index, "allocated page beyond end of file");
            }

            self.pages[index] = Some(page);
        }

        self.pages[index]
            .as_deref_mut()
            .ok_or(Error::PageNotResident(page_id.as_u32()))
    }

    /// Whether a buffer is currently resident for `page_id`.
    #[inline]
    pub fn is_resident(&self, page_id: PageId) -> bool {
        self.pages[page_id.index()].is_some()
    }

    /// Number of resident pages.
    pub fn resident_count(&self) -> usize {
        self.pages.iter().filter(|slot| slot.is_some()).count()
    }

    /// Write the first `byte_count` bytes of a resident page to the file.
    ///
    /// The page stays resident.
    ///
    /// # Errors
    /// - `Error::FlushTooLarge` if `byte_count > PAGE_SIZE`
    /// - `Error::PageNotResident` if the page was never loaded
    /// - `Error::Io` if the seek or write fails
    pub fn flush(&mut self, page_id: PageId, byte_count: usize) -> Result<()> {
        if byte_count > PAGE_SIZE {
            return Err(Error::FlushTooLarge { byte_count });
        }

        let page = self.pages[page_id.index()]
            .as_deref()
            .ok_or(Error::PageNotResident(page_id.as_u32()))?;

        self.disk_manager.write_page(page_id, page, byte_count)?;

        self.stats.pages_written += 1;
        self.stats.bytes_written += byte_count as u64;
        trace!(page = page_id.index(), byte_count, "flushed page");

        Ok(())
    }

    /// Drop the buffer for `page_id`. Returns whether one was resident.
    ///
    /// Unflushed changes to the page are lost.
    pub fn release(&mut self, page_id: PageId) -> bool {
        self.pages[page_id.index()].take().is_some()
    }

    /// Get a copy of the current statistics.
    #[inline]
    pub fn stats(&self) -> PagerStats {
        self.stats
    }

    /// Sync and close the file, then drop every remaining buffer.
    ///
    /// Nothing is flushed here; callers flush what they need first.
    ///
    /// # Errors
    /// Returns `Error::Io` if syncing the file fails.
    pub fn close(self) -> Result<()> {
        self.disk_manager.close()
    }
}
