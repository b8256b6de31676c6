//! Error types for rowdb.

use thiserror::Error;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in rowdb.
///
/// Errors come in two tiers:
/// - **Recoverable**: [`Error::TableFull`] and [`Error::FieldTooLong`]. The
///   table is untouched and the caller may carry on.
/// - **Fatal**: everything else. These are storage faults; the table should
///   not be used again. See [`Error::is_fatal`].
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the backing file (open, read, seek, write, sync).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A page index at or beyond `TABLE_MAX_PAGES`.
    #[error("Tried to fetch page number out of bounds. {page} >= {max}")]
    PageOutOfBounds { page: usize, max: usize },

    /// Flush was asked to write more than one page.
    #[error("Tried to flush {byte_count} bytes, more than a page")]
    FlushTooLarge { byte_count: usize },

    /// A row slot offset that does not leave room for a whole row.
    #[error("Row slot at byte {byte_offset} does not fit in a page")]
    SlotOutOfPage { byte_offset: usize },

    /// Flush was requested for a page that was never loaded.
    #[error("Tried to flush page {0} which is not resident")]
    PageNotResident(u32),

    /// The table already holds `TABLE_MAX_ROWS` rows.
    #[error("Table full")]
    TableFull,

    /// A row field is longer than its column capacity.
    #[error("{field} is {len} bytes, capacity is {capacity}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        capacity: usize,
    },
}

impl Error {
    /// Whether this error leaves the storage layer in an unusable state.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::TableFull | Error::FieldTooLong { .. })
    }
}
