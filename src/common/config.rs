//! Layout constants for rowdb.
//!
//! Every size here is fixed for the lifetime of a database file. Changing any
//! of them makes existing files unreadable.

/// Size of a page in bytes (4KB).
///
/// The page is the unit of caching and of file I/O. Page `N` lives at file
/// offset `N × PAGE_SIZE`.
pub const PAGE_SIZE: usize = 4096;

/// Maximum number of pages a table may occupy.
pub const TABLE_MAX_PAGES: usize = 100;

/// Capacity of the `username` column in bytes.
pub const COLUMN_USERNAME_SIZE: usize = 32;

/// Capacity of the `email` column in bytes.
pub const COLUMN_EMAIL_SIZE: usize = 255;

/// Encoded width of each row field.
pub const ID_SIZE: usize = std::mem::size_of::<u32>();
pub const USERNAME_SIZE: usize = COLUMN_USERNAME_SIZE;
pub const EMAIL_SIZE: usize = COLUMN_EMAIL_SIZE;

/// Byte offset of each field within an encoded row.
pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;

/// Size of one encoded row (4 + 32 + 255 = 291 bytes).
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

/// Rows never straddle a page boundary, so the tail of each page is unused.
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;

/// Hard capacity of the table.
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;
