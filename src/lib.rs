//! rowdb - a minimal persistent row store.
//!
//! One table, one fixed schema `(id u32, username [32], email [255])`, one
//! file. Rows are appended and scanned; nothing is updated or deleted.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                             rowdb                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        REPL (repl/) + Statement preparation (statement/) │   │
//! │  │       line → MetaCommand | Statement → Table call        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                   Table (table/)                         │   │
//! │  │     Row codec + row index → (page, offset) + lifecycle   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                   Pager (buffer/)                        │   │
//! │  │        100-slot page cache, no eviction + stats          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Storage Layer (storage/)                 │   │
//! │  │               DiskManager + Page (4KB)                   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, RowSlot, Error, layout constants)
//! - [`storage`] - File I/O and the page buffer
//! - [`buffer`] - The pager (page cache)
//! - [`table`] - Rows, the table, and scans
//! - [`statement`] - Parsing input lines into statements
//! - [`repl`] - The interactive loop
//!
//! # Quick Start
//! ```no_run
//! use rowdb::{Row, Table};
//!
//! let mut table = Table::open("users.db").unwrap();
//! table.insert(&Row::new(1, "alice", "alice@example.com").unwrap()).unwrap();
//!
//! for row in table.scan() {
//!     println!("{}", row.unwrap());
//! }
//!
//! // Rows reach the file only here.
//! table.close().unwrap();
//! ```

pub mod buffer;
pub mod common;
pub mod repl;
pub mod statement;
pub mod storage;
pub mod table;

// Re-export commonly used items at crate root for convenience
pub use common::config::{PAGE_SIZE, ROWS_PER_PAGE, ROW_SIZE, TABLE_MAX_PAGES, TABLE_MAX_ROWS};
pub use common::{Error, PageId, Result, RowSlot};

pub use buffer::{Pager, PagerStats};
pub use storage::page::Page;
pub use storage::DiskManager;
pub use table::{Row, Scan, Table};
