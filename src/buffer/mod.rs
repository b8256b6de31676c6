//! Page cache management.
//!
//! The pager is the in-memory cache layer between the table and disk. It
//! holds at most one buffer per page of the table and never evicts.
//!
//! # Components
//! - [`Pager`] - The page cache and sole owner of the table file
//! - [`PagerStats`] - Cache and I/O counters

mod pager;
mod stats;

pub use pager::Pager;
pub use stats::PagerStats;
