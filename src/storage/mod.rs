//! Storage layer - disk I/O and page format.
//!
//! This module handles persistent storage:
//! - [`DiskManager`] - Low-level file I/O
//! - [`page`] - The 4KB page buffer

mod disk_manager;
pub mod page;

pub use disk_manager::DiskManager;
