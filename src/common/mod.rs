//! Common types and utilities shared across rowdb.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Layout constants
//! - Error types
//! - Addressing (PageId, RowSlot)

pub mod config;
pub mod error;
mod page_id;
mod row_slot;

pub use error::{Error, Result};
pub use page_id::PageId;
pub use row_slot::RowSlot;
