//! Page type and layout.
//!
//! This module contains [`Page`], the raw 4KB data container holding
//! fixed-width rows.

#[allow(clippy::module_inception)]
mod page;

pub use page::Page;
