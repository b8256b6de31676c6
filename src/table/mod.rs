//! Table layer - rows, addressing, and the open/close lifecycle.
//!
//! # Components
//! - [`Row`] - The fixed-schema record and its 291-byte encoding
//! - [`Table`] - Row sequence stored through the [`Pager`](crate::buffer::Pager)
//! - [`Scan`] - Lazy iterator over all rows

mod row;
mod scan;
#[allow(clippy::module_inception)]
mod table;

pub use row::Row;
pub use scan::Scan;
pub use table::Table;
