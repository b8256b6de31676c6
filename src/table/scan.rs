//! Sequential scan over a table.

use std::iter::FusedIterator;

use crate::common::Result;
use crate::table::{Row, Table};

/// Lazy iterator over the rows of a [`Table`], in insertion order.
///
/// Created by [`Table::scan`]. Each item is the decoded row, or the error
/// hit while loading its page. The row count is fixed when the scan starts.
pub struct Scan<'a> {
    table: &'a mut Table,
    next_row: usize,
    end: usize,
}

impl<'a> Scan<'a> {
    pub(crate) fn new(table: &'a mut Table) -> Self {
        let end = table.num_rows();
        Self {
            table,
            next_row: 0,
            end,
        }
    }
}

impl Iterator for Scan<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_row >= self.end {
            return None;
        }

        let row = self.table.read_row(self.next_row);
        self.next_row += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next_row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Scan<'_> {}

impl FusedIterator for Scan<'_> {}
