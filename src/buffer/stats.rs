//! Pager statistics tracking.

use std::fmt;

/// Counters kept by the [`Pager`](crate::buffer::Pager).
///
/// The pager is single-threaded and owned, so these are plain integers
/// updated through `&mut self`. The struct is `Copy`: callers take a copy
/// when they want a point-in-time view.
///
/// # Example
/// ```
/// use rowdb::PagerStats;
///
/// let mut stats = PagerStats::new();
/// stats.cache_hits += 3;
/// stats.cache_misses += 1;
/// assert_eq!(stats.hit_rate(), 0.75);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PagerStats {
    /// Number of times a page was already resident.
    pub cache_hits: u64,

    /// Number of times a page buffer had to be allocated.
    pub cache_misses: u64,

    /// Number of cache misses that read from the file.
    pub pages_read: u64,

    /// Number of flush calls that reached the file.
    pub pages_written: u64,

    /// Total bytes handed to the file by flushes.
    pub bytes_written: u64,
}

impl PagerStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}

impl fmt::Display for PagerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, reads: {}, writes: {}, bytes_written: {}, hit_rate: {:.2}% }}",
            self.cache_hits,
            self.cache_misses,
            self.pages_read,
            self.pages_written,
            self.bytes_written,
            self.hit_rate() * 100.0
        )
    }
}
