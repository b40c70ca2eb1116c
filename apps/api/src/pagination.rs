//! Pagination Engine — a clamped page cursor over an ordered, borrowed slice.
//!
//! Every listing section (projects, blogs, skill categories) owns its own
//! engine instance over its own backing collection; instances share nothing.
//! The engine never mutates the collection, only indexes into it.
//!
//! # Cursor rules
//! - `page_size >= 1`, rejected at construction otherwise
//! - `current_page` is 1-based and always within `1..=max_page`
//! - `max_page = max(1, ceil(len / page_size))` — an empty collection is
//!   "page 1 of 1", never a division-by-zero or an out-of-range slice
//! - boundary navigation either clamps (default) or wraps to the far end,
//!   chosen per instance at construction

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Construction-time failure. Navigation and accessors are total and can
/// never fail once an engine exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid page size: {0} (must be >= 1)")]
    InvalidPageSize(usize),
}

/// What boundary navigation does at the first/last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavMode {
    /// No effect past the first/last page. The default.
    #[default]
    Clamp,
    /// Cycle back to the opposite end. Used by the spotlight rotator.
    Wrap,
}

/// A page cursor over a borrowed slice.
///
/// `max_page` is recomputed from the slice length on every access and the
/// cursor is re-clamped on read, so a stale cursor can never produce an
/// out-of-range window.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: usize,
    current: usize,
    mode: NavMode,
}

impl<'a, T> Paginator<'a, T> {
    /// Creates a clamp-mode engine starting at page 1.
    pub fn new(items: &'a [T], page_size: usize) -> Result<Self, PaginationError> {
        Self::with_mode(items, page_size, NavMode::Clamp)
    }

    /// Creates an engine with an explicit boundary navigation mode.
    pub fn with_mode(
        items: &'a [T],
        page_size: usize,
        mode: NavMode,
    ) -> Result<Self, PaginationError> {
        if page_size < 1 {
            return Err(PaginationError::InvalidPageSize(page_size));
        }
        Ok(Self {
            items,
            page_size,
            current: 1,
            mode,
        })
    }

    /// Total number of pages. At least 1, even for an empty collection.
    pub fn max_page(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    /// The current 1-based page, re-clamped against the live `max_page`.
    pub fn current_page(&self) -> usize {
        self.current.min(self.max_page())
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// The window for the current page. Empty iff the collection is empty;
    /// otherwise exactly `page_size` items on every page except possibly the
    /// last.
    pub fn current_items(&self) -> &'a [T] {
        let start = (self.current_page() - 1) * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        if start >= self.items.len() {
            return &[];
        }
        &self.items[start..end]
    }

    /// Advances the cursor. Clamp mode: no-op at the last page. Wrap mode:
    /// cycles to page 1.
    pub fn next_page(&mut self) {
        let max = self.max_page();
        let current = self.current_page();
        self.current = match self.mode {
            NavMode::Clamp => (current + 1).min(max),
            NavMode::Wrap => {
                if current >= max {
                    1
                } else {
                    current + 1
                }
            }
        };
    }

    /// Moves the cursor back. Clamp mode: no-op at page 1. Wrap mode: cycles
    /// to the last page.
    pub fn prev_page(&mut self) {
        let current = self.current_page();
        self.current = match self.mode {
            NavMode::Clamp => (current - 1).max(1),
            NavMode::Wrap => {
                if current <= 1 {
                    self.max_page()
                } else {
                    current - 1
                }
            }
        };
    }

    /// Jumps straight to a page, clamped into `1..=max_page`. Lets a
    /// stateless host map a `?page=` query onto the cursor without ever
    /// producing an error for an out-of-range request.
    pub fn set_page(&mut self, page: usize) {
        self.current = page.clamp(1, self.max_page());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<u32> {
        (0..n as u32).collect()
    }

    // ── construction ────────────────────────────────────────────────────────

    #[test]
    fn test_zero_page_size_is_rejected() {
        let data = items(5);
        let err = Paginator::new(&data, 0).unwrap_err();
        assert_eq!(err, PaginationError::InvalidPageSize(0));
    }

    #[test]
    fn test_starts_at_page_one() {
        let data = items(5);
        let pager = Paginator::new(&data, 2).unwrap();
        assert_eq!(pager.current_page(), 1);
    }

    // ── max_page ────────────────────────────────────────────────────────────

    #[test]
    fn test_max_page_is_ceiling_of_len_over_size() {
        let data = items(7);
        let pager = Paginator::new(&data, 3).unwrap();
        assert_eq!(pager.max_page(), 3);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        let data = items(6);
        let pager = Paginator::new(&data, 3).unwrap();
        assert_eq!(pager.max_page(), 2);
    }

    #[test]
    fn test_empty_collection_is_one_page() {
        let data: Vec<u32> = vec![];
        let pager = Paginator::new(&data, 4).unwrap();
        assert_eq!(pager.max_page(), 1);
        assert!(pager.current_items().is_empty());
    }

    #[test]
    fn test_page_size_larger_than_collection_is_one_page() {
        let data = items(5);
        let pager = Paginator::new(&data, 10).unwrap();
        assert_eq!(pager.max_page(), 1);
        assert_eq!(pager.current_items(), &data[..]);
    }

    // ── window contents ─────────────────────────────────────────────────────

    #[test]
    fn test_full_pages_then_short_last_page() {
        let data = items(7);
        let mut pager = Paginator::new(&data, 3).unwrap();
        assert_eq!(pager.current_items(), &[0, 1, 2]);
        pager.next_page();
        assert_eq!(pager.current_items(), &[3, 4, 5]);
        pager.next_page();
        assert_eq!(pager.current_items(), &[6]);
    }

    #[test]
    fn test_pages_visit_every_item_in_order() {
        let data = items(11);
        let mut pager = Paginator::new(&data, 4).unwrap();
        let mut seen = Vec::new();
        for page in 1..=pager.max_page() {
            assert_eq!(pager.current_page(), page);
            assert!(pager.current_items().len() <= 4);
            seen.extend_from_slice(pager.current_items());
            pager.next_page();
        }
        // No gaps, no duplicates, no reordering.
        assert_eq!(seen, data);
    }

    // ── clamp navigation ────────────────────────────────────────────────────

    #[test]
    fn test_next_clamps_at_last_page() {
        let data = items(6);
        let mut pager = Paginator::new(&data, 2).unwrap();
        pager.next_page();
        pager.next_page();
        assert_eq!(pager.current_page(), 3);
        pager.next_page();
        assert_eq!(pager.current_page(), 3, "repeat next at boundary is a no-op");
        pager.next_page();
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_prev_clamps_at_page_one() {
        let data = items(6);
        let mut pager = Paginator::new(&data, 2).unwrap();
        pager.prev_page();
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_navigation_on_empty_collection_is_a_no_op() {
        let data: Vec<u32> = vec![];
        let mut pager = Paginator::new(&data, 4).unwrap();
        pager.next_page();
        pager.prev_page();
        assert_eq!(pager.current_page(), 1);
        assert!(pager.current_items().is_empty());
    }

    #[test]
    fn test_cursor_stays_in_range_under_arbitrary_navigation() {
        let data = items(9);
        let mut pager = Paginator::new(&data, 2).unwrap();
        // A long mixed walk; the invariant must hold after every step.
        let steps = [1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1];
        for &fwd in &steps {
            if fwd == 1 {
                pager.next_page();
            } else {
                pager.prev_page();
            }
            assert!(pager.current_page() >= 1);
            assert!(pager.current_page() <= pager.max_page());
        }
    }

    // ── wrap navigation ─────────────────────────────────────────────────────

    #[test]
    fn test_wrap_next_cycles_to_first_page() {
        let data = items(6);
        let mut pager = Paginator::with_mode(&data, 2, NavMode::Wrap).unwrap();
        pager.next_page();
        pager.next_page();
        assert_eq!(pager.current_page(), 3);
        pager.next_page();
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_wrap_prev_cycles_to_last_page() {
        let data = items(7);
        let mut pager = Paginator::with_mode(&data, 3, NavMode::Wrap).unwrap();
        pager.prev_page();
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_wrap_on_single_page_stays_put() {
        let data = items(2);
        let mut pager = Paginator::with_mode(&data, 5, NavMode::Wrap).unwrap();
        pager.next_page();
        assert_eq!(pager.current_page(), 1);
        pager.prev_page();
        assert_eq!(pager.current_page(), 1);
    }

    // ── set_page ────────────────────────────────────────────────────────────

    #[test]
    fn test_set_page_jumps_and_clamps() {
        let data = items(10);
        let mut pager = Paginator::new(&data, 3).unwrap();
        pager.set_page(2);
        assert_eq!(pager.current_items(), &[3, 4, 5]);
        pager.set_page(99);
        assert_eq!(pager.current_page(), 4);
        pager.set_page(0);
        assert_eq!(pager.current_page(), 1);
    }
}
