//! Page state for the publications panel.

use serde::Serialize;

/// Current page plus the last total reported by a successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    page: u32,
    total: Option<u64>,
    page_size: u32,
}

impl PageState {
    /// Start on page 1 with an unknown total.
    ///
    /// A zero page size is bumped to 1.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self { page: 1, total: None, page_size: page_size.max(1) }
    }

    /// Current page, 1-based.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Last-known total result count.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.total
    }

    /// Results per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Zero-based offset of the first result on the current page.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// `ceil(total / page_size)`, never less than 1. An unknown total counts as one page.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let total = self.total.unwrap_or(0);
        let pages = total.div_ceil(u64::from(self.page_size)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Record the total from a successful fetch.
    pub fn set_total(&mut self, total: u64) {
        self.total = Some(total);
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Step back one page. Returns false (and does nothing) on page 1.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Step forward one page. Returns false (and does nothing) on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Back to page 1. The total is kept until the next fetch replaces it.
    pub fn reset(&mut self) {
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_on_first_page() {
        let state = PageState::new(10);
        assert_eq!(state.page(), 1);
        assert_eq!(state.offset(), 0);
        assert_eq!(state.total(), None);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let mut state = PageState::new(10);
        state.set_total(25);
        assert_eq!(state.total_pages(), 3);
        state.set_total(30);
        assert_eq!(state.total_pages(), 3);
        state.set_total(0);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_previous_is_noop_on_first_page() {
        let mut state = PageState::new(10);
        state.set_total(25);
        assert!(!state.previous());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_next_stops_at_last_page() {
        let mut state = PageState::new(10);
        state.set_total(25);
        assert!(state.next());
        assert!(state.next());
        assert_eq!(state.page(), 3);
        assert_eq!(state.offset(), 20);
        assert!(!state.next());
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_next_disabled_while_total_unknown() {
        let mut state = PageState::new(10);
        assert!(!state.has_next());
        assert!(!state.next());
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut state = PageState::new(10);
        state.set_total(100);
        state.next();
        state.next();
        state.reset();
        assert_eq!(state.page(), 1);
        assert_eq!(state.total(), Some(100));
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let mut state = PageState::new(0);
        state.set_total(3);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.total_pages(), 3);
    }
}
