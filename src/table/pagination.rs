//! Page window over the filtered rows

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_index: usize,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationState {
    /// Start at page zero; a zero page size is bumped to one
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub(crate) fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Number of pages needed for `rows` rows, zero when there are none
    pub fn page_count(&self, rows: usize) -> usize {
        rows.div_ceil(self.page_size)
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self, rows: usize) -> bool {
        self.page_index < self.page_count(rows).saturating_sub(1)
    }

    /// Half-open row range of the current page, clamped to `rows`
    ///
    /// A page past the end yields an empty range.
    pub fn window(&self, rows: usize) -> std::ops::Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size).min(rows);
        let end = start.saturating_add(self.page_size).min(rows);
        start..end
    }

    /// Pull the page index back into range for `rows` rows
    ///
    /// Returns `true` when the index changed.
    pub(crate) fn clamp(&mut self, rows: usize) -> bool {
        let last = self.page_count(rows).saturating_sub(1);
        if self.page_index > last {
            self.page_index = last;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_size() {
        assert_eq!(PaginationState::default().page_size(), 3);
        assert_eq!(PaginationState::new(0).page_size(), 1);
    }

    #[test]
    fn test_window() {
        let mut state = PaginationState::new(3);
        assert_eq!(state.window(5), 0..3);
        state.set_page(1);
        assert_eq!(state.window(5), 3..5);
        state.set_page(2);
        assert_eq!(state.window(5), 5..5);
        state.set_page(usize::MAX);
        assert!(state.window(5).is_empty());
    }

    #[test]
    fn test_page_count_and_navigation() {
        let mut state = PaginationState::new(3);
        assert_eq!(state.page_count(0), 0);
        assert_eq!(state.page_count(3), 1);
        assert_eq!(state.page_count(7), 3);
        assert!(!state.can_previous_page());
        assert!(state.can_next_page(7));
        state.set_page(2);
        assert!(state.can_previous_page());
        assert!(!state.can_next_page(7));
    }

    #[test]
    fn test_far_out_page_has_no_next() {
        let mut state = PaginationState::new(3);
        state.set_page(usize::MAX);
        assert!(!state.can_next_page(5));
        assert!(!state.can_next_page(0));
        assert!(state.can_previous_page());
    }

    #[test]
    fn test_clamp() {
        let mut state = PaginationState::new(3);
        state.set_page(4);
        assert!(state.clamp(4));
        assert_eq!(state.page_index(), 1);
        assert!(!state.clamp(4));
        assert!(state.clamp(0));
        assert_eq!(state.page_index(), 0);
    }
}
