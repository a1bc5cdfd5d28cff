//! Load-more display window.
//!
//! The grid shows the first eight filtered products until the user
//! asks for all of them. Any filter change constructs a fresh state,
//! discarding prior pagination.

/// Number of products shown before "Load more".
pub const DEFAULT_DISPLAY_COUNT: usize = 8;

/// How many filtered products the grid currently renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    display_count: usize,
    is_showing_all: bool,
}

impl DisplayState {
    /// Fresh state: first eight products.
    pub fn new() -> Self {
        Self {
            display_count: DEFAULT_DISPLAY_COUNT,
            is_showing_all: false,
        }
    }

    /// State for a request that asked to show everything.
    pub fn showing_all(filtered_len: usize) -> Self {
        let mut state = Self::new();
        state.show_all(filtered_len);
        state
    }

    /// "Load more": widen the window to the full filtered length.
    pub fn show_all(&mut self, filtered_len: usize) {
        self.display_count = filtered_len;
        self.is_showing_all = true;
    }

    /// "Load less": back to the first eight.
    pub fn reset(&mut self) {
        self.display_count = DEFAULT_DISPLAY_COUNT;
        self.is_showing_all = false;
    }

    /// Number of products to render, never exceeding the filtered length.
    pub fn visible_count(&self, filtered_len: usize) -> usize {
        self.display_count.min(filtered_len)
    }

    pub fn is_showing_all(&self) -> bool {
        self.is_showing_all
    }

    /// Whether the "Load more" control renders.
    pub fn can_show_more(&self, filtered_len: usize) -> bool {
        !self.is_showing_all && filtered_len > DEFAULT_DISPLAY_COUNT
    }

    /// Whether the "Load less" control renders.
    pub fn can_show_less(&self, filtered_len: usize) -> bool {
        self.is_showing_all && filtered_len > DEFAULT_DISPLAY_COUNT
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_eight() {
        let state = DisplayState::new();
        assert_eq!(state.visible_count(100), 8);
        assert!(!state.is_showing_all());
    }

    #[test]
    fn test_show_all_then_reset() {
        let mut state = DisplayState::new();
        state.show_all(23);
        assert_eq!(state.visible_count(23), 23);
        assert!(state.is_showing_all());

        state.reset();
        assert_eq!(state.visible_count(23), 8);
        assert!(!state.is_showing_all());
    }

    #[test]
    fn test_visible_count_capped_by_filtered_length() {
        let state = DisplayState::new();
        assert_eq!(state.visible_count(3), 3);
        assert_eq!(state.visible_count(0), 0);
    }

    #[test]
    fn test_load_more_hidden_for_small_sets() {
        let state = DisplayState::new();
        assert!(!state.can_show_more(8));
        assert!(!state.can_show_more(3));
        assert!(state.can_show_more(9));
    }

    #[test]
    fn test_load_less_only_when_showing_all() {
        let mut state = DisplayState::new();
        assert!(!state.can_show_less(20));
        state.show_all(20);
        assert!(state.can_show_less(20));
        assert!(!state.can_show_more(20));
    }

    #[test]
    fn test_filter_change_discards_pagination() {
        // A filter change constructs a fresh state rather than mutating
        // the old one; the fresh state is back at eight.
        let mut state = DisplayState::new();
        state.show_all(40);
        let after_filter_change = DisplayState::new();
        assert_eq!(after_filter_change.visible_count(40), 8);
        assert!(!after_filter_change.is_showing_all());
        assert_ne!(state, after_filter_change);
    }
}
