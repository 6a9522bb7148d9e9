//! # Toggle State
//!
//! The open/collapse state machine behind every collapsible list.
//!
//! ```text
//!            toggle_open (always clears collapsed)
//!   ┌────────────────────────────────────────────┐
//!   ▼                                            │
//! open ◄──────────────────────────────────────► closed
//!   │  toggle_collapse                              │ toggle_collapse
//!   ▼                                               ▼
//! full ◄──► first COLLAPSED_LEN            (flips unseen)
//! ```
//!
//! The collapse control stays live while the list is closed, so
//! `toggle_collapse` never looks at `is_open`.

/// Number of items shown while a list is collapsed.
pub const COLLAPSED_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    is_open: bool,
    is_collapsed: bool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self {
            is_open: true,
            is_collapsed: false,
        }
    }
}

impl ToggleState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    /// Open or close the list. Collapse is reset either way.
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
        self.is_collapsed = false;
    }

    pub fn toggle_collapse(&mut self) {
        self.is_collapsed = !self.is_collapsed;
    }

    /// The prefix of `items` the list displays when open.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.is_collapsed {
            &items[..items.len().min(COLLAPSED_LEN)]
        } else {
            items
        }
    }

    /// How many of `total` items are on screen right now.
    pub fn shown(&self, total: usize) -> usize {
        match (self.is_open, self.is_collapsed) {
            (false, _) => 0,
            (true, true) => total.min(COLLAPSED_LEN),
            (true, false) => total,
        }
    }

    pub fn footer_label(&self, total: usize) -> String {
        if self.is_collapsed {
            format!("Show all {total}")
        } else {
            "Show less".to_string()
        }
    }

    pub fn open_glyph(&self) -> &'static str {
        if self.is_open { "∨" } else { "∧" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_open_and_expanded() {
        let state = ToggleState::default();
        assert!(state.is_open());
        assert!(!state.is_collapsed());

        let items: Vec<u32> = (0..20).collect();
        assert_eq!(state.visible(&items).len(), 20);
        assert_eq!(state.shown(items.len()), 20);
    }

    #[test]
    fn test_toggle_open_parity() {
        let mut state = ToggleState::default();
        for clicks in 1..=6 {
            state.toggle_open();
            assert_eq!(state.is_open(), clicks % 2 == 0, "after {clicks} clicks");
        }
    }

    #[test]
    fn test_toggle_open_always_clears_collapse() {
        let mut state = ToggleState::default();
        state.toggle_collapse();
        state.toggle_open();
        assert!(!state.is_open());
        assert!(!state.is_collapsed());

        state.toggle_collapse();
        assert!(state.is_collapsed());
        state.toggle_open();
        assert!(state.is_open());
        assert!(!state.is_collapsed());
    }

    #[test]
    fn test_collapse_limits_to_three_and_back() {
        let items: Vec<u32> = (0..15).collect();
        let mut state = ToggleState::default();

        state.toggle_collapse();
        assert_eq!(state.visible(&items), &[0, 1, 2]);
        assert_eq!(state.footer_label(items.len()), "Show all 15");

        state.toggle_collapse();
        assert_eq!(state.visible(&items).len(), 15);
        assert_eq!(state.footer_label(items.len()), "Show less");
    }

    #[test]
    fn test_collapse_short_list_shows_everything() {
        let items = ["a", "b"];
        let mut state = ToggleState::default();
        state.toggle_collapse();
        assert_eq!(state.visible(&items), &["a", "b"]);
        assert_eq!(state.shown(items.len()), 2);
    }

    #[test]
    fn test_collapse_toggles_while_closed() {
        let mut state = ToggleState::default();
        state.toggle_open();
        state.toggle_collapse();
        assert!(!state.is_open());
        assert!(state.is_collapsed());
        assert_eq!(state.shown(20), 0);
        assert_eq!(state.footer_label(20), "Show all 20");
    }

    #[test]
    fn test_open_glyph() {
        let mut state = ToggleState::default();
        assert_eq!(state.open_glyph(), "∨");
        state.toggle_open();
        assert_eq!(state.open_glyph(), "∧");
    }
}
