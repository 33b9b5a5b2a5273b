//! Mobile menu state.
//!
//! On narrow viewports the persistent link row is hidden and a toggle button
//! opens an auxiliary panel with the same links. The panel is either
//! collapsed or expanded, and two user actions move it between the states:
//!
//! ```text
//!             Toggle
//! Collapsed ─────────▶ Expanded
//!     ▲                   │
//!     └───────────────────┘
//!      Toggle | LinkSelected
//! ```
//!
//! There is no terminal state. A fresh page always starts [`MenuState::Collapsed`].

/// Whether the auxiliary navigation panel is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Panel hidden (initial state)
    #[default]
    Collapsed,
    /// Panel shown below the navigation bar
    Expanded,
}

/// A user interaction that can change the menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The menu button was activated
    Toggle,
    /// A link inside the auxiliary panel was followed
    LinkSelected,
}

impl MenuState {
    /// True while the auxiliary panel is shown.
    pub fn is_expanded(self) -> bool {
        self == MenuState::Expanded
    }

    /// Flip between collapsed and expanded.
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Collapsed => MenuState::Expanded,
            MenuState::Expanded => MenuState::Collapsed,
        };
    }

    /// A link was followed: the panel closes whichever link it was.
    pub fn select_link(&mut self) {
        *self = MenuState::Collapsed;
    }

    /// Apply one interaction.
    pub fn apply(&mut self, event: MenuEvent) {
        match event {
            MenuEvent::Toggle => self.toggle(),
            MenuEvent::LinkSelected => self.select_link(),
        }
    }

    /// Value for the `data-state` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuState::Collapsed => "collapsed",
            MenuState::Expanded => "expanded",
        }
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_expanded() { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let state = MenuState::default();
        assert_eq!(state, MenuState::Collapsed);
        assert!(!state.is_expanded());
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut state = MenuState::default();
        state.toggle();
        assert!(state.is_expanded());
        state.toggle();
        assert!(!state.is_expanded());
    }

    #[test]
    fn selecting_link_collapses_expanded_menu() {
        let mut state = MenuState::Expanded;
        state.select_link();
        assert_eq!(state, MenuState::Collapsed);
    }

    #[test]
    fn selecting_link_when_collapsed_is_noop() {
        let mut state = MenuState::Collapsed;
        state.select_link();
        assert_eq!(state, MenuState::Collapsed);
    }

    #[test]
    fn link_selection_matches_second_toggle() {
        let mut by_toggle = MenuState::default();
        by_toggle.apply(MenuEvent::Toggle);
        by_toggle.apply(MenuEvent::Toggle);

        let mut by_link = MenuState::default();
        by_link.apply(MenuEvent::Toggle);
        by_link.apply(MenuEvent::LinkSelected);

        assert_eq!(by_toggle, by_link);
    }

    #[test]
    fn cycles_indefinitely() {
        let mut state = MenuState::default();
        for round in 0..10 {
            state.apply(MenuEvent::Toggle);
            assert!(state.is_expanded(), "round {round} should open");
            let event = if round % 2 == 0 {
                MenuEvent::Toggle
            } else {
                MenuEvent::LinkSelected
            };
            state.apply(event);
            assert!(!state.is_expanded(), "round {round} should close");
        }
    }

    #[test]
    fn attribute_values() {
        assert_eq!(MenuState::Collapsed.as_str(), "collapsed");
        assert_eq!(MenuState::Expanded.as_str(), "expanded");
        assert_eq!(MenuState::Collapsed.aria_expanded(), "false");
        assert_eq!(MenuState::Expanded.aria_expanded(), "true");
    }
}
