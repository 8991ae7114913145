//! Keyboard navigation and per-tab state for the roving tabindex pattern.

/// Navigation intent decoded from `KeyboardEvent.key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
    First,
    Last,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(NavKey::Next),
            "ArrowLeft" => Some(NavKey::Previous),
            "Home" => Some(NavKey::First),
            "End" => Some(NavKey::Last),
            _ => None,
        }
    }

    /// Index to select from `current` in a set of `len` tabs, wrapping at both
    /// ends. `None` for an empty set.
    pub fn target_index(self, current: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = match self {
            NavKey::Next => (current + 1) % len,
            NavKey::Previous => (current + len - 1) % len,
            NavKey::First => 0,
            NavKey::Last => len - 1,
        };
        Some(index)
    }
}

/// Attribute values for one tab after a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabState {
    pub selected: bool,
}

impl TabState {
    pub fn aria_selected(self) -> &'static str {
        if self.selected {
            "true"
        } else {
            "false"
        }
    }

    pub fn tab_index(self) -> &'static str {
        if self.selected {
            "0"
        } else {
            "-1"
        }
    }

    pub fn panel_hidden(self) -> bool {
        !self.selected
    }
}

/// States for every tab of a set of `len` when the tab at `selected` is chosen.
/// A chosen tab outside the set (`None`) leaves every tracked tab unselected.
pub fn selection_states(len: usize, selected: Option<usize>) -> impl Iterator<Item = TabState> {
    (0..len).map(move |i| TabState {
        selected: Some(i) == selected,
    })
}
