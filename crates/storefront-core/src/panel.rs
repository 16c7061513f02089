//! Cart panel visibility state.
//!
//! The slide-out panel and its dimmed overlay are driven by one flag, so the
//! two can never disagree: the overlay is shown exactly while the panel is
//! open.

use std::fmt;

/// Panel visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Panel is slid out, overlay shown.
    Open,
    /// Panel is hidden, overlay hidden.
    #[default]
    Closed,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Open/closed state of the cart panel and its paired overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartPanelState {
    visibility: Visibility,
}

impl CartPanelState {
    /// Creates a closed panel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visibility: Visibility::Closed,
        }
    }

    /// Opens the panel (cart button).
    pub const fn open(&mut self) {
        self.visibility = Visibility::Open;
    }

    /// Closes the panel (close button or overlay click).
    pub const fn close(&mut self) {
        self.visibility = Visibility::Closed;
    }

    /// Whether the panel is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.visibility, Visibility::Open)
    }

    /// Whether the overlay is shown; in lockstep with the panel.
    #[must_use]
    pub const fn overlay_shown(&self) -> bool {
        self.is_open()
    }

    /// Current visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn starts_closed() {
        let state = CartPanelState::new();
        assert!(!state.is_open());
        assert!(!state.overlay_shown());
    }

    #[test]
    fn open_then_close_round_trips() {
        let mut state = CartPanelState::new();
        state.open();
        assert!(state.is_open());
        assert!(state.overlay_shown());
        state.close();
        assert_eq!(state, CartPanelState::new());
    }

    #[test]
    fn panel_and_overlay_stay_in_lockstep() {
        let mut state = CartPanelState::new();
        for _ in 0..3 {
            state.open();
            assert_eq!(state.is_open(), state.overlay_shown());
            state.close();
            assert_eq!(state.is_open(), state.overlay_shown());
        }
    }

    #[test]
    fn visibility_display() {
        assert_eq!(Visibility::Open.to_string(), "open");
        assert_eq!(Visibility::Closed.to_string(), "closed");
    }
}
