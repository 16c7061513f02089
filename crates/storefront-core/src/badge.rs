//! Cart badge count rendering.
//!
//! The badge shows the cart item count on the cart button. Positive counts
//! render as text with the badge displayed inline; zero or negative counts
//! clear the text and hide the badge. The initial count comes from whatever
//! text the page was rendered with; nothing recomputes it from live cart
//! contents here.

/// What the badge element should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    text: String,
    visible: bool,
}

impl BadgeView {
    /// Text content to write into the badge element.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the badge should be displayed at all.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// CSS `display` value reflecting visibility.
    #[must_use]
    pub const fn display(&self) -> &'static str {
        if self.visible { "inline-block" } else { "none" }
    }
}

/// Renders a count into a badge view.
///
/// # Examples
///
/// ```
/// use storefront_core::badge::render;
///
/// let shown = render(3);
/// assert_eq!(shown.text(), "3");
/// assert_eq!(shown.display(), "inline-block");
///
/// let hidden = render(0);
/// assert_eq!(hidden.text(), "");
/// assert_eq!(hidden.display(), "none");
/// ```
#[must_use]
pub fn render(count: i64) -> BadgeView {
    if count > 0 {
        BadgeView {
            text: count.to_string(),
            visible: true,
        }
    } else {
        BadgeView {
            text: String::new(),
            visible: false,
        }
    }
}

/// Parses the badge element's pre-existing text into the initial count.
///
/// Absent or unparsable text defaults to 0.
#[must_use]
pub fn initial_count(text: Option<&str>) -> i64 {
    text.map(str::trim)
        .and_then(|t| t.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn positive_count_is_shown() {
        let view = render(3);
        assert_eq!(view.text(), "3");
        assert!(view.visible());
        assert_eq!(view.display(), "inline-block");
    }

    #[test]
    fn zero_and_negative_counts_hide_the_badge() {
        for count in [0, -1, -42] {
            let view = render(count);
            assert_eq!(view.text(), "");
            assert!(!view.visible());
            assert_eq!(view.display(), "none");
        }
    }

    #[test]
    fn initial_count_parses_rendered_text() {
        assert_eq!(initial_count(Some("7")), 7);
        assert_eq!(initial_count(Some(" 7 ")), 7);
        assert_eq!(initial_count(Some("")), 0);
        assert_eq!(initial_count(Some("many")), 0);
        assert_eq!(initial_count(None), 0);
    }

    #[test]
    fn init_round_trip_preserves_rendered_count() {
        // Page rendered with "7": after init the badge shows "7" again.
        let view = render(initial_count(Some("7")));
        assert_eq!(view.text(), "7");
        assert!(view.visible());
    }
}
