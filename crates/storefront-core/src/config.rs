//! Selector and class-name configuration.
//!
//! The web bindings address the page through this vocabulary instead of
//! hard-coded queries, so a host with different markup can rename any hook
//! without touching the bindings. Defaults match the storefront markup.

use serde::{Deserialize, Serialize};

/// Default period of the carousel auto-advance timer, in milliseconds.
pub const CAROUSEL_INTERVAL_MS: u32 = 4_000;

/// Selectors, class names, and timing binding the widgets to markup.
///
/// Fields ending in `_class` are bare class names (toggled or matched on
/// elements); the other string fields are CSS selectors passed to
/// `querySelector`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Carousel container selector.
    pub carousel: String,
    /// Slide class within a carousel.
    pub carousel_item_class: String,
    /// Dot indicator class within a carousel.
    pub carousel_dot_class: String,
    /// Class marking the active slide and dot.
    pub active_class: String,

    /// Cart-open trigger selector.
    pub cart_button: String,
    /// Cart-close trigger selector.
    pub cart_close_button: String,
    /// Slide-out panel selector.
    pub cart_panel: String,
    /// Class added to the panel while open.
    pub cart_panel_open_class: String,
    /// Overlay selector.
    pub cart_overlay: String,
    /// Class added to the overlay while shown.
    pub cart_overlay_show_class: String,
    /// Badge selector.
    pub cart_badge: String,

    /// Quantity control group selector.
    pub quantity_group: String,
    /// Class of the decrement control.
    pub quantity_decrement_class: String,
    /// Class of the increment control.
    pub quantity_increment_class: String,

    /// Period of each carousel's auto-advance timer, in milliseconds.
    pub carousel_interval_ms: u32,
}

impl Selectors {
    /// Selector matching slides inside a carousel container.
    #[must_use]
    pub fn item_selector(&self) -> String {
        format!(".{}", self.carousel_item_class)
    }

    /// Selector matching dots inside a carousel container.
    #[must_use]
    pub fn dot_selector(&self) -> String {
        format!(".{}", self.carousel_dot_class)
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            carousel: ".carousel".to_string(),
            carousel_item_class: "carousel-item".to_string(),
            carousel_dot_class: "carousel-dot".to_string(),
            active_class: "active".to_string(),
            cart_button: "#cart-btn".to_string(),
            cart_close_button: "#close-cart".to_string(),
            cart_panel: ".cart-sidebar".to_string(),
            cart_panel_open_class: "open".to_string(),
            cart_overlay: ".cart-overlay".to_string(),
            cart_overlay_show_class: "show".to_string(),
            cart_badge: "#cart-count".to_string(),
            quantity_group: ".qty-control".to_string(),
            quantity_decrement_class: "qty-minus".to_string(),
            quantity_increment_class: "qty-plus".to_string(),
            carousel_interval_ms: CAROUSEL_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn defaults_match_storefront_markup() {
        let selectors = Selectors::default();
        assert_eq!(selectors.carousel, ".carousel");
        assert_eq!(selectors.item_selector(), ".carousel-item");
        assert_eq!(selectors.dot_selector(), ".carousel-dot");
        assert_eq!(selectors.cart_badge, "#cart-count");
        assert_eq!(selectors.carousel_interval_ms, 4_000);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let selectors: Selectors =
            serde_json::from_str(r#"{"carousel": ".product-carousel"}"#).unwrap();
        assert_eq!(selectors.carousel, ".product-carousel");
        assert_eq!(selectors.active_class, "active");
        assert_eq!(selectors.carousel_interval_ms, CAROUSEL_INTERVAL_MS);
    }

    #[test]
    fn interval_is_configurable() {
        let selectors: Selectors =
            serde_json::from_str(r#"{"carousel_interval_ms": 2500}"#).unwrap();
        assert_eq!(selectors.carousel_interval_ms, 2_500);
    }
}
