//! Cart badge binding.
//!
//! Wraps the optional badge element; every update writes the rendered text
//! and display style, and an absent badge makes updates a no-op. On bind
//! the element's pre-existing text is parsed and immediately re-rendered.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use storefront_core::badge;
use storefront_core::config::Selectors;

use crate::dom;
use crate::error::WebError;

/// Bound badge element, possibly absent.
pub struct BadgeBinding {
    element: Option<HtmlElement>,
}

impl BadgeBinding {
    /// Looks up the badge and re-renders its initial count.
    ///
    /// # Errors
    ///
    /// Returns an error only for a rejected selector; an absent badge binds
    /// as a permanent no-op.
    pub fn bind(document: &Document, selectors: &Selectors) -> Result<Self, WebError> {
        let element = dom::query_optional(document, &selectors.cart_badge)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let binding = Self { element };
        binding.update(binding.initial_count());
        Ok(binding)
    }

    /// Count parsed from the badge's rendered text, 0 when absent.
    #[must_use]
    pub fn initial_count(&self) -> i64 {
        badge::initial_count(
            self.element
                .as_ref()
                .and_then(|el| el.text_content())
                .as_deref(),
        )
    }

    /// Writes `count` into the badge: text plus shown/hidden display.
    pub fn update(&self, count: i64) {
        let Some(element) = &self.element else {
            return;
        };
        let view = badge::render(count);
        element.set_text_content(Some(view.text()));
        let _ = element.style().set_property("display", view.display());
    }
}
