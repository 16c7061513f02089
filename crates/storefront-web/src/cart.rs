//! Cart panel bindings: open/close triggers over explicit optional elements.
//!
//! Every participating element is an explicit `Option` in the binding's
//! input, so a page that omits part of the cart feature yields typed
//! absence instead of a runtime query failure. All three triggers are
//! guarded, the overlay click included.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use storefront_core::config::Selectors;
use storefront_core::panel::CartPanelState;

use crate::dom;
use crate::error::WebError;
use crate::listener::ClickListener;

/// The cart's participating elements, each optional.
#[derive(Debug, Clone, Default)]
pub struct CartElements {
    /// Cart-open trigger (the cart button).
    pub open_button: Option<Element>,
    /// Explicit close button inside the panel.
    pub close_button: Option<Element>,
    /// The slide-out panel itself.
    pub panel: Option<Element>,
    /// Dimmed backdrop behind the open panel; clicking it dismisses.
    pub overlay: Option<Element>,
}

impl CartElements {
    /// Looks the four elements up in the document.
    ///
    /// # Errors
    ///
    /// Returns an error only for rejected selectors; absent elements are
    /// simply `None`.
    pub fn query(document: &Document, selectors: &Selectors) -> Result<Self, WebError> {
        Ok(Self {
            open_button: dom::query_optional(document, &selectors.cart_button)?,
            close_button: dom::query_optional(document, &selectors.cart_close_button)?,
            panel: dom::query_optional(document, &selectors.cart_panel)?,
            overlay: dom::query_optional(document, &selectors.cart_overlay)?,
        })
    }
}

/// Bound cart panel: shared state plus the guarded trigger listeners.
pub struct CartBinding {
    state: Rc<RefCell<CartPanelState>>,
    _listeners: Vec<ClickListener>,
}

impl CartBinding {
    /// Queries the cart elements and binds the triggers.
    ///
    /// # Errors
    ///
    /// Returns an error for rejected selectors or failed listener
    /// registration.
    pub fn bind(document: &Document, selectors: &Selectors) -> Result<Self, WebError> {
        Self::bind_elements(CartElements::query(document, selectors)?, selectors)
    }

    /// Binds the triggers over an explicit element set.
    ///
    /// A trigger whose element is `None` gets no listener; a missing panel
    /// or overlay turns the corresponding class toggle into a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if a listener cannot be attached.
    pub fn bind_elements(elements: CartElements, selectors: &Selectors) -> Result<Self, WebError> {
        let shared_state = Rc::new(RefCell::new(CartPanelState::new()));
        let state = Rc::clone(&shared_state);
        let panel = elements.panel;
        let overlay = elements.overlay;
        let overlay_trigger = overlay.clone();
        let open_class: Rc<str> = selectors.cart_panel_open_class.as_str().into();
        let show_class: Rc<str> = selectors.cart_overlay_show_class.as_str().into();

        let handler = move |open: bool| {
            let state = Rc::clone(&state);
            let panel = panel.clone();
            let overlay = overlay.clone();
            let open_class = Rc::clone(&open_class);
            let show_class = Rc::clone(&show_class);
            move |_event: web_sys::Event| {
                if open {
                    state.borrow_mut().open();
                } else {
                    state.borrow_mut().close();
                }
                apply(
                    panel.as_ref(),
                    overlay.as_ref(),
                    &state.borrow(),
                    &open_class,
                    &show_class,
                );
            }
        };

        let mut listeners = Vec::new();
        if let Some(button) = &elements.open_button {
            listeners.push(ClickListener::attach(button, handler(true))?);
        }
        if let Some(button) = &elements.close_button {
            listeners.push(ClickListener::attach(button, handler(false))?);
        }
        // Overlay click dismisses too, guarded like the other triggers.
        if let Some(trigger) = overlay_trigger {
            listeners.push(ClickListener::attach(&trigger, handler(false))?);
        }

        Ok(Self {
            state: shared_state,
            _listeners: listeners,
        })
    }

    /// Whether the panel is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }
}

/// Writes the state's visibility onto the panel and overlay classes.
fn apply(
    panel: Option<&Element>,
    overlay: Option<&Element>,
    state: &CartPanelState,
    open_class: &str,
    show_class: &str,
) {
    if let Some(panel) = panel {
        let _ = if state.is_open() {
            panel.class_list().add_1(open_class)
        } else {
            panel.class_list().remove_1(open_class)
        };
    }
    if let Some(overlay) = overlay {
        let _ = if state.overlay_shown() {
            overlay.class_list().add_1(show_class)
        } else {
            overlay.class_list().remove_1(show_class)
        };
    }
}
