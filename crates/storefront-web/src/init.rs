//! Page wiring: one explicit initialization call, one disposable handle.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use storefront_core::config::Selectors;

use crate::badge::BadgeBinding;
use crate::carousel::CarouselBinding;
use crate::cart::CartBinding;
use crate::delegate::DelegateRegistry;
use crate::dom;
use crate::error::WebError;
use crate::quantity;

/// All page bindings behind one handle.
///
/// Dropping it removes every listener and cancels the carousel timers,
/// so teardown leaves no dangling periodic task.
pub struct Storefront {
    carousels: Vec<CarouselBinding>,
    cart: CartBinding,
    badge: BadgeBinding,
    _quantity: DelegateRegistry,
}

impl Storefront {
    /// Binds every widget the markup offers: all carousels, the cart
    /// triggers, the badge, and the delegated quantity steppers.
    ///
    /// # Errors
    ///
    /// Returns an error for rejected selectors or failed listener
    /// registration; markup that omits a widget is not an error.
    pub fn init(document: &Document, selectors: &Selectors) -> Result<Self, WebError> {
        Ok(Self {
            carousels: CarouselBinding::bind_all(document, selectors)?,
            cart: CartBinding::bind(document, selectors)?,
            badge: BadgeBinding::bind(document, selectors)?,
            _quantity: quantity::bind(document, selectors)?,
        })
    }

    /// Number of carousels bound on the page.
    #[must_use]
    pub fn carousel_count(&self) -> usize {
        self.carousels.len()
    }

    /// The bound carousels, in document order.
    #[must_use]
    pub fn carousels(&self) -> &[CarouselBinding] {
        &self.carousels
    }

    /// Whether the cart panel is currently open.
    #[must_use]
    pub fn cart_is_open(&self) -> bool {
        self.cart.is_open()
    }

    /// Re-renders the badge with `count`.
    pub fn update_cart_badge(&self, count: i64) {
        self.badge.update(count);
    }
}

/// JS-facing wrapper around [`Storefront`].
#[wasm_bindgen]
pub struct StorefrontHandle {
    inner: Option<Storefront>,
}

#[wasm_bindgen]
impl StorefrontHandle {
    /// Tears the page wiring down; later calls are no-ops.
    pub fn dispose(&mut self) {
        self.inner = None;
    }

    /// Re-renders the badge with `count`.
    #[wasm_bindgen(js_name = updateCartBadge)]
    pub fn update_cart_badge(&self, count: i64) {
        if let Some(storefront) = &self.inner {
            storefront.update_cart_badge(count);
        }
    }
}

impl From<Storefront> for StorefrontHandle {
    fn from(storefront: Storefront) -> Self {
        Self {
            inner: Some(storefront),
        }
    }
}

/// Entry point for plain-JS hosts: binds the current document with the
/// default selector vocabulary.
///
/// # Errors
///
/// Returns a JS error outside a browser context or when binding fails.
#[wasm_bindgen(js_name = initStorefront)]
pub fn init_storefront() -> Result<StorefrontHandle, JsValue> {
    // Panic messages go to the browser console instead of an opaque trap.
    console_error_panic_hook::set_once();

    let document = dom::document()?;
    let storefront = Storefront::init(&document, &Selectors::default())?;
    Ok(storefront.into())
}
