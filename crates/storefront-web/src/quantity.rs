//! Quantity stepper routes over the delegate registry.
//!
//! A click on an increment/decrement control walks up to its quantity
//! group, finds the numeric input inside it, and rewrites the value through
//! the core stepping rules. Missing group or input silently skips the
//! action.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use storefront_core::config::Selectors;
use storefront_core::quantity::{StepAction, apply_step};

use crate::delegate::{DelegateRegistry, Route};
use crate::error::WebError;

/// Builds the two stepper routes for the given selector vocabulary.
#[must_use]
pub fn routes(selectors: &Selectors) -> Vec<Route> {
    vec![
        class_route(
            selectors.quantity_decrement_class.clone(),
            selectors.quantity_group.clone(),
            StepAction::Decrement,
        ),
        class_route(
            selectors.quantity_increment_class.clone(),
            selectors.quantity_group.clone(),
            StepAction::Increment,
        ),
    ]
}

/// Attaches the stepper routes behind a delegated listener on the document.
///
/// # Errors
///
/// Returns an error if the listener cannot be attached.
pub fn bind(document: &Document, selectors: &Selectors) -> Result<DelegateRegistry, WebError> {
    DelegateRegistry::attach(document, routes(selectors))
}

fn class_route(class: String, group_selector: String, action: StepAction) -> Route {
    Route::new(
        move |target: &Element| target.class_list().contains(&class),
        move |target: &Element| step_input(target, &group_selector, action),
    )
}

/// Steps the input inside the target's nearest quantity group.
fn step_input(target: &Element, group_selector: &str, action: StepAction) {
    let Some(group) = target.closest(group_selector).ok().flatten() else {
        return;
    };
    let Some(input) = group
        .query_selector("input")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    if let Some(next) = apply_step(&input.value(), action) {
        input.set_value(&next.to_string());
    }
}
