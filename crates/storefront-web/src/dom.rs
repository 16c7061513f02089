//! Panic-free DOM lookup helpers over web-sys.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

use crate::error::WebError;

/// Resolves the page's document.
///
/// # Errors
///
/// Returns an error outside a browser context (no window or no document).
pub(crate) fn document() -> Result<Document, WebError> {
    web_sys::window()
        .ok_or(WebError::WindowNotAvailable)?
        .document()
        .ok_or(WebError::DocumentNotAvailable)
}

/// Queries an optional singleton element; absence is not an error.
///
/// # Errors
///
/// Returns an error only when the selector itself is rejected.
pub(crate) fn query_optional(
    document: &Document,
    selector: &str,
) -> Result<Option<Element>, WebError> {
    document
        .query_selector(selector)
        .map_err(|e| query_failed(selector, &e))
}

/// Queries all matching elements in the document.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, WebError> {
    document
        .query_selector_all(selector)
        .map(elements_from)
        .map_err(|e| query_failed(selector, &e))
}

/// Queries all matching elements under a root element.
pub(crate) fn query_all_within(root: &Element, selector: &str) -> Result<Vec<Element>, WebError> {
    root.query_selector_all(selector)
        .map(elements_from)
        .map_err(|e| query_failed(selector, &e))
}

fn elements_from(list: NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(element) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            out.push(element);
        }
    }
    out
}

fn query_failed(selector: &str, details: &wasm_bindgen::JsValue) -> WebError {
    WebError::QueryFailed {
        selector: selector.to_string(),
        details: format!("{details:?}"),
    }
}
