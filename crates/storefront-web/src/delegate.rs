//! Delegated click dispatch through an explicit route table.
//!
//! Instead of binding per element, one listener on the document inspects
//! each click's target against a registry of (predicate, handler) routes.
//! Elements added to the page after initial load therefore still match,
//! and routes can be exercised directly with synthetic targets in tests.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};

use crate::error::WebError;
use crate::listener::ClickListener;

/// One (predicate, handler) pair in the registry.
pub struct Route {
    predicate: Box<dyn Fn(&Element) -> bool>,
    handler: Box<dyn Fn(&Element)>,
}

impl Route {
    /// Builds a route from a target predicate and its handler.
    pub fn new<P, H>(predicate: P, handler: H) -> Self
    where
        P: Fn(&Element) -> bool + 'static,
        H: Fn(&Element) + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            handler: Box::new(handler),
        }
    }

    /// Whether this route matches the target.
    #[must_use]
    pub fn matches(&self, target: &Element) -> bool {
        (self.predicate)(target)
    }
}

/// Runs the first route whose predicate matches the target.
pub fn dispatch(routes: &[Route], target: &Element) {
    if let Some(route) = routes.iter().find(|route| route.matches(target)) {
        (route.handler)(target);
    }
}

/// A route table attached to a single delegated click listener.
pub struct DelegateRegistry {
    _listener: ClickListener,
}

impl DelegateRegistry {
    /// Attaches the routes behind one click listener on `target`
    /// (typically the document).
    ///
    /// Clicks whose target is not an element are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be attached.
    pub fn attach(target: &EventTarget, routes: Vec<Route>) -> Result<Self, WebError> {
        let routes = Rc::new(routes);
        let listener = ClickListener::attach(target, move |event| {
            let clicked = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok());
            if let Some(element) = clicked {
                dispatch(&routes, &element);
            }
        })?;
        Ok(Self {
            _listener: listener,
        })
    }
}
