//! WASM browser tests for delegated route dispatch.
//!
//! Run with: wasm-pack test --headless --firefox

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_test::*;
use web_sys::{Document, Element};

use crate::delegate::{Route, dispatch};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn make_target(class: &str) -> Element {
    let el = document().create_element("button").unwrap();
    el.set_class_name(class);
    el
}

/// A route matching `class` that records `name` when its handler runs.
fn recording_route(
    class: &str,
    name: &'static str,
    fired: &Rc<RefCell<Vec<&'static str>>>,
) -> Route {
    let class = class.to_string();
    let fired = Rc::clone(fired);
    Route::new(
        move |target: &Element| target.class_list().contains(&class),
        move |_target: &Element| fired.borrow_mut().push(name),
    )
}

#[wasm_bindgen_test]
fn dispatch_runs_only_the_first_matching_route() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let routes = vec![
        recording_route("step", "first", &fired),
        recording_route("step", "second", &fired),
        recording_route("other", "third", &fired),
    ];

    // Both of the first two routes match; only the first may fire.
    dispatch(&routes, &make_target("step"));
    assert_eq!(*fired.borrow(), vec!["first"]);
}

#[wasm_bindgen_test]
fn dispatch_skips_non_matching_routes() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let routes = vec![
        recording_route("step", "first", &fired),
        recording_route("other", "second", &fired),
    ];

    dispatch(&routes, &make_target("other"));
    assert_eq!(*fired.borrow(), vec!["second"]);
}

#[wasm_bindgen_test]
fn dispatch_without_a_match_is_a_no_op() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let routes = vec![recording_route("step", "first", &fired)];

    dispatch(&routes, &make_target("unrelated"));
    assert!(fired.borrow().is_empty());
}
