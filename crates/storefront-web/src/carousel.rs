//! Carousel bindings: active-class application, dot clicks, auto-advance.
//!
//! Every container matching the carousel selector is bound independently,
//! with its own [`CarouselState`], its own dot listeners, and its own
//! repeating interval. Dropping a binding removes the listeners and cancels
//! the interval.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Document, Element};

use storefront_core::carousel::CarouselState;
use storefront_core::config::Selectors;

use crate::dom;
use crate::error::WebError;
use crate::listener::ClickListener;

/// One bound carousel: state, dot listeners, and the advance timer.
pub struct CarouselBinding {
    state: Rc<RefCell<CarouselState>>,
    _dot_listeners: Vec<ClickListener>,
    _timer: Interval,
}

impl CarouselBinding {
    /// Binds every carousel container found in the document.
    ///
    /// # Errors
    ///
    /// Returns an error if a selector is rejected or a listener cannot be
    /// attached; an empty result (no carousels in the markup) is not an
    /// error.
    pub fn bind_all(document: &Document, selectors: &Selectors) -> Result<Vec<Self>, WebError> {
        dom::query_all(document, &selectors.carousel)?
            .iter()
            .map(|container| Self::bind(container, selectors))
            .collect()
    }

    /// Binds a single carousel container.
    ///
    /// The slide at index 0 is shown immediately. A container with zero
    /// items still binds; its timer ticks but never changes anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the item/dot selectors are rejected or a dot
    /// listener cannot be attached.
    pub fn bind(container: &Element, selectors: &Selectors) -> Result<Self, WebError> {
        let items: Rc<[Element]> = dom::query_all_within(container, &selectors.item_selector())?
            .into();
        let dots: Rc<[Element]> =
            dom::query_all_within(container, &selectors.dot_selector())?.into();
        let active_class: Rc<str> = selectors.active_class.as_str().into();
        let state = Rc::new(RefCell::new(CarouselState::new(items.len())));

        if !items.is_empty() {
            apply_active(&items, &dots, 0, &active_class);
        }

        let mut dot_listeners = Vec::with_capacity(dots.len());
        for (index, dot) in dots.iter().enumerate() {
            let state = Rc::clone(&state);
            let items = Rc::clone(&items);
            let dots = Rc::clone(&dots);
            let active_class = Rc::clone(&active_class);
            let listener = ClickListener::attach(dot, move |_event| {
                // A dot past the item count (miscounted markup) is ignored.
                if let Ok(shown) = state.borrow_mut().show(index) {
                    apply_active(&items, &dots, shown, &active_class);
                }
            })?;
            dot_listeners.push(listener);
        }

        let timer = {
            let state = Rc::clone(&state);
            let items = Rc::clone(&items);
            let dots = Rc::clone(&dots);
            let active_class = Rc::clone(&active_class);
            Interval::new(selectors.carousel_interval_ms, move || {
                if let Some(next) = state.borrow_mut().advance() {
                    apply_active(&items, &dots, next, &active_class);
                }
            })
        };

        Ok(Self {
            state,
            _dot_listeners: dot_listeners,
            _timer: timer,
        })
    }

    /// Index of the currently active slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.state.borrow().current()
    }

    /// Number of slides in this carousel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    /// Whether this carousel has no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }
}

/// Moves the active class to the item and dot at `active`.
///
/// A missing dot at that index (markup violating the 1:1 item/dot pairing)
/// is tolerated; class-write failures inside handlers degrade to inaction.
fn apply_active(items: &[Element], dots: &[Element], active: usize, active_class: &str) {
    for item in items {
        let _ = item.class_list().remove_1(active_class);
    }
    for dot in dots {
        let _ = dot.class_list().remove_1(active_class);
    }
    if let Some(item) = items.get(active) {
        let _ = item.class_list().add_1(active_class);
    }
    if let Some(dot) = dots.get(active) {
        let _ = dot.class_list().add_1(active_class);
    }
}
