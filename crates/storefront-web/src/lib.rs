//! DOM bindings for the storefront page widgets.
//!
//! This crate attaches the headless state machines from `storefront-core`
//! to a server-rendered page: carousels with dot navigation and a 4 s
//! auto-advance, the slide-out cart panel with its overlay, the delegated
//! quantity steppers, and the cart badge.
//!
//! Everything is wired by one explicit call, [`Storefront::init`], which
//! returns a disposable handle. Dropping the handle removes every listener
//! and cancels the carousel timers, so the page can tear the widgets down
//! without leaking a periodic task. For plain-JS hosts the same pair is
//! exported through wasm-bindgen as `initStorefront()` / `dispose()`.
//!
//! ## Module Structure
//! - `carousel`: per-carousel binding (dots, timer, active class)
//! - `cart`: panel/overlay triggers over explicit optional elements
//! - `delegate`: (predicate, handler) routes behind one click listener
//! - `quantity`: stepper routes over the delegate registry
//! - `badge`: badge text/display binding
//! - `listener`: RAII click-listener registration
//! - `dom`: panic-free lookup helpers
//! - `error`: initialization error types

#![forbid(unsafe_code)]

pub mod badge;
pub mod carousel;
pub mod cart;
pub mod delegate;
mod dom;
pub mod error;
mod listener;
pub mod quantity;

mod init;

pub use error::WebError;
pub use init::{Storefront, StorefrontHandle, init_storefront};



#[cfg(all(test, target_arch = "wasm32"))]
mod delegate_test;
