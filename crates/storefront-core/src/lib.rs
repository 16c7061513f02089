//! Storefront core - headless widget state for the storefront page.
//!
//! Every widget on the storefront page is modeled here as a plain state
//! machine or pure function, with no DOM types in sight: carousel slide
//! selection, cart panel visibility, quantity stepping, and badge rendering.
//! The `storefront-web` crate binds these to the page's rendered markup.
//!
//! # Modules
//!
//! - [`carousel`] - Slide index state with manual and timed advance
//! - [`panel`] - Cart panel open/closed visibility
//! - [`quantity`] - Quantity parsing and floor-clamped stepping
//! - [`badge`] - Cart badge count parsing and rendering
//! - [`config`] - Selector and class-name configuration

#![forbid(unsafe_code)]

pub mod badge;
pub mod carousel;
pub mod config;
pub mod panel;
pub mod quantity;

pub use badge::BadgeView;
pub use carousel::{CarouselError, CarouselState};
pub use config::Selectors;
pub use panel::CartPanelState;
pub use quantity::StepAction;
