//! Integration tests for the storefront widget state machines.
//!
//! These exercise the observable properties of each widget end to end,
//! the way the web bindings drive them.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(clippy::arithmetic_side_effects)]

use storefront_core::badge;
use storefront_core::carousel::{CarouselError, CarouselState};
use storefront_core::panel::CartPanelState;
use storefront_core::quantity::{StepAction, apply_step};

#[test]
fn carousel_show_marks_exactly_one_slide_active() -> Result<(), CarouselError> {
    let n = 4;
    let mut state = CarouselState::new(n);
    for i in 0..n {
        state.show(i)?;
        let active: Vec<usize> = (0..n).filter(|&j| state.is_active(j)).collect();
        assert_eq!(active, vec![i]);
    }
    Ok(())
}

#[test]
fn timer_fires_k_times_lands_on_initial_plus_k_mod_n() {
    let n = 5;
    let mut state = CarouselState::new(n);
    for k in 1..=12_usize {
        state.advance();
        assert_eq!(state.current(), k % n);
    }
}

#[test]
fn dot_click_overrides_timer_position() -> Result<(), CarouselError> {
    let mut state = CarouselState::new(3);
    state.advance();
    state.show(2)?;
    assert_eq!(state.current(), 2);
    // Next tick continues from the clicked dot.
    assert_eq!(state.advance(), Some(0));
    Ok(())
}

#[test]
fn cart_open_close_returns_to_hidden_state() {
    let initial = CartPanelState::new();
    let mut state = initial;
    state.open();
    assert!(state.is_open() && state.overlay_shown());
    state.close();
    assert_eq!(state, initial);
    assert!(!state.overlay_shown());
}

#[test]
fn stepper_floor_and_steps() {
    assert_eq!(apply_step("1", StepAction::Decrement), None);
    assert_eq!(apply_step("5", StepAction::Decrement), Some(4));
    assert_eq!(apply_step("5", StepAction::Increment), Some(6));
}

#[test]
fn badge_update_shows_and_hides() {
    let hidden = badge::render(0);
    assert_eq!(hidden.text(), "");
    assert_eq!(hidden.display(), "none");

    let shown = badge::render(3);
    assert_eq!(shown.text(), "3");
    assert_eq!(shown.display(), "inline-block");
}

#[test]
fn badge_init_reflects_rendered_text() {
    assert_eq!(badge::initial_count(Some("7")), 7);
    let view = badge::render(badge::initial_count(Some("7")));
    assert_eq!(view.text(), "7");

    // No badge text: count 0, badge stays hidden.
    let view = badge::render(badge::initial_count(None));
    assert!(!view.visible());
}
