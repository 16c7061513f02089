//! Quantity parsing and stepping for cart line items.
//!
//! The stepper floors at [`MIN_QUANTITY`]: decrement applies only while the
//! current value is strictly greater than 1. Increment has no ceiling beyond
//! a saturating add. Text that does not parse as an integer is treated as 0,
//! which makes decrement a no-op and increment write 1.

/// Lowest value the decrement action can leave in an input.
pub const MIN_QUANTITY: u32 = 1;

/// Direction of a quantity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// `+` control: add one.
    Increment,
    /// `-` control: subtract one, floored at [`MIN_QUANTITY`].
    Decrement,
}

/// Parses an input's text into a quantity, falling back to 0.
///
/// # Examples
///
/// ```
/// use storefront_core::quantity::parse_quantity;
///
/// assert_eq!(parse_quantity("5"), 5);
/// assert_eq!(parse_quantity(" 12 "), 12);
/// assert_eq!(parse_quantity(""), 0);
/// assert_eq!(parse_quantity("abc"), 0);
/// ```
#[must_use]
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Applies one step to a value.
///
/// Returns the new value, or `None` when the step does not apply and the
/// input should be left untouched (decrement at or below the floor).
///
/// # Examples
///
/// ```
/// use storefront_core::quantity::{step, StepAction};
///
/// assert_eq!(step(5, StepAction::Decrement), Some(4));
/// assert_eq!(step(1, StepAction::Decrement), None);
/// assert_eq!(step(5, StepAction::Increment), Some(6));
/// ```
#[must_use]
pub const fn step(value: u32, action: StepAction) -> Option<u32> {
    match action {
        StepAction::Increment => Some(value.saturating_add(1)),
        StepAction::Decrement => {
            if value > MIN_QUANTITY {
                Some(value.saturating_sub(1))
            } else {
                None
            }
        }
    }
}

/// Parses an input's text and applies one step to it.
///
/// `None` means the input must not be rewritten.
#[must_use]
pub fn apply_step(raw: &str, action: StepAction) -> Option<u32> {
    step(parse_quantity(raw), action)
}
