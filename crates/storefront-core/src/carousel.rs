//! Carousel slide selection state.
//!
//! A carousel holds a fixed number of slides and exactly one current index.
//! The index moves either by an explicit selection (a dot click) or by the
//! periodic advance driven from the web layer. A carousel with zero slides
//! is representable and inert: advancing it is a guarded no-op rather than
//! a division by zero.

use thiserror::Error;

/// Errors from carousel index operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// The requested slide index does not exist.
    #[error("slide index {index} out of range for carousel with {len} slides")]
    OutOfRange { index: usize, len: usize },
}

/// Current slide selection for one carousel.
///
/// Invariant: when `len > 0`, `current` is always in `[0, len)`. Exactly one
/// slide (and the dot sharing its index) is considered active at a time.
///
/// # Examples
///
/// ```
/// use storefront_core::carousel::CarouselState;
///
/// let mut state = CarouselState::new(3);
/// assert_eq!(state.current(), 0);
///
/// state.show(2)?;
/// assert_eq!(state.current(), 2);
///
/// // Timed advance wraps around.
/// assert_eq!(state.advance(), Some(0));
/// # Ok::<(), storefront_core::carousel::CarouselError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
}

impl CarouselState {
    /// Creates state for a carousel with `len` slides, starting at index 0.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the carousel has no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The currently active slide index.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Whether the slide at `index` is the active one.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current
    }

    /// Selects the slide at `index`, as a dot click does.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::OutOfRange`] if `index >= len`. Out-of-range
    /// selection is rejected rather than clamped so misuse by an embedding
    /// host stays observable.
    pub const fn show(&mut self, index: usize) -> Result<usize, CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(index)
    }

    /// Advances to the next slide, wrapping past the last one.
    ///
    /// Returns the new index, or `None` for an empty carousel (no state
    /// changes and nothing to re-render).
    pub fn advance(&mut self) -> Option<usize> {
        let next = self.current.checked_add(1)?.checked_rem(self.len)?;
        self.current = next;
        Some(next)
    }
}
