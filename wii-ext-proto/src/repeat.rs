//! Held-across-polls ("repeat") tracking.
//!
//! A button repeats when it is pressed now and was pressed on the
//! immediately preceding decode for the same controller family.

use crate::buttons::ButtonSet;

/// Snapshot of the buttons decoded on the previous poll.
///
/// Starts out with nothing pressed, so no button repeats on the first
/// decode after construction or [`reset`](Self::reset).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RepeatState<B> {
    previous: B,
}

impl<B: ButtonSet> RepeatState<B> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: B::default(),
        }
    }

    /// Buttons pressed on the previous poll.
    #[inline]
    #[must_use]
    pub fn previous(&self) -> B {
        self.previous
    }

    /// Compute the repeat flags for `current` without mutating.
    ///
    /// Returns the repeat set and the state to use for the next poll.
    ///
    /// ```
    /// use wii_ext_proto::{NunchuckButtons, RepeatState};
    ///
    /// let state = RepeatState::new();
    /// let (repeat, state) = state.track(NunchuckButtons::C);
    /// assert!(repeat.is_empty());
    /// let (repeat, _) = state.track(NunchuckButtons::C | NunchuckButtons::Z);
    /// assert_eq!(repeat, NunchuckButtons::C);
    /// ```
    #[must_use]
    pub fn track(self, current: B) -> (B, Self) {
        (current & self.previous, Self { previous: current })
    }

    /// In-place form of [`track`](Self::track).
    pub fn advance(&mut self, current: B) -> B {
        let (repeat, next) = self.track(current);
        *self = next;
        repeat
    }

    /// Forget the previous poll.
    pub fn reset(&mut self) {
        self.previous = B::default();
    }
}
