//! Byte offsets into an input.

use std::fmt;

/// An opaque marker into the input, measured in bytes from the start.
///
/// Positions are totally ordered and `Copy`. Two positions taken from the
/// same input can be subtracted with [`distance_to`](Self::distance_to).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// The first byte of any input.
    pub const START: Position = Position(0);

    /// Create a position at `offset` bytes from the start of the input.
    #[inline]
    pub const fn new(offset: usize) -> Self {
        Position(offset)
    }

    /// Byte offset from the start of the input.
    #[inline]
    pub const fn offset(self) -> usize {
        self.0
    }

    /// Number of bytes from `self` to `later`.
    ///
    /// Saturates to zero when `later` is before `self`.
    #[inline]
    pub const fn distance_to(self, later: Position) -> usize {
        later.0.saturating_sub(self.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests;
