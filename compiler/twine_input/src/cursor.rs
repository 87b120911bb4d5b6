//! Value-typed cursor over a borrowed input.
//!
//! The cursor is [`Copy`]: taking a snapshot is copying a position, and
//! restoring is reassigning it. There is no hidden state behind the cursor,
//! so a failed attempt cannot leave anything behind for the next attempt.
//!
//! # Invariant
//!
//! The position always lies on a `char` boundary of the input. Every
//! consuming operation advances by a whole `&str` or `char`, and
//! [`restore()`](Cursor::restore) only accepts positions previously produced
//! by a cursor over the same input.

use crate::{Lexeme, Position};

/// Position marker into an input, plus the primitives to consume from it.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'s> {
    /// The whole input; the cursor never owns it.
    src: &'s str,
    /// Current byte offset into `src`.
    pos: usize,
}

/// Size assertion: a cursor is a fat pointer plus an offset.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'s> Cursor<'s> {
    /// Create a cursor at the start of `src`.
    pub fn new(src: &'s str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.pos)
    }

    /// Record the current position for a later [`restore()`](Self::restore).
    ///
    /// O(1) and side-effect free.
    #[inline]
    pub fn snapshot(&self) -> Position {
        self.position()
    }

    /// Reposition the cursor to a previously taken snapshot.
    #[inline]
    pub fn restore(&mut self, snapshot: Position) {
        debug_assert!(
            snapshot.offset() <= self.src.len(),
            "snapshot {} out of bounds (max {})",
            snapshot.offset(),
            self.src.len()
        );
        debug_assert!(
            self.src.is_char_boundary(snapshot.offset()),
            "snapshot {} is not on a char boundary",
            snapshot.offset()
        );
        self.pos = snapshot.offset();
    }

    /// The unconsumed rest of the input.
    #[inline]
    pub fn rest(&self) -> &'s str {
        self.src.get(self.pos..).unwrap_or_default()
    }

    /// Returns `true` once every byte of the input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Consume `text` if the rest of the input starts with it.
    ///
    /// Returns `false` and leaves the cursor untouched otherwise.
    #[inline]
    pub fn eat_str(&mut self, text: &str) -> bool {
        if self.rest().starts_with(text) {
            self.pos += text.len();
            true
        } else {
            false
        }
    }

    /// Consume `c` if it is the next character.
    ///
    /// Returns `false` and leaves the cursor untouched otherwise.
    #[inline]
    pub fn eat_char(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// The span from `start` to the current position.
    ///
    /// `start` must be a snapshot taken from this cursor at or before the
    /// current position.
    pub fn lexeme_since(&self, start: Position) -> Lexeme<'s> {
        Lexeme::new(self.src, start, self.position())
    }
}

/// Two cursors are equal when they point at the same offset of the same input.
impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.src, other.src) && self.pos == other.pos
    }
}

impl Eq for Cursor<'_> {}
