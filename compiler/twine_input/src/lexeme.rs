//! Non-owning views of matched input.

use crate::Position;

/// A span of already-matched input.
///
/// Borrows the input buffer; it must not outlive the parse that produced it.
#[derive(Clone, Copy, Debug)]
pub struct Lexeme<'s> {
    src: &'s str,
    start: Position,
    end: Position,
}

impl<'s> Lexeme<'s> {
    /// Create a lexeme over `src[start..end]`.
    pub fn new(src: &'s str, start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "lexeme start {start} exceeds end {end}");
        debug_assert!(
            end.offset() <= src.len(),
            "lexeme end {end} exceeds input length {}",
            src.len()
        );
        Lexeme { src, start, end }
    }

    /// First byte of the span.
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// One past the last byte of the span.
    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.start.distance_to(self.end)
    }

    /// Returns `true` if the span covers no input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched text.
    ///
    /// Lexemes produced by the engine always fall on `char` boundaries.
    pub fn as_str(&self) -> &'s str {
        self.src
            .get(self.start.offset()..self.end.offset())
            .unwrap_or_default()
    }
}

/// Lexemes compare by span and text, not by the identity of the input.
impl PartialEq for Lexeme<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.as_str() == other.as_str()
    }
}

impl Eq for Lexeme<'_> {}
