//! The single error value a failed parse reports.

use twine_input::Position;

use crate::{ErrorKind, Expected};

/// A parse error: what kind of match failed, where, and what was expected.
///
/// Immutable once constructed. The engine only moves it outward; callers
/// inspect it through the accessors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("[{}] expected {expected} at offset {position}", .kind.code())]
pub struct ParseError {
    kind: ErrorKind,
    position: Position,
    expected: Expected,
}

impl ParseError {
    /// Create an error from its parts.
    #[cold]
    pub fn new(kind: ErrorKind, position: Position, expected: Expected) -> Self {
        ParseError {
            kind,
            position,
            expected,
        }
    }

    /// A literal string was expected at `position`.
    #[cold]
    pub fn expected_literal(position: Position, text: &'static str) -> Self {
        Self::new(ErrorKind::ExpectedLiteral, position, Expected::Literal(text))
    }

    /// A single character was expected at `position`.
    #[cold]
    pub fn expected_char(position: Position, c: char) -> Self {
        Self::new(ErrorKind::ExpectedChar, position, Expected::Char(c))
    }

    /// The end of input was expected at `position`.
    #[cold]
    pub fn expected_end_of_input(position: Position) -> Self {
        Self::new(
            ErrorKind::ExpectedEndOfInput,
            position,
            Expected::EndOfInput,
        )
    }

    /// The diagnostic category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Where the failed match was attempted.
    pub fn position(&self) -> Position {
        self.position
    }

    /// What the failed match was looking for.
    pub fn expected(&self) -> &Expected {
        &self.expected
    }
}
