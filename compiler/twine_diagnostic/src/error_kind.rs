//! Diagnostic categories for parse errors.
//!
//! Each kind carries a stable code (e.g., `E1001`) for searchability.

use std::fmt;

/// The category of a parse error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// A literal string did not match.
    ExpectedLiteral,
    /// A single character did not match.
    ExpectedChar,
    /// Input remained where the end of input was required.
    ExpectedEndOfInput,
}

impl ErrorKind {
    /// The stable code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::ExpectedLiteral => "E1001",
            ErrorKind::ExpectedChar => "E1002",
            ErrorKind::ExpectedEndOfInput => "E1003",
        }
    }

    /// Human-readable description of the category.
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::ExpectedLiteral => "expected literal",
            ErrorKind::ExpectedChar => "expected character",
            ErrorKind::ExpectedEndOfInput => "expected end of input",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
