//! What a failed match was looking for.

use std::fmt;

/// The expectation a failed match reports.
///
/// Every variant borrows nothing from the input, so building one never
/// allocates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    /// A literal string.
    Literal(&'static str),
    /// A single character.
    Char(char),
    /// The end of the input.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Literal(text) => f.write_str(text),
            Expected::Char(c) => write!(f, "{c}"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}
