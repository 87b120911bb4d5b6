//! Leaf matchers.
//!
//! The token-level primitives every grammar bottoms out in. Each is a
//! [`Matcher`] and, through an empty body, a branch rule producing no value.

use twine_diagnostic::ParseError;
use twine_input::Cursor;

use crate::rule::{match_leaf, BranchRule, Matcher, Rule};
use crate::Outcome;

/// Matches a literal string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lit {
    text: &'static str,
}

impl Lit {
    /// Create a literal matcher.
    pub const fn new(text: &'static str) -> Self {
        Lit { text }
    }
}

impl Matcher for Lit {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
        if cursor.eat_str(self.text) {
            Ok(())
        } else {
            Err(ParseError::expected_literal(cursor.position(), self.text))
        }
    }
}

/// Matches a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Char {
    c: char,
}

impl Char {
    /// Create a character matcher.
    pub const fn new(c: char) -> Self {
        Char { c }
    }
}

impl Matcher for Char {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
        if cursor.eat_char(self.c) {
            Ok(())
        } else {
            Err(ParseError::expected_char(cursor.position(), self.c))
        }
    }
}

/// Matches the end of input without consuming anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Eof;

impl Matcher for Eof {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
        if cursor.is_eof() {
            Ok(())
        } else {
            Err(ParseError::expected_end_of_input(cursor.position()))
        }
    }
}

macro_rules! leaf_rule {
    ($($matcher:ty),* $(,)?) => {$(
        impl<'s> Rule<'s> for $matcher {
            type Output = ();

            #[inline]
            fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, ()> {
                match_leaf(self, cursor)
            }
        }

        impl<'s> BranchRule<'s> for $matcher {}
    )*};
}

leaf_rule!(Lit, Char, Eof);
