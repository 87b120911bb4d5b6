//! Span capture.

use twine_input::{Cursor, Lexeme};

use crate::rule::{BranchRule, Rule};
use crate::Outcome;

/// Runs an inner rule and produces the span it consumed as a [`Lexeme`].
///
/// The inner rule's own value is discarded. Declines exactly when the inner
/// rule declines.
#[derive(Clone, Copy, Debug)]
pub struct Capture<R> {
    inner: R,
}

impl<R> Capture<R> {
    /// Capture what `inner` consumes.
    pub const fn new(inner: R) -> Self {
        Capture { inner }
    }
}

impl<'s, R: Rule<'s>> Rule<'s> for Capture<R> {
    type Output = Lexeme<'s>;

    fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, Lexeme<'s>> {
        let start = cursor.snapshot();
        self.inner
            .try_match(cursor)
            .and_then(|end, _| Outcome::matched(end, end.lexeme_since(start)))
    }
}

impl<'s, R: BranchRule<'s>> BranchRule<'s> for Capture<R> {}
