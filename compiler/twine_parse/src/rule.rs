//! The rule traits.
//!
//! Rules are static descriptions composed at compile time: one type per
//! combinator, nested generically. A rule holds no mutable state, so one
//! value can drive any number of parses, on any number of threads.
//!
//! # Categories
//!
//! - Every rule implements [`Rule`]. An **unconditional** rule either
//!   matches or fails; its `try_match` never returns `Unmatched`.
//! - A **branch** rule additionally implements the [`BranchRule`] marker:
//!   its leading condition may decline without consuming input, and
//!   `try_match` reports that as `Unmatched`.
//!
//! Combinators that need to stop cleanly on a missing element (lists,
//! `opt`, choices) require `BranchRule` statically; an unconditional rule
//! in those positions is rejected at compile time.

use twine_diagnostic::ParseError;
use twine_input::Cursor;

use crate::Outcome;

/// Leaf matching capability: consume a fixed pattern or refuse.
///
/// A matcher never produces a hard failure. Hard failures are synthesized by
/// the rules that commit to a matcher's success.
pub trait Matcher {
    /// Attempt to consume the pattern at `cursor`.
    ///
    /// On `Err` the returned error describes what was expected; callers
    /// restore their own snapshot, so a matcher may leave the cursor
    /// anywhere when it refuses.
    fn attempt(&self, cursor: &mut Cursor<'_>) -> Result<(), ParseError>;
}

/// A composable grammar rule.
pub trait Rule<'s> {
    /// The value shape this rule produces (see [`crate::value`]).
    type Output;

    /// Attempt the rule at `cursor`.
    ///
    /// Branch rules may return `Unmatched`; unconditional rules never do.
    fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output>;

    /// Run the rule as mandatory: an `Unmatched` becomes `Failed`.
    fn parse(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output> {
        self.try_match(cursor).commit()
    }
}

/// Marker for rules whose condition may legitimately decline.
pub trait BranchRule<'s>: Rule<'s> {}

impl<'s, R: Rule<'s> + ?Sized> Rule<'s> for &R {
    type Output = R::Output;

    #[inline]
    fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output> {
        (**self).try_match(cursor)
    }
}

impl<'s, R: BranchRule<'s> + ?Sized> BranchRule<'s> for &R {}

/// Run a matcher as a branch rule with an empty body.
///
/// Snapshots before attempting and restores on refusal, so the returned
/// `Unmatched` never carries a consumed-input delta.
pub(crate) fn match_leaf<'s, M: Matcher + ?Sized>(
    matcher: &M,
    cursor: Cursor<'s>,
) -> Outcome<'s, ()> {
    let mut ahead = cursor;
    let snapshot = ahead.snapshot();
    match matcher.attempt(&mut ahead) {
        Ok(()) => Outcome::matched(ahead, ()),
        Err(refused) => {
            ahead.restore(snapshot);
            debug_assert_eq!(ahead, cursor);
            Outcome::unmatched(refused)
        }
    }
}
