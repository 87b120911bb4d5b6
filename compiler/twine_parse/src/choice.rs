//! Ordered choice between branches.

use tracing::trace;
use twine_input::Cursor;

use crate::rule::{BranchRule, Rule};
use crate::Outcome;

/// Tries `first`, and `second` only if `first` declined.
///
/// A committed failure in `first` is final; `second` is never tried after
/// it. When both decline, the choice declines with the refusal of `first`.
#[derive(Clone, Copy, Debug)]
pub struct Alt<A, B> {
    first: A,
    second: B,
}

impl<A, B> Alt<A, B> {
    /// Create a choice.
    pub const fn new(first: A, second: B) -> Self {
        Alt { first, second }
    }
}

impl<'s, A, B> Rule<'s> for Alt<A, B>
where
    A: BranchRule<'s>,
    B: BranchRule<'s, Output = A::Output>,
{
    type Output = A::Output;

    fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, A::Output> {
        self.first.try_match(cursor).or_else(|first| {
            trace!(pos = cursor.position().offset(), "first alternative declined");
            match self.second.try_match(cursor) {
                Outcome::Unmatched { .. } => Outcome::unmatched(first),
                other => other,
            }
        })
    }
}

impl<'s, A, B> BranchRule<'s> for Alt<A, B>
where
    A: BranchRule<'s>,
    B: BranchRule<'s, Output = A::Output>,
{
}
