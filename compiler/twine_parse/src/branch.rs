//! Conditional rules.
//!
//! A branch pairs a condition matcher with a body. The condition is attempted
//! from a snapshot; if it refuses, the cursor is restored and the branch is
//! `Unmatched`. Once it matches, the body runs committed: any failure
//! inside it is `Failed`, even a body that never consumed anything.

use tracing::{debug, trace};
use twine_input::Cursor;

use crate::rule::{BranchRule, Matcher, Rule};
use crate::Outcome;

/// A condition matcher guarding a committed body.
#[derive(Clone, Copy, Debug)]
pub struct Branch<C, B> {
    condition: C,
    body: B,
}

impl<C, B> Branch<C, B> {
    /// Create a branch.
    pub const fn new(condition: C, body: B) -> Self {
        Branch { condition, body }
    }
}

impl<'s, C: Matcher, B: Rule<'s>> Rule<'s> for Branch<C, B> {
    type Output = B::Output;

    fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, B::Output> {
        let mut ahead = cursor;
        let snapshot = ahead.snapshot();
        if let Err(refused) = self.condition.attempt(&mut ahead) {
            ahead.restore(snapshot);
            trace!(pos = snapshot.offset(), "branch condition declined");
            return Outcome::unmatched(refused);
        }

        let outcome = self.body.parse(ahead);
        if let Outcome::Failed { error } = &outcome {
            debug!(
                condition_end = ahead.position().offset(),
                error = %error,
                "branch body failed after commit"
            );
        }
        outcome
    }
}

impl<'s, C: Matcher, B: Rule<'s>> BranchRule<'s> for Branch<C, B> {}
