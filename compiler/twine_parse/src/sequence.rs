//! Left-to-right sequencing.
//!
//! A sequence threads the cursor through its parts. Only the first part may
//! decline: once it matches, the rest is mandatory and a refusal there is a
//! hard failure. A sequence is therefore a branch exactly when its first part
//! is one.
//!
//! Values join statically (see [`Join`]): parts that produce `()` vanish, so
//! `seq!(lit("ab"), ch('c'), id::<0>())` produces a bare `Id<0>`.

use twine_input::Cursor;

use crate::rule::{BranchRule, Rule};
use crate::value::Join;
use crate::Outcome;

/// Two rules run back to back.
///
/// Longer sequences nest to the left; the [`seq!`](crate::seq) macro builds
/// them.
#[derive(Clone, Copy, Debug)]
pub struct Sequence<A, B> {
    first: A,
    second: B,
}

impl<A, B> Sequence<A, B> {
    /// Create a sequence.
    pub const fn new(first: A, second: B) -> Self {
        Sequence { first, second }
    }
}

impl<'s, A, B> Rule<'s> for Sequence<A, B>
where
    A: Rule<'s>,
    B: Rule<'s>,
    A::Output: Join<B::Output>,
{
    type Output = <A::Output as Join<B::Output>>::Joined;

    fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output> {
        self.first.try_match(cursor).and_then(|after, head| {
            self.second
                .parse(after)
                .map(|tail| head.join(tail))
        })
    }
}

impl<'s, A, B> BranchRule<'s> for Sequence<A, B>
where
    A: BranchRule<'s>,
    B: Rule<'s>,
    A::Output: Join<B::Output>,
{
}

/// Sequence any number of rules, left to right.
///
/// ```ignore
/// let rule = seq!(lit("ab"), ch('c'), id::<0>());
/// ```
#[macro_export]
macro_rules! seq {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::seq!($crate::Sequence::new($first, $second) $(, $rest)*)
    };
}
