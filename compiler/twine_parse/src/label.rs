//! Zero-width labels.

use twine_input::Cursor;

use crate::rule::Rule;
use crate::value::Id;
use crate::Outcome;

/// Produces the marker `Id<N>` without consuming input. Always matches.
#[derive(Clone, Copy, Debug, Default)]
pub struct Label<const N: u32>;

impl<'s, const N: u32> Rule<'s> for Label<N> {
    type Output = Id<N>;

    #[inline]
    fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, Id<N>> {
        Outcome::matched(cursor, Id::<N>)
    }
}

#[cfg(test)]
mod tests;
