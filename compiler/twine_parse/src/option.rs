//! Optional rules.
//!
//! [`Opt`] turns a declined branch into an empty success at the unchanged
//! cursor, producing `None` and never creating a sink. [`OrEmpty`] does the
//! same for a list, but produces the aggregate of a fresh sink finished with
//! no values, so callers see one value shape whatever the count.
//!
//! Both forward failures untouched and are unconditional: neither ever
//! declines.

use tracing::trace;
use twine_input::Cursor;

use crate::list::List;
use crate::rule::{BranchRule, Rule};
use crate::value::Aggregate;
use crate::{Outcome, Sink, SinkFactory};

/// `Some` value of a matched branch, or `None` if it declined.
#[derive(Clone, Copy, Debug)]
pub struct Opt<R> {
    inner: R,
}

impl<R> Opt<R> {
    /// Make `inner` optional.
    pub const fn new(inner: R) -> Self {
        Opt { inner }
    }
}

impl<'s, R: BranchRule<'s>> Rule<'s> for Opt<R> {
    type Output = Option<R::Output>;

    fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output> {
        match self.inner.try_match(cursor) {
            Outcome::Matched { cursor, value } => Outcome::matched(cursor, Some(value)),
            Outcome::Unmatched { .. } => {
                trace!(pos = cursor.position().offset(), "optional rule absent");
                Outcome::matched(cursor, None)
            }
            Outcome::Failed { error } => Outcome::failed(error),
        }
    }
}

/// A list whose absence finishes an empty sink instead of declining.
#[derive(Clone, Copy, Debug)]
pub struct OrEmpty<L> {
    list: L,
}

impl<L> OrEmpty<L> {
    pub(crate) const fn new(list: L) -> Self {
        OrEmpty { list }
    }
}

impl<'s, I, F, M> Rule<'s> for OrEmpty<List<I, F, M>>
where
    List<I, F, M>: Rule<'s, Output = Aggregate<<F::Sink as Sink<'s>>::Output>>,
    F: SinkFactory<'s>,
{
    type Output = Aggregate<<F::Sink as Sink<'s>>::Output>;

    fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output> {
        match self.list.try_match(cursor) {
            Outcome::Unmatched { .. } => {
                trace!(pos = cursor.position().offset(), "empty list");
                let sink = self.list.factory().create();
                Outcome::matched(cursor, Aggregate(sink.finish()))
            }
            other => other,
        }
    }
}
