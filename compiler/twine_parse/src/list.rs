//! The repetition engine.
//!
//! A list parses one or more items, optionally separated, streaming every
//! produced value into a sink created for that activation. Three modes:
//!
//! | Mode | Built with | Item requirement | After a separator |
//! |------|------------|------------------|-------------------|
//! | bare | [`list`](crate::dsl::list) | branch | n/a |
//! | separated | [`List::sep`] | any rule | item mandatory |
//! | trailing | [`List::trailing_sep`] | branch | item optional |
//!
//! # State machine
//!
//! ```text
//! Start ──item──▶ AfterItem ──sep──▶ AfterSeparator ──item──▶ AfterItem
//!   │                 │                     │
//!   │ declined        │ declined            │ declined: Done (trailing)
//!   ▼                 ▼                     │           Error (separated)
//! Unmatched          Done                   ▼
//! ```
//!
//! In bare mode `AfterItem` tries the next item directly. A declined first
//! item makes the whole list `Unmatched`; the sink is created only once the
//! first item has matched. Any failure abandons the sink unfinished.

use tracing::{debug, trace};
use twine_diagnostic::ParseError;
use twine_input::Cursor;

use crate::rule::{BranchRule, Rule};
use crate::value::{Aggregate, Produce};
use crate::{Outcome, Sink, SinkFactory};

// === Modes ===

/// Bare mode: items follow each other directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bare;

/// Separated mode: a separator demands a following item.
#[derive(Clone, Copy, Debug)]
pub struct Sep<S>(S);

/// Trailing mode: the last separator may stand alone.
#[derive(Clone, Copy, Debug)]
pub struct TrailingSep<S>(S);

/// How a list moves on from one item to the next.
pub trait Separation<'s> {
    /// Whether an item may be missing after a matched separator.
    const TRAILING: bool;

    /// Try a separator at `cursor`, streaming its value into `sink`.
    ///
    /// Returns `None` when the mode has no separator.
    fn try_separator<K: Sink<'s>>(&self, cursor: Cursor<'s>, sink: &mut K) -> Option<Outcome<'s, ()>>;
}

impl<'s> Separation<'s> for Bare {
    const TRAILING: bool = false;

    #[inline]
    fn try_separator<K: Sink<'s>>(&self, _cursor: Cursor<'s>, _sink: &mut K) -> Option<Outcome<'s, ()>> {
        None
    }
}

fn match_separator<'s, S, K>(separator: &S, cursor: Cursor<'s>, sink: &mut K) -> Outcome<'s, ()>
where
    S: BranchRule<'s>,
    S::Output: Produce<'s>,
    K: Sink<'s>,
{
    trace!(pos = cursor.position().offset(), "trying separator");
    separator.try_match(cursor).map(|value| value.produce(sink))
}

impl<'s, S> Separation<'s> for Sep<S>
where
    S: BranchRule<'s>,
    S::Output: Produce<'s>,
{
    const TRAILING: bool = false;

    fn try_separator<K: Sink<'s>>(&self, cursor: Cursor<'s>, sink: &mut K) -> Option<Outcome<'s, ()>> {
        Some(match_separator(&self.0, cursor, sink))
    }
}

impl<'s, S> Separation<'s> for TrailingSep<S>
where
    S: BranchRule<'s>,
    S::Output: Produce<'s>,
{
    const TRAILING: bool = true;

    fn try_separator<K: Sink<'s>>(&self, cursor: Cursor<'s>, sink: &mut K) -> Option<Outcome<'s, ()>> {
        Some(match_separator(&self.0, cursor, sink))
    }
}

// === The list rule ===

/// A repetition of `item`, accumulated by sinks from `factory`.
#[derive(Clone, Copy, Debug)]
pub struct List<I, F, M = Bare> {
    item: I,
    factory: F,
    mode: M,
}

impl<I, F> List<I, F, Bare> {
    /// A bare list of `item`.
    pub const fn new(item: I, factory: F) -> Self {
        List {
            item,
            factory,
            mode: Bare,
        }
    }

    /// Require `separator` between items.
    ///
    /// A separator must be followed by another item; the item itself may be
    /// unconditional.
    pub fn sep<S>(self, separator: S) -> List<I, F, Sep<S>> {
        List {
            item: self.item,
            factory: self.factory,
            mode: Sep(separator),
        }
    }

    /// Require `separator` between items, allowing one after the last item.
    pub fn trailing_sep<S>(self, separator: S) -> List<I, F, TrailingSep<S>> {
        List {
            item: self.item,
            factory: self.factory,
            mode: TrailingSep(separator),
        }
    }
}

impl<I, F, M> List<I, F, M> {
    /// Turn a declined first item into an empty, finished aggregate.
    pub fn or_empty(self) -> crate::OrEmpty<Self> {
        crate::OrEmpty::new(self)
    }

    pub(crate) fn factory(&self) -> &F {
        &self.factory
    }
}

/// States after the first item has matched.
enum State {
    AfterItem,
    AfterSeparator,
    Done,
    Error(ParseError),
}

/// The live part of one list activation.
struct Activation<'s, K> {
    cursor: Cursor<'s>,
    sink: K,
    count: usize,
}

impl<I, F, M> List<I, F, M> {
    fn run<'s>(
        &self,
        start: Cursor<'s>,
    ) -> Outcome<'s, Aggregate<<F::Sink as Sink<'s>>::Output>>
    where
        I: Rule<'s>,
        I::Output: Produce<'s>,
        F: SinkFactory<'s>,
        M: Separation<'s>,
    {
        let (cursor, first) = match self.item.try_match(start) {
            Outcome::Matched { cursor, value } => (cursor, value),
            Outcome::Unmatched { refused } => {
                trace!(pos = start.position().offset(), "list did not start");
                return Outcome::unmatched(refused);
            }
            Outcome::Failed { error } => return Outcome::failed(error),
        };

        let mut run = Activation {
            cursor,
            sink: self.factory.create(),
            count: 1,
        };
        first.produce(&mut run.sink);
        trace!(count = 1, pos = run.cursor.position().offset(), "list item");

        let mut state = State::AfterItem;
        loop {
            state = match state {
                State::AfterItem => match self.mode.try_separator(run.cursor, &mut run.sink) {
                    None => self.next_item(&mut run, true),
                    Some(Outcome::Matched { cursor, .. }) => {
                        run.cursor = cursor;
                        State::AfterSeparator
                    }
                    Some(Outcome::Unmatched { .. }) => State::Done,
                    Some(Outcome::Failed { error }) => State::Error(error),
                },
                State::AfterSeparator => self.next_item(&mut run, M::TRAILING),
                State::Done => {
                    debug!(
                        count = run.count,
                        start = start.position().offset(),
                        end = run.cursor.position().offset(),
                        "list finished"
                    );
                    return Outcome::matched(run.cursor, Aggregate(run.sink.finish()));
                }
                State::Error(error) => {
                    debug!(count = run.count, error = %error, "list failed");
                    return Outcome::failed(error);
                }
            };
        }
    }

    /// Try one more item. A declined item ends the list if `optional`,
    /// and is promoted to an error otherwise.
    fn next_item<'s, K>(&self, run: &mut Activation<'s, K>, optional: bool) -> State
    where
        I: Rule<'s>,
        I::Output: Produce<'s>,
        K: Sink<'s>,
    {
        match self.item.try_match(run.cursor) {
            Outcome::Matched { cursor, value } => {
                value.produce(&mut run.sink);
                run.cursor = cursor;
                run.count += 1;
                trace!(count = run.count, pos = cursor.position().offset(), "list item");
                State::AfterItem
            }
            Outcome::Unmatched { .. } if optional => State::Done,
            Outcome::Unmatched { refused } => State::Error(refused),
            Outcome::Failed { error } => State::Error(error),
        }
    }
}

impl<'s, I, F> Rule<'s> for List<I, F, Bare>
where
    I: BranchRule<'s>,
    I::Output: Produce<'s>,
    F: SinkFactory<'s>,
{
    type Output = Aggregate<<F::Sink as Sink<'s>>::Output>;

    fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output> {
        self.run(cursor)
    }
}

impl<'s, I, F, S> Rule<'s> for List<I, F, Sep<S>>
where
    I: Rule<'s>,
    I::Output: Produce<'s>,
    F: SinkFactory<'s>,
    Sep<S>: Separation<'s>,
{
    type Output = Aggregate<<F::Sink as Sink<'s>>::Output>;

    fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output> {
        self.run(cursor)
    }
}

impl<'s, I, F, S> Rule<'s> for List<I, F, TrailingSep<S>>
where
    I: BranchRule<'s>,
    I::Output: Produce<'s>,
    F: SinkFactory<'s>,
    TrailingSep<S>: Separation<'s>,
{
    type Output = Aggregate<<F::Sink as Sink<'s>>::Output>;

    fn try_match(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output> {
        self.run(cursor)
    }
}

impl<'s, I, F, M> BranchRule<'s> for List<I, F, M>
where
    I: BranchRule<'s>,
    List<I, F, M>: Rule<'s>,
{
}
