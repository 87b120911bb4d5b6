//! Per-activation accumulators for list values.
//!
//! A list asks its [`SinkFactory`] for a fresh sink each time it runs, pushes
//! every produced [`Value`] into it in parse order, and finishes it exactly
//! once. `finish` takes the sink by value, so a finished sink cannot be
//! pushed to again.
//!
//! If the list fails, the sink is dropped unfinished: partial results are
//! never recovered.

use crate::Value;

/// Accumulator for the values of one list activation.
pub trait Sink<'s> {
    /// The aggregate this sink finishes into.
    type Output;

    /// Receive the next value. Must not fail.
    fn push(&mut self, value: Value<'s>);

    /// Consume the sink and return the aggregate.
    fn finish(self) -> Self::Output;
}

/// Creates a fresh sink for each list activation.
///
/// Implemented for every `Fn() -> S`, so `Count::default` is a factory.
pub trait SinkFactory<'s> {
    /// The sink type created.
    type Sink: Sink<'s>;

    /// Create a sink with nothing pushed yet.
    fn create(&self) -> Self::Sink;
}

impl<'s, F, S> SinkFactory<'s> for F
where
    F: Fn() -> S,
    S: Sink<'s>,
{
    type Sink = S;

    #[inline]
    fn create(&self) -> S {
        self()
    }
}

/// Counts every value pushed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Count {
    count: usize,
}

impl<'s> Sink<'s> for Count {
    type Output = usize;

    #[inline]
    fn push(&mut self, _value: Value<'s>) {
        self.count += 1;
    }

    fn finish(self) -> usize {
        self.count
    }
}

/// Collects every value pushed, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collect<'s> {
    values: Vec<Value<'s>>,
}

impl<'s> Sink<'s> for Collect<'s> {
    type Output = Vec<Value<'s>>;

    fn push(&mut self, value: Value<'s>) {
        self.values.push(value);
    }

    fn finish(self) -> Vec<Value<'s>> {
        self.values
    }
}

/// Folds every value into an accumulator with a closure.
#[derive(Clone, Debug)]
pub struct Fold<A, F> {
    acc: A,
    step: F,
}

impl<A, F> Fold<A, F> {
    /// Start folding from `init`.
    pub fn new(init: A, step: F) -> Self {
        Fold { acc: init, step }
    }
}

impl<'s, A, F> Sink<'s> for Fold<A, F>
where
    F: FnMut(&mut A, Value<'s>),
{
    type Output = A;

    fn push(&mut self, value: Value<'s>) {
        (self.step)(&mut self.acc, value);
    }

    fn finish(self) -> A {
        self.acc
    }
}
