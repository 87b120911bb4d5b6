//! Produced value shapes.
//!
//! A rule's `Output` is one of a small closed set of shapes:
//!
//! | Shape | Produced by |
//! |-------|-------------|
//! | `()` | matchers, branches and sequences with no value-producing part |
//! | [`Lexeme`] | [`capture`](crate::dsl::capture) |
//! | [`Id<N>`] | [`id`](crate::dsl::id) labels |
//! | [`Aggregate<T>`] | a list, once its sink is finished |
//! | `Option<T>` | [`opt`](crate::dsl::opt) |
//! | [`Pair<A, B>`] | a sequence with two value-producing parts |
//!
//! Sequencing combines shapes with [`Join`], where `()` is the identity, so
//! `lit("ab") + id::<0>()` produces a bare `Id<0>`. The resolution is
//! entirely static: a rule that produces nothing carries nothing.
//!
//! Inside a list, an item's value is streamed into the sink through
//! [`Produce`], one [`Value`] per marker or lexeme, in parse order.

use twine_input::Lexeme;

use crate::Sink;

/// A runtime label identity, as delivered to a sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Marker(u32);

impl Marker {
    /// Create a marker with the given identity.
    pub const fn new(id: u32) -> Self {
        Marker(id)
    }

    /// The label identity.
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Zero-size label value with compile-time identity `N`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Id<const N: u32>;

impl<const N: u32> Id<N> {
    /// The runtime form of this label.
    pub const MARKER: Marker = Marker(N);
}

/// The finished result of a list's sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Aggregate<T>(pub T);

impl<T> Aggregate<T> {
    /// Unwrap the sink result.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Two value-producing parts of one sequence, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pair<A, B>(pub A, pub B);

/// A single value as delivered to a sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value<'s> {
    /// A label was passed.
    Marker(Marker),
    /// A span of input was captured.
    Lexeme(Lexeme<'s>),
}

// === Sequencing ===

/// Static concatenation of two value shapes; `()` is the identity.
pub trait Join<R> {
    /// The combined shape.
    type Joined;

    /// Combine `self` (produced first) with `rhs`.
    fn join(self, rhs: R) -> Self::Joined;
}

/// Helper for [`Join`] on a non-unit left-hand side: dispatches on the
/// right-hand side, so `()` on the right collapses to the left shape.
pub trait Prepend<L> {
    /// The combined shape.
    type Prepended;

    /// Combine `lhs` (produced first) with `self`.
    fn prepend(self, lhs: L) -> Self::Prepended;
}

impl<R> Join<R> for () {
    type Joined = R;

    #[inline]
    fn join(self, rhs: R) -> R {
        rhs
    }
}

impl<'s, R: Prepend<Lexeme<'s>>> Join<R> for Lexeme<'s> {
    type Joined = R::Prepended;

    #[inline]
    fn join(self, rhs: R) -> Self::Joined {
        rhs.prepend(self)
    }
}

impl<const N: u32, R: Prepend<Id<N>>> Join<R> for Id<N> {
    type Joined = R::Prepended;

    #[inline]
    fn join(self, rhs: R) -> Self::Joined {
        rhs.prepend(self)
    }
}

impl<T, R: Prepend<Aggregate<T>>> Join<R> for Aggregate<T> {
    type Joined = R::Prepended;

    #[inline]
    fn join(self, rhs: R) -> Self::Joined {
        rhs.prepend(self)
    }
}

impl<T, R: Prepend<Option<T>>> Join<R> for Option<T> {
    type Joined = R::Prepended;

    #[inline]
    fn join(self, rhs: R) -> Self::Joined {
        rhs.prepend(self)
    }
}

impl<A, B, R: Prepend<Pair<A, B>>> Join<R> for Pair<A, B> {
    type Joined = R::Prepended;

    #[inline]
    fn join(self, rhs: R) -> Self::Joined {
        rhs.prepend(self)
    }
}

impl<L> Prepend<L> for () {
    type Prepended = L;

    #[inline]
    fn prepend(self, lhs: L) -> L {
        lhs
    }
}

impl<'s, L> Prepend<L> for Lexeme<'s> {
    type Prepended = Pair<L, Lexeme<'s>>;

    #[inline]
    fn prepend(self, lhs: L) -> Self::Prepended {
        Pair(lhs, self)
    }
}

impl<const N: u32, L> Prepend<L> for Id<N> {
    type Prepended = Pair<L, Id<N>>;

    #[inline]
    fn prepend(self, lhs: L) -> Self::Prepended {
        Pair(lhs, self)
    }
}

impl<T, L> Prepend<L> for Aggregate<T> {
    type Prepended = Pair<L, Aggregate<T>>;

    #[inline]
    fn prepend(self, lhs: L) -> Self::Prepended {
        Pair(lhs, self)
    }
}

impl<T, L> Prepend<L> for Option<T> {
    type Prepended = Pair<L, Option<T>>;

    #[inline]
    fn prepend(self, lhs: L) -> Self::Prepended {
        Pair(lhs, self)
    }
}

impl<A, B, L> Prepend<L> for Pair<A, B> {
    type Prepended = Pair<L, Pair<A, B>>;

    #[inline]
    fn prepend(self, lhs: L) -> Self::Prepended {
        Pair(lhs, self)
    }
}

// === Streaming into sinks ===

/// Streams a value shape into a sink, one [`Value`] per marker or lexeme.
///
/// Only shapes made of markers and lexemes can be list items; a list nested
/// directly inside another list's item is rejected at compile time.
pub trait Produce<'s> {
    /// Push every value in `self` into `sink`, in parse order.
    fn produce<S: Sink<'s>>(self, sink: &mut S);
}

impl<'s> Produce<'s> for () {
    #[inline]
    fn produce<S: Sink<'s>>(self, _sink: &mut S) {}
}

impl<'s> Produce<'s> for Lexeme<'s> {
    #[inline]
    fn produce<S: Sink<'s>>(self, sink: &mut S) {
        sink.push(Value::Lexeme(self));
    }
}

impl<'s, const N: u32> Produce<'s> for Id<N> {
    #[inline]
    fn produce<S: Sink<'s>>(self, sink: &mut S) {
        sink.push(Value::Marker(Self::MARKER));
    }
}

impl<'s, T: Produce<'s>> Produce<'s> for Option<T> {
    #[inline]
    fn produce<S: Sink<'s>>(self, sink: &mut S) {
        if let Some(value) = self {
            value.produce(sink);
        }
    }
}

impl<'s, A: Produce<'s>, B: Produce<'s>> Produce<'s> for Pair<A, B> {
    #[inline]
    fn produce<S: Sink<'s>>(self, sink: &mut S) {
        self.0.produce(sink);
        self.1.produce(sink);
    }
}
