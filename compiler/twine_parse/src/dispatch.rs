//! Static continuation dispatch.
//!
//! A caller can hand the top-level rule a handler instead of matching on a
//! [`Parsed`](crate::Parsed). Which success method runs is decided by the
//! rule's value shape at compile time:
//!
//! | Shape | Handler method |
//! |-------|----------------|
//! | `()` | [`OnEmpty::on_empty`] |
//! | `Lexeme`, `Id<N>` | [`OnValue::on_value`] with the value itself |
//! | `Aggregate<T>` | [`OnValue::on_value`] with `T` |
//! | `Pair<A, B>` | [`OnValue::on_value`] with `(A, B)` |
//! | `Option<X>` | `None` to [`OnEmpty::on_empty`], `Some(x)` as `x` |
//!
//! A handler only implements the methods its rule can reach; a missing one
//! is a compile error, not a runtime mismatch.

use twine_diagnostic::ParseError;
use twine_input::{Lexeme, Position};

use crate::value::{Aggregate, Id, Pair};
use crate::{parse, Rule};

/// The part of a handler every rule needs.
pub trait Callback {
    /// What every handler method returns.
    type Return;

    /// The parse failed.
    fn on_error(&mut self, error: ParseError) -> Self::Return;
}

/// Success without a value.
pub trait OnEmpty: Callback {
    /// The rule matched, ending at `end`, and produced nothing.
    fn on_empty(&mut self, end: Position) -> Self::Return;
}

/// Success with a value of shape `V`.
pub trait OnValue<V>: Callback {
    /// The rule matched, ending at `end`, and produced `value`.
    fn on_value(&mut self, end: Position, value: V) -> Self::Return;
}

/// Routes a produced value to the matching handler method.
pub trait Deliver<H: Callback> {
    /// Hand `self` to `handler`.
    fn deliver(self, end: Position, handler: &mut H) -> H::Return;
}

impl<H: OnEmpty> Deliver<H> for () {
    fn deliver(self, end: Position, handler: &mut H) -> H::Return {
        handler.on_empty(end)
    }
}

impl<'s, H: OnValue<Lexeme<'s>>> Deliver<H> for Lexeme<'s> {
    fn deliver(self, end: Position, handler: &mut H) -> H::Return {
        handler.on_value(end, self)
    }
}

impl<const N: u32, H: OnValue<Id<N>>> Deliver<H> for Id<N> {
    fn deliver(self, end: Position, handler: &mut H) -> H::Return {
        handler.on_value(end, self)
    }
}

impl<T, H: OnValue<T>> Deliver<H> for Aggregate<T> {
    fn deliver(self, end: Position, handler: &mut H) -> H::Return {
        handler.on_value(end, self.0)
    }
}

impl<A, B, H: OnValue<(A, B)>> Deliver<H> for Pair<A, B> {
    fn deliver(self, end: Position, handler: &mut H) -> H::Return {
        handler.on_value(end, (self.0, self.1))
    }
}

impl<X: Deliver<H>, H: OnEmpty> Deliver<H> for Option<X> {
    fn deliver(self, end: Position, handler: &mut H) -> H::Return {
        match self {
            Some(value) => value.deliver(end, handler),
            None => handler.on_empty(end),
        }
    }
}

/// Run `rule` over `input` and hand the result to `handler`.
pub fn dispatch<'s, R, H>(rule: &R, input: &'s str, handler: &mut H) -> H::Return
where
    R: Rule<'s>,
    R::Output: Deliver<H>,
    H: Callback,
{
    match parse(rule, input) {
        Ok(parsed) => parsed.value.deliver(parsed.end.position(), handler),
        Err(error) => handler.on_error(error),
    }
}
