//! Grammar-building functions.
//!
//! ```ignore
//! use twine_parse::dsl::*;
//! use twine_parse::Count;
//!
//! let item = branch(lit("abc"), id::<0>());
//! let rule = list(item, Count::default).trailing_sep(capture(lit(",")));
//! ```

use crate::branch::Branch;
use crate::capture::Capture;
use crate::choice::Alt;
use crate::label::Label;
use crate::list::List;
use crate::matcher::{Char, Eof, Lit};
use crate::option::Opt;
use crate::sequence::Sequence;

/// Match `text` literally.
pub const fn lit(text: &'static str) -> Lit {
    Lit::new(text)
}

/// Match the single character `c`.
pub const fn ch(c: char) -> Char {
    Char::new(c)
}

/// Match the end of input.
pub const fn eof() -> Eof {
    Eof
}

/// `body`, guarded by `condition`.
pub const fn branch<C, B>(condition: C, body: B) -> Branch<C, B> {
    Branch::new(condition, body)
}

/// `first`, then `second`. See also [`seq!`](crate::seq).
pub const fn seq<A, B>(first: A, second: B) -> Sequence<A, B> {
    Sequence::new(first, second)
}

/// The span `inner` consumes.
pub const fn capture<R>(inner: R) -> Capture<R> {
    Capture::new(inner)
}

/// The zero-width label `Id<N>`.
pub const fn id<const N: u32>() -> Label<N> {
    Label::<N>
}

/// `first`, or `second` if `first` declines.
pub const fn alt<A, B>(first: A, second: B) -> Alt<A, B> {
    Alt::new(first, second)
}

/// One or more `item`s, accumulated by a sink from `factory`.
pub const fn list<I, F>(item: I, factory: F) -> List<I, F> {
    List::new(item, factory)
}

/// `inner` if it matches, nothing otherwise.
pub const fn opt<R>(inner: R) -> Opt<R> {
    Opt::new(inner)
}
