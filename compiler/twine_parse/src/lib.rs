//! Execution core of the twine parser-combinator engine.
//!
//! Grammars are static trees of rule types built with the functions in
//! [`dsl`]. Running a rule yields a three-way [`Outcome`]:
//!
//! - `Matched`: the rule succeeded; carries the advanced cursor and value.
//! - `Unmatched`: a branch condition declined without consuming input.
//! - `Failed`: a condition matched, then something mandatory did not.
//!
//! Lists ([`List`]) build on that split: a declined item ends the loop
//! cleanly, a failed one aborts it. Produced values stream into a
//! per-activation [`Sink`].
//!
//! Entry points are [`parse`], which returns a `Result`, and [`dispatch`],
//! which routes the result to a handler by value shape.

mod branch;
mod capture;
mod choice;
mod dispatch;
pub mod dsl;
mod entry;
mod label;
mod list;
mod matcher;
mod option;
mod outcome;
mod rule;
mod sequence;
mod sink;
pub mod value;

use std::sync::Once;

pub use branch::Branch;
pub use capture::Capture;
pub use choice::Alt;
pub use dispatch::{dispatch, Callback, Deliver, OnEmpty, OnValue};
pub use entry::{parse, Parsed};
pub use label::Label;
pub use list::{Bare, List, Sep, Separation, TrailingSep};
pub use matcher::{Char, Eof, Lit};
pub use option::{Opt, OrEmpty};
pub use outcome::Outcome;
pub use rule::{BranchRule, Matcher, Rule};
pub use sequence::Sequence;
pub use sink::{Collect, Count, Fold, Sink, SinkFactory};
pub use value::{Aggregate, Id, Marker, Pair, Value};

pub use twine_diagnostic::{ErrorKind, Expected, ParseError};
pub use twine_input::{Cursor, Lexeme, Position};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once;
/// only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
