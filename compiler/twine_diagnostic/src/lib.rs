//! Error values for the twine rule engine.
//!
//! The engine never interprets an error beyond carrying it outward: every
//! failed parse produces exactly one [`ParseError`] naming
//!
//! - what kind of match failed ([`ErrorKind`], with a stable code),
//! - where it failed ([`Position`](twine_input::Position)),
//! - what was expected there ([`Expected`]).
//!
//! Errors built from literal and character matchers never allocate, so a
//! branch condition that refuses to match is as cheap as a comparison.

mod error_kind;
mod expected;
mod parse_error;

pub use error_kind::ErrorKind;
pub use expected::Expected;
pub use parse_error::ParseError;
