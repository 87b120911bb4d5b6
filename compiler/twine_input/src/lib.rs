//! Input primitives for the twine rule engine.
//!
//! Everything a rule needs to know about the text it runs over:
//!
//! - [`Position`]: an opaque, totally ordered byte offset.
//! - [`Cursor`]: a `Copy` position marker bound to one input, with
//!   `snapshot()` / `restore()` for backtracking.
//! - [`Lexeme`]: a non-owning view of a span of already-matched input.
//!
//! The crate has no dependencies on the rest of the workspace, so tools that
//! only need spans and cursors can depend on it without pulling in the engine.

mod cursor;
mod lexeme;
mod position;

pub use cursor::Cursor;
pub use lexeme::Lexeme;
pub use position::Position;
