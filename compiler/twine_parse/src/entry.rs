//! Top-level entry points.

use tracing::debug;
use twine_diagnostic::ParseError;
use twine_input::Cursor;

use crate::Rule;

/// A successful top-level parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parsed<'s, T> {
    /// Cursor after everything the rule consumed.
    pub end: Cursor<'s>,
    /// The value the rule produced.
    pub value: T,
}

/// Run `rule` from the start of `input`.
///
/// The rule need not consume the whole input. A decline that reaches this
/// point is reported as the refusal of the leaf that declined; a failure is
/// reported as is. Either way exactly one error comes back.
pub fn parse<'s, R: Rule<'s>>(rule: &R, input: &'s str) -> Result<Parsed<'s, R::Output>, ParseError> {
    match rule.try_match(Cursor::new(input)).into_result() {
        Ok((end, value)) => Ok(Parsed { end, value }),
        Err(error) => {
            debug!(error = %error, "parse failed");
            Err(error)
        }
    }
}
