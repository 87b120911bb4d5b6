//! Three-way match outcome.
//!
//! | Variant | Input consumed | Recoverable | Meaning |
//! |---------|----------------|-------------|---------|
//! | `Matched` | any | n/a | The rule succeeded; the cursor is authoritative |
//! | `Unmatched` | never | yes | The rule's condition did not match; try something else |
//! | `Failed` | possibly | no | A committed rule could not complete; abort the parse |
//!
//! The split between `Unmatched` and `Failed` is what lets a list stop
//! cleanly when its next item is absent, but report an error when an item
//! started and then broke. Once a branch condition matches, every later
//! failure is `Failed`; nothing upstream may treat it as "not there".
//!
//! `Unmatched` still carries the refusal of the leaf matcher that declined.
//! It is never shown to users as long as some ancestor recovers it; if it
//! reaches the top-level entry point, that refusal becomes the reported
//! error.

use twine_diagnostic::ParseError;
use twine_input::Cursor;

/// Result of attempting a rule at a cursor.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<'s, T> {
    /// The rule matched.
    Matched {
        /// Cursor after everything the rule consumed.
        cursor: Cursor<'s>,
        /// The value the rule produced.
        value: T,
    },

    /// The rule's condition did not match. No input was consumed.
    Unmatched {
        /// The leaf refusal, reported only if nothing recovers.
        refused: ParseError,
    },

    /// The rule committed and then failed. Unrecoverable.
    Failed {
        /// The error to report.
        error: ParseError,
    },
}

impl<'s, T> Outcome<'s, T> {
    // === Constructors ===

    /// Create a successful outcome.
    #[inline]
    pub fn matched(cursor: Cursor<'s>, value: T) -> Self {
        Self::Matched { cursor, value }
    }

    /// Create a recoverable non-match.
    #[inline]
    pub fn unmatched(refused: ParseError) -> Self {
        Self::Unmatched { refused }
    }

    /// Create a hard failure.
    #[cold]
    pub fn failed(error: ParseError) -> Self {
        Self::Failed { error }
    }

    // === Predicates ===

    /// Returns `true` if the rule matched.
    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Returns `true` if the condition declined without consuming input.
    #[inline]
    pub fn is_unmatched(&self) -> bool {
        matches!(self, Self::Unmatched { .. })
    }

    /// Returns `true` if a committed rule failed.
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    // === Accessors ===

    /// The cursor after a match.
    pub fn cursor(&self) -> Option<Cursor<'s>> {
        match self {
            Self::Matched { cursor, .. } => Some(*cursor),
            Self::Unmatched { .. } | Self::Failed { .. } => None,
        }
    }

    /// The error this outcome would report: the refusal of an `Unmatched`,
    /// or the error of a `Failed`.
    pub fn error(&self) -> Option<&ParseError> {
        match self {
            Self::Matched { .. } => None,
            Self::Unmatched { refused } => Some(refused),
            Self::Failed { error } => Some(error),
        }
    }

    // === Transformations ===

    /// Map the produced value, preserving the variant.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<'s, U> {
        match self {
            Self::Matched { cursor, value } => Outcome::Matched {
                cursor,
                value: f(value),
            },
            Self::Unmatched { refused } => Outcome::Unmatched { refused },
            Self::Failed { error } => Outcome::Failed { error },
        }
    }

    /// Continue after a match with a rule starting at the matched cursor.
    ///
    /// `Unmatched` and `Failed` pass through untouched. The continuation's
    /// own outcome is returned as is, so callers that have committed should
    /// [`commit()`](Self::commit) it.
    pub fn and_then<U, F>(self, f: F) -> Outcome<'s, U>
    where
        F: FnOnce(Cursor<'s>, T) -> Outcome<'s, U>,
    {
        match self {
            Self::Matched { cursor, value } => f(cursor, value),
            Self::Unmatched { refused } => Outcome::Unmatched { refused },
            Self::Failed { error } => Outcome::Failed { error },
        }
    }

    /// Try an alternative if this outcome is `Unmatched`.
    ///
    /// A `Failed` outcome is never retried: the condition already committed.
    #[must_use]
    pub fn or_else<F: FnOnce(ParseError) -> Self>(self, f: F) -> Self {
        match self {
            Self::Unmatched { refused } => f(refused),
            other => other,
        }
    }

    /// Promote `Unmatched` to `Failed`.
    ///
    /// Used wherever a rule is mandatory: the body of a branch whose
    /// condition matched, the item after a separator, the top-level rule.
    #[must_use]
    pub fn commit(self) -> Self {
        match self {
            Self::Unmatched { refused } => Self::Failed { error: refused },
            other => other,
        }
    }

    /// Convert to `Result`, reporting the refusal of an unhandled `Unmatched`.
    pub fn into_result(self) -> Result<(Cursor<'s>, T), ParseError> {
        match self {
            Self::Matched { cursor, value } => Ok((cursor, value)),
            Self::Unmatched { refused } => Err(refused),
            Self::Failed { error } => Err(error),
        }
    }

    /// The produced value, discarding the cursor and any error.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Matched { value, .. } => Some(value),
            Self::Unmatched { .. } | Self::Failed { .. } => None,
        }
    }
}

impl<'s, T> From<Outcome<'s, T>> for Result<(Cursor<'s>, T), ParseError> {
    fn from(outcome: Outcome<'s, T>) -> Self {
        outcome.into_result()
    }
}
