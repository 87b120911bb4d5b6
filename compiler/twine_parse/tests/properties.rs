//! Property-based tests for the list engine.
//!
//! Checks the universally quantified list guarantees for arbitrary item
//! counts, and that a declined match leaves nothing behind.

#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use twine_parse::dsl::{branch, capture, id, lit, list};
use twine_parse::{Aggregate, Count, Cursor, Rule};

fn end_and_count<'s, R>(rule: &R, input: &'s str) -> Option<(usize, usize)>
where
    R: Rule<'s, Output = Aggregate<usize>>,
{
    let outcome = rule.try_match(Cursor::new(input));
    let end = outcome.cursor()?.position().offset();
    outcome.ok().map(|aggregate| (end, aggregate.into_inner()))
}

proptest! {
    #[test]
    fn bare_list_consumes_every_item(n in 1usize..32) {
        let rule = list(capture(lit("abc")), Count::default);
        let input = "abc".repeat(n);
        prop_assert_eq!(end_and_count(&rule, &input), Some((3 * n, n)));
    }

    #[test]
    fn separated_list_consumes_joined_items(n in 1usize..32) {
        let rule = list(branch(lit("abc"), id::<0>()), Count::default).sep(lit(","));
        let input = vec!["abc"; n].join(",");
        prop_assert_eq!(end_and_count(&rule, &input), Some((4 * n - 1, n)));
    }

    #[test]
    fn unseparated_item_does_not_extend(n in 1usize..32) {
        let rule = list(branch(lit("abc"), id::<0>()), Count::default).sep(lit(","));
        let input = format!("{}abc", vec!["abc"; n].join(","));
        prop_assert_eq!(end_and_count(&rule, &input), Some((4 * n - 1, n)));
    }

    #[test]
    fn trailing_separator_keeps_count(n in 1usize..32) {
        let rule = list(branch(lit("abc"), id::<0>()), Count::default).trailing_sep(lit(","));
        let input = "abc,".repeat(n);
        prop_assert_eq!(end_and_count(&rule, &input), Some((4 * n, n)));
        prop_assert_eq!(end_and_count(&rule, input.trim_end_matches(',')), Some((4 * n - 1, n)));
    }

    #[test]
    fn dangling_separator_fails(n in 1usize..32) {
        let rule = list(branch(lit("abc"), id::<0>()), Count::default).sep(lit(","));
        let input = "abc,".repeat(n);
        prop_assert!(rule.try_match(Cursor::new(&input)).is_failed());
    }

    #[test]
    fn declined_match_is_repeatable(input in "[abc,x]{0,16}", skip in 0usize..16) {
        let rule = list(branch(lit("abc"), id::<0>()), Count::default).sep(lit(","));
        let cursor = Cursor::new(&input);
        let snapshot = cursor.snapshot();
        let first = rule.try_match(cursor);
        if first.is_unmatched() {
            // Move a copy away, then rewind it to the original snapshot.
            let mut moved = cursor;
            let skipped: String = input.chars().take(skip).collect();
            prop_assert!(moved.eat_str(&skipped));
            moved.restore(snapshot);
            prop_assert_eq!(moved, cursor);
            prop_assert_eq!(rule.try_match(moved), first);
        }
    }

    #[test]
    fn outcomes_are_deterministic(input in "[abc,]{0,24}") {
        let rule = list(branch(lit("abc"), id::<0>()), Count::default).trailing_sep(lit(","));
        let cursor = Cursor::new(&input);
        prop_assert_eq!(rule.try_match(cursor), rule.try_match(cursor));
    }
}
