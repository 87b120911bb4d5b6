//! End-to-end list behavior through the public entry points.
//!
//! Each test runs a complete grammar with [`parse`] or [`dispatch`] and
//! checks the end position, the sink aggregate, or the single reported
//! error.

use pretty_assertions::assert_eq;
use twine_parse::dsl::{alt, branch, capture, ch, id, lit, list, opt, seq};
use twine_parse::{
    dispatch, parse, Aggregate, Callback, Count, Fold, OnEmpty, OnValue, ParseError, Position,
    Value,
};

/// `(end offset, aggregate)` of a successful parse.
fn run<'s, R>(rule: &R, input: &'s str) -> Result<(usize, R::Output), ParseError>
where
    R: twine_parse::Rule<'s>,
{
    parse(rule, input).map(|parsed| (parsed.end.position().offset(), parsed.value))
}

/// Three per label, one per single-character lexeme.
fn weighted() -> Fold<i32, fn(&mut i32, Value<'_>)> {
    fn weigh(total: &mut i32, value: Value<'_>) {
        match value {
            Value::Marker(_) => *total += 3,
            Value::Lexeme(lexeme) => {
                assert_eq!(lexeme.len(), 1, "only separators are captured");
                *total += 1;
            }
        }
    }
    Fold::new(0, weigh as fn(&mut i32, Value<'_>))
}

fn literal_at(offset: usize, text: &'static str) -> ParseError {
    ParseError::expected_literal(Position::new(offset), text)
}

// -- Bare --

#[test]
fn bare_list_of_plain_items() {
    let rule = list(capture(lit("abc")), Count::default);

    assert_eq!(run(&rule, ""), Err(literal_at(0, "abc")));
    assert_eq!(run(&rule, "abcabcabc"), Ok((9, Aggregate(3))));
}

#[test]
fn bare_list_of_branch_items() {
    let rule = list(branch(lit("ab"), seq(ch('c'), id::<0>())), Count::default);

    assert_eq!(run(&rule, ""), Err(literal_at(0, "ab")));
    assert_eq!(run(&rule, "a"), Err(literal_at(0, "ab")));
    assert_eq!(
        run(&rule, "ab"),
        Err(ParseError::expected_char(Position::new(2), 'c'))
    );

    assert_eq!(run(&rule, "abc"), Ok((3, Aggregate(1))));
    assert_eq!(run(&rule, "abcabc"), Ok((6, Aggregate(2))));
    assert_eq!(run(&rule, "abcabcabc"), Ok((9, Aggregate(3))));

    assert_eq!(run(&rule, "abca"), Ok((3, Aggregate(1))));
    assert_eq!(
        run(&rule, "abcab"),
        Err(ParseError::expected_char(Position::new(5), 'c'))
    );
}

// -- Separated --

#[test]
fn separated_list_of_unconditional_items() {
    let rule = list(seq(id::<0>(), lit("abc")), Count::default).sep(lit(","));

    assert_eq!(run(&rule, ""), Err(literal_at(0, "abc")));
    assert_eq!(run(&rule, "abc"), Ok((3, Aggregate(1))));
    assert_eq!(run(&rule, "abc,abc"), Ok((7, Aggregate(2))));
    assert_eq!(run(&rule, "abc,abc,abc"), Ok((11, Aggregate(3))));

    assert_eq!(run(&rule, "abc,ab"), Err(literal_at(4, "abc")));
    assert_eq!(run(&rule, "abcabc"), Ok((3, Aggregate(1))));
}

#[test]
fn separated_list_of_plain_items() {
    let rule = list(capture(lit("abc")), Count::default).sep(lit(","));

    assert_eq!(run(&rule, "abc,abc,abc"), Ok((11, Aggregate(3))));
    assert_eq!(run(&rule, "abc,ab"), Err(literal_at(4, "abc")));
}

#[test]
fn captured_separators_reach_the_sink() {
    let rule = list(seq(id::<0>(), lit("abc")), weighted).sep(capture(lit(",")));

    assert_eq!(run(&rule, "abc"), Ok((3, Aggregate(3))));
    assert_eq!(run(&rule, "abc,abc"), Ok((7, Aggregate(7))));
    assert_eq!(run(&rule, "abc,abc,abc"), Ok((11, Aggregate(11))));
    assert_eq!(run(&rule, "abcabc"), Ok((3, Aggregate(3))));
}

// -- Trailing --

#[test]
fn trailing_separator_list() {
    let rule = list(branch(lit("abc"), id::<0>()), Count::default).trailing_sep(lit(","));

    assert_eq!(run(&rule, ""), Err(literal_at(0, "abc")));
    assert_eq!(run(&rule, "abc"), Ok((3, Aggregate(1))));
    assert_eq!(run(&rule, "abc,"), Ok((4, Aggregate(1))));
    assert_eq!(run(&rule, "abc,abc"), Ok((7, Aggregate(2))));
    assert_eq!(run(&rule, "abc,abc,"), Ok((8, Aggregate(2))));
    assert_eq!(run(&rule, "abcabc"), Ok((3, Aggregate(1))));
}

#[test]
fn trailing_separator_is_captured() {
    let rule = list(branch(lit("abc"), id::<0>()), weighted).trailing_sep(capture(lit(",")));

    assert_eq!(run(&rule, "abc,"), Ok((4, Aggregate(4))));
    assert_eq!(run(&rule, "abc,abc,"), Ok((8, Aggregate(8))));
}

#[test]
fn trailing_separator_item_still_commits() {
    let rule = list(branch(lit("ab"), ch('c')), Count::default).trailing_sep(lit(","));

    assert_eq!(
        run(&rule, "abc,ab"),
        Err(ParseError::expected_char(Position::new(6), 'c'))
    );
}

// -- Optional --

/// Mirrors a caller that treats "no list" as zero.
struct Tally;

impl Callback for Tally {
    type Return = Result<(usize, usize), ParseError>;

    fn on_error(&mut self, error: ParseError) -> Self::Return {
        Err(error)
    }
}

impl OnEmpty for Tally {
    fn on_empty(&mut self, end: Position) -> Self::Return {
        Ok((end.offset(), 0))
    }
}

impl OnValue<usize> for Tally {
    fn on_value(&mut self, end: Position, count: usize) -> Self::Return {
        Ok((end.offset(), count))
    }
}

#[test]
fn optional_list() {
    let rule = opt(list(branch(lit("abc"), id::<0>()), Count::default));

    assert_eq!(dispatch(&rule, "", &mut Tally), Ok((0, 0)));
    assert_eq!(dispatch(&rule, "ab", &mut Tally), Ok((0, 0)));
    assert_eq!(dispatch(&rule, "abc", &mut Tally), Ok((3, 1)));
    assert_eq!(dispatch(&rule, "abcabc", &mut Tally), Ok((6, 2)));
    assert_eq!(dispatch(&rule, "abcabcabc", &mut Tally), Ok((9, 3)));
}

#[test]
fn optional_separated_list() {
    let rule = opt(list(branch(lit("abc"), id::<0>()), Count::default).sep(lit(",")));

    assert_eq!(dispatch(&rule, "", &mut Tally), Ok((0, 0)));
    assert_eq!(dispatch(&rule, "ab", &mut Tally), Ok((0, 0)));
    assert_eq!(dispatch(&rule, "abc,abc,abc", &mut Tally), Ok((11, 3)));
    assert_eq!(dispatch(&rule, "abcabc", &mut Tally), Ok((3, 1)));
    assert_eq!(dispatch(&rule, "abc,", &mut Tally), Err(literal_at(4, "abc")));
}

#[test]
fn optional_trailing_list() {
    let rule = opt(list(branch(lit("abc"), id::<0>()), Count::default).trailing_sep(lit(",")));

    assert_eq!(dispatch(&rule, "", &mut Tally), Ok((0, 0)));
    assert_eq!(dispatch(&rule, "abc,", &mut Tally), Ok((4, 1)));
    assert_eq!(dispatch(&rule, "abc,abc,", &mut Tally), Ok((8, 2)));
}

#[test]
fn or_empty_always_finishes_a_sink() {
    let rule = list(branch(lit("abc"), id::<0>()), Count::default)
        .sep(lit(","))
        .or_empty();

    assert_eq!(run(&rule, ""), Ok((0, Aggregate(0))));
    assert_eq!(run(&rule, "ab"), Ok((0, Aggregate(0))));
    assert_eq!(run(&rule, "abc,abc"), Ok((7, Aggregate(2))));
    assert_eq!(dispatch(&rule, "", &mut Tally), Ok((0, 0)));
}

#[test]
fn optional_list_still_reports_failures() {
    let rule = opt(list(branch(lit("ab"), ch('c')), Count::default));
    assert_eq!(
        run(&rule, "abcab").map(|(end, _)| end),
        Err(ParseError::expected_char(Position::new(5), 'c'))
    );
}

// -- Choice items --

#[test]
fn list_of_choices_reports_one_refusal() {
    let rule = list(
        alt(branch(lit("abc"), id::<0>()), branch(lit("x"), id::<0>())),
        Count::default,
    );

    assert_eq!(run(&rule, "abcxabc"), Ok((7, Aggregate(3))));
    assert_eq!(run(&rule, "xq"), Ok((1, Aggregate(1))));
    let error = run(&rule, "").map(|(end, _)| end);
    assert_eq!(error, Err(literal_at(0, "abc")));
    assert_eq!(
        error.map_err(|e| e.to_string()),
        Err("[E1001] expected abc at offset 0".to_owned())
    );
}
