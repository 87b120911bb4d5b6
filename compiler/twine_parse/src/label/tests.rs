use super::*;
use pretty_assertions::assert_eq;

#[test]
fn label_consumes_nothing() {
    let cursor = Cursor::new("abc");
    let outcome = Label::<3>.try_match(cursor);
    assert_eq!(outcome, Outcome::matched(cursor, Id::<3>));
}

#[test]
fn label_matches_at_end_of_input() {
    assert!(Label::<0>.parse(Cursor::new("")).is_matched());
}
