use super::*;

#[test]
fn start_is_zero() {
    assert_eq!(Position::START.offset(), 0);
    assert_eq!(Position::default(), Position::START);
}

#[test]
fn positions_are_ordered_by_offset() {
    let a = Position::new(3);
    let b = Position::new(7);
    assert!(a < b);
    assert_eq!(a.max(b), b);
}

#[test]
fn distance_counts_bytes_forward() {
    let a = Position::new(3);
    let b = Position::new(7);
    assert_eq!(a.distance_to(b), 4);
    assert_eq!(a.distance_to(a), 0);
}

#[test]
fn distance_saturates_backwards() {
    let a = Position::new(3);
    let b = Position::new(7);
    assert_eq!(b.distance_to(a), 0);
}

#[test]
fn display_is_offset() {
    assert_eq!(Position::new(42).to_string(), "42");
}
