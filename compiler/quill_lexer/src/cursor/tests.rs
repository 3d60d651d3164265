use super::*;

fn cursor(input: &[u8], capacity: usize) -> Cursor<&[u8]> {
    Cursor::new(input, capacity).expect("in-memory cursor construction cannot fail")
}

// === Basic navigation ===

#[test]
fn current_returns_first_byte() {
    let c = cursor(b"abc", 4);
    assert_eq!(c.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let mut c = cursor(b"abc", 4);
    c.advance().expect("advance");
    assert_eq!(c.current(), b'b');
}

#[test]
fn bump_returns_the_consumed_byte() {
    let mut c = cursor(b"ab", 4);
    assert_eq!(c.bump().expect("bump"), b'a');
    assert_eq!(c.current(), b'b');
}

#[test]
fn starts_at_line_one_column_one() {
    let c = cursor(b"x", 4);
    assert_eq!((c.line(), c.column()), (1, 1));
}

// === Line/column accounting ===

#[test]
fn column_advances_per_byte() {
    let mut c = cursor(b"abc", 4);
    c.advance().expect("advance");
    c.advance().expect("advance");
    assert_eq!((c.line(), c.column()), (1, 3));
}

#[test]
fn newline_bumps_line_and_resets_column() {
    let mut c = cursor(b"a\nbb", 4);
    c.advance().expect("consume 'a'");
    assert_eq!((c.line(), c.column()), (1, 2));
    c.advance().expect("consume newline");
    assert_eq!((c.line(), c.column()), (2, 1));
    c.advance().expect("consume 'b'");
    assert_eq!((c.line(), c.column()), (2, 2));
}

#[test]
fn line_tracking_spans_block_boundaries() {
    // capacity 2 puts the newline on a block boundary.
    let mut c = cursor(b"ab\ncd", 2);
    for _ in 0..3 {
        c.advance().expect("advance");
    }
    assert_eq!((c.line(), c.column()), (2, 1));
    assert_eq!(c.current(), b'c');
}

#[test]
fn consecutive_newlines_each_count() {
    let mut c = cursor(b"\n\n\nx", 1);
    for _ in 0..3 {
        c.advance().expect("advance");
    }
    assert_eq!((c.line(), c.column()), (4, 1));
    assert_eq!(c.current(), b'x');
}

// === End of stream ===

#[test]
fn position_is_stable_after_the_end() {
    let mut c = cursor(b"a\nb", 4);
    for _ in 0..3 {
        c.advance().expect("advance");
    }
    assert!(c.at_end());
    let frozen = (c.line(), c.column());
    for _ in 0..4 {
        c.advance().expect("advance past end");
        assert!(c.at_end());
        assert_eq!((c.line(), c.column()), frozen);
    }
}

#[test]
fn peek_spans_boundary_through_cursor() {
    let mut c = cursor(b"abcd", 2);
    c.advance().expect("advance");
    assert_eq!(c.current(), b'b');
    assert_eq!(c.peek(), b'c');
}
