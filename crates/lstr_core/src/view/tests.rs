use super::*;

// === Equality ===

#[test]
fn absent_views_are_equal() {
    let a = StrView::from_option(None);
    let b = StrView::from_option(None);
    assert!(a.equal_to_view(b));
    assert_eq!(a, b);
}

#[test]
fn absent_and_non_empty_are_unequal() {
    let absent = StrView::from_option(None);
    let full = StrView::from("x");
    assert!(!absent.equal_to_view(full));
    assert!(!full.equal_to_view(absent));
}

#[test]
fn empty_equals_absent() {
    assert_eq!(StrView::from(""), StrView::from_option(None));
    assert_eq!(StrView::EMPTY, StrView::default());
}

#[test]
fn length_mismatch_is_unequal() {
    let view = StrView::from("hello");
    assert!(!view.equal_to(b"hell"));
    assert!(!view.equal_to(b"hello!"));
}

#[test]
fn byte_mismatch_is_unequal() {
    let view = StrView::from("hello");
    assert!(!view.equal_to(b"hellO"));
    assert!(view.equal_to(b"hello"));
}

#[test]
fn compares_against_str_and_bytes() {
    let view = StrView::from("abc");
    assert!(view == "abc");
    assert!(view == b"abc".as_slice());
    assert!(view != "abd");
}

#[test]
fn checked_eq_rejects_absent_argument() {
    let view = StrView::from("abc");
    assert_eq!(view.checked_eq(None), Err(TextError::AbsentArgument));
    assert_eq!(view.checked_eq(Some(b"abc".as_slice())), Ok(true));
    assert_eq!(view.checked_eq(Some(b"ab".as_slice())), Ok(false));
}

#[test]
fn ascii_case_folding() {
    let view = StrView::from("Content-Type");
    assert!(view.eq_ignore_ascii_case(b"content-type"));
    assert!(view.eq_ignore_ascii_case(b"CONTENT-TYPE"));
    assert!(!view.eq_ignore_ascii_case(b"content_type"));
    // Non-ASCII bytes are compared verbatim.
    assert!(!StrView::from("É").eq_ignore_ascii_case("é".as_bytes()));
}

#[test]
fn lowercase_only_touches_ascii_letters() {
    assert_eq!(to_ascii_lowercase(b'A'), b'a');
    assert_eq!(to_ascii_lowercase(b'Z'), b'z');
    assert_eq!(to_ascii_lowercase(b'a'), b'a');
    assert_eq!(to_ascii_lowercase(b'@'), b'@');
    assert_eq!(to_ascii_lowercase(b'['), b'[');
    assert_eq!(to_ascii_lowercase(0xC9), 0xC9);
}

// === Prefix ===

#[test]
fn starts_with_prefix() {
    let view = StrView::from("foobar");
    assert!(view.starts_with(b"foo"));
    assert!(view.starts_with(b"foobar"));
    assert!(!view.starts_with(b"foobarbaz"));
    assert!(!view.starts_with(b"bar"));
}

#[test]
fn zero_length_prefix_matches_empty_view() {
    assert!(StrView::EMPTY.starts_with(b""));
    assert!(StrView::from("x").starts_with(b""));
    assert!(!StrView::EMPTY.starts_with(b"x"));
}

#[test]
fn starts_with_view_delegates() {
    let view = StrView::from("key=value");
    assert!(view.starts_with_view(StrView::from("key")));
    assert!(!view.starts_with_view(StrView::from("value")));
}

// === Indexing ===

#[test]
fn byte_at_in_bounds() {
    let view = StrView::from("xyz");
    assert_eq!(view.byte_at(0), Ok(b'x'));
    assert_eq!(view.byte_at(2), Ok(b'z'));
    assert_eq!(view[1], b'y');
}

#[test]
fn byte_at_out_of_bounds() {
    let view = StrView::from("xyz");
    assert_eq!(
        view.byte_at(3),
        Err(TextError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_out_of_bounds_panics() {
    let view = StrView::from("xyz");
    let byte = view[3];
    assert_eq!(byte, 0);
}

// === Searching & Slicing ===

#[test]
fn slice_shares_storage() {
    let source = "hello world";
    let view = StrView::from(source);
    let world = view.slice(6, 11);
    assert_eq!(world, "world");
    assert_eq!(world.as_bytes().as_ptr(), source[6..].as_ptr());
}

#[test]
fn find_byte_and_needle() {
    let view = StrView::from("a=b;c=d");
    assert_eq!(view.find_byte(b';'), Some(3));
    assert_eq!(view.find_byte(b'x'), None);
    assert_eq!(view.find(b"c=d"), Some(4));
    assert_eq!(view.find(b""), Some(0));
    assert_eq!(view.find(b"zz"), None);
}

// === UTF-8 & Display ===

#[test]
fn utf8_len_counts_codepoints() {
    let view = StrView::from("héllo €𝄞");
    assert_eq!(view.len(), 14);
    assert_eq!(view.utf8_len(), 8);
    assert_eq!(StrView::EMPTY.utf8_len(), 0);
}

#[test]
fn as_str_validates() {
    assert_eq!(StrView::from("ok").as_str(), Some("ok"));
    assert_eq!(StrView::new(&[0xFF, 0xFE]).as_str(), None);
}

#[test]
fn display_is_lossy() {
    assert_eq!(StrView::from("abc").to_string(), "abc");
    assert_eq!(StrView::new(&[b'a', 0xFF]).to_string(), "a\u{FFFD}");
    assert_eq!(format!("{:?}", StrView::from("a\"b")), "\"a\\\"b\"");
}

#[test]
fn control_bytes() {
    assert!(is_control(0x00));
    assert!(is_control(b'\n'));
    assert!(is_control(0x7F));
    assert!(is_control(0xA0));
    assert!(!is_control(b' '));
    assert!(!is_control(0xA1));
}
