use pretty_assertions::assert_eq;

use super::*;

fn line_texts(src: &str) -> Vec<(String, bool)> {
    Cursor::new(src)
        .lines()
        .map(|line| (line.text.to_string(), line.newline))
        .collect()
}

// === Lines ===

#[test]
fn get_line_partitions_input() {
    let mut cursor = Cursor::new("a\nb\nc");
    let mut lines = Vec::new();
    while let Some(line) = cursor.get_line() {
        lines.push(line.text.to_string());
    }
    assert_eq!(lines, vec!["a", "b", "c"]);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.get_line(), None);
}

#[test]
fn get_line_reports_missing_newline() {
    assert_eq!(
        line_texts("a\nb"),
        vec![("a".to_owned(), true), ("b".to_owned(), false)]
    );
}

#[test]
fn trailing_newline_ends_input() {
    assert_eq!(line_texts("a\n"), vec![("a".to_owned(), true)]);
}

#[test]
fn empty_lines_are_kept() {
    assert_eq!(
        line_texts("\n\nx"),
        vec![
            (String::new(), true),
            (String::new(), true),
            ("x".to_owned(), false),
        ]
    );
}

#[test]
fn carriage_return_stays_in_line() {
    assert_eq!(line_texts("a\r\n"), vec![("a\r".to_owned(), true)]);
}

#[test]
fn no_lines_in_empty_input() {
    assert!(line_texts("").is_empty());
}

// === Trim ===

#[test]
fn trim_left_reports_kinds() {
    let mut cursor = Cursor::new(" \t\n x");
    assert_eq!(cursor.trim_left(), Whitespace::NEW_WORD | Whitespace::NEW_LINE);
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.trim_left(), Whitespace::empty());
}

#[test]
fn trim_left_newline_only() {
    let mut cursor = Cursor::new("\n\nx");
    assert_eq!(cursor.trim_left(), Whitespace::NEW_LINE);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn trim_right_shrinks_input() {
    let mut cursor = Cursor::new("value \r\n\t");
    assert_eq!(cursor.trim_right(), Whitespace::NEW_WORD | Whitespace::NEW_LINE);
    assert_eq!(cursor.input(), "value");
    assert_eq!(cursor.rest(), "value");
}

#[test]
fn trim_right_keeps_consumed_bytes() {
    let mut cursor = Cursor::new("ab   ");
    cursor.advance(2);
    cursor.trim_right();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.input(), "ab");

    let mut cursor = Cursor::new("a  ");
    cursor.advance(3);
    assert_eq!(cursor.trim_right(), Whitespace::empty());
    assert_eq!(cursor.input(), "a  ");
}

// === Character Search ===

#[test]
fn ff_to_char_stops_on_byte() {
    let mut cursor = Cursor::new("key=value");
    assert!(cursor.ff_to_char(b'='));
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.ff_to_char(b'='));
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn ff_to_char_miss_goes_to_end() {
    let mut cursor = Cursor::new("key");
    assert!(!cursor.ff_to_char(b'='));
    assert!(cursor.is_at_end());
}

#[test]
fn ff_to_after_char() {
    let mut cursor = Cursor::new("a,b,");
    assert!(cursor.ff_to_after_char(b','));
    assert_eq!(cursor.rest(), "b,");
    assert!(cursor.ff_to_after_char(b','));
    assert!(cursor.is_at_end());
    assert!(!cursor.ff_to_after_char(b','));
}

// === String Search ===

#[test]
fn ff_to_string_counts_skipped_bytes() {
    let mut cursor = Cursor::new("abc-->def");
    assert_eq!(cursor.ff_to_string(b"-->"), Some(3));
    assert!(cursor.starts_with(b"-->"));
    assert_eq!(cursor.ff_to_string(b"-->"), Some(0));
}

#[test]
fn ff_to_string_miss_goes_to_end() {
    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.ff_to_string(b"abcd"), None);
    assert!(cursor.is_at_end());
}

#[test]
fn ff_to_string_empty_needle() {
    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.ff_to_string(b""), Some(0));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn ff_to_string_end_includes_needle() {
    let mut cursor = Cursor::new("/* note */ x");
    assert_eq!(cursor.ff_to_string_end(b"*/"), Some(10));
    assert_eq!(cursor.rest(), " x");
    assert_eq!(cursor.ff_to_string_end(b"*/"), None);
    assert!(cursor.is_at_end());
}

// === Token Search ===

#[test]
fn ff_to_token_leaves_token_unread() {
    let mut cursor = Cursor::new("a b ; c");
    assert!(cursor.ff_to_token(TokenKind::Semicolon));
    assert_eq!(cursor.next_token().kind, TokenKind::Semicolon);
    assert_eq!(cursor.next_token().text, "c");
}

#[test]
fn ff_to_token_miss() {
    let mut cursor = Cursor::new("a b  ");
    assert!(!cursor.ff_to_token(TokenKind::Semicolon));
    assert!(cursor.is_at_end());
}

#[test]
fn ff_to_token_end_consumes_match() {
    let mut cursor = Cursor::new("{ a { b } } tail");
    cursor.next_token();
    let close = cursor.ff_to_token_end(TokenKind::CloseBrace).unwrap();
    assert_eq!(close.pos, 8);
    assert_eq!(cursor.next_token().kind, TokenKind::CloseBrace);
    assert_eq!(cursor.ff_to_token_end(TokenKind::Semicolon), None);
    assert!(cursor.is_at_end());
}

// === UTF-8 ===

#[test]
fn skip_utf8_chars_counts_codepoints() {
    let mut cursor = Cursor::new("é€x");
    assert_eq!(cursor.skip_utf8_chars(2), 2);
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.skip_utf8_chars(5), 1);
    assert!(cursor.is_at_end());
}
