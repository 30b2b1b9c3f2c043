use pretty_assertions::assert_eq;

use super::*;

fn text(report: TextResult<GrowableBuffer>) -> String {
    String::from_utf8(report.unwrap().into_vec()).unwrap()
}

// === lex ===

#[test]
fn lex_report() {
    let expected = concat!(
        "     0  identifier     \"x\"\n",
        "     2  equals         \"=\"  space\n",
        "     4  integer        \"1\"  space = 1\n",
        "     5  end of stream  \"\"\n",
    );
    assert_eq!(text(render_tokens(b"x = 1")), expected);
}

#[test]
fn lex_report_context_and_values() {
    let report = text(render_tokens(b"a\n\n-2.5 99999999999999999999"));
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].ends_with("\"-2.5\"  newline(2) = -2.5"), "{}", lines[1]);
    assert!(lines[2].ends_with("space  overflow"), "{}", lines[2]);
}

#[test]
fn lex_report_for_empty_input() {
    assert_eq!(
        text(render_tokens(b"")),
        "     0  end of stream  \"\"\n"
    );
}

// === lines ===

#[test]
fn lines_report() {
    assert_eq!(
        text(render_lines(b"a\nb")),
        "    1 | a\n    2 | b (no newline at end)\n"
    );
}

#[test]
fn lines_report_trailing_newline() {
    assert_eq!(text(render_lines(b"first\n\n")), "    1 | first\n    2 | \n");
}

#[test]
fn lines_report_for_empty_input() {
    assert!(render_lines(b"").unwrap().is_empty());
}

// === utf8 ===

#[test]
fn utf8_report() {
    let expected = concat!(
        "bytes:      8\n",
        "codepoints: 5\n",
        "multi-byte: 2\n",
        "controls:   1\n",
        "valid:      true\n",
    );
    assert_eq!(text(render_utf8_stats("aé€\u{1}\n".as_bytes())), expected);
}

#[test]
fn utf8_report_invalid_input() {
    let report = text(render_utf8_stats(b"\xff\xfe"));
    assert!(report.contains("bytes:      2\n"));
    assert!(report.contains("codepoints: 2\n"));
    assert!(report.ends_with("valid:      false\n"));
}

// === tracing ===

#[test]
fn init_tracing_is_idempotent() {
    crate::init_tracing();
    crate::init_tracing();
}
