//! `utf8`: byte and codepoint statistics.

use lstr_core::view::is_control;
use lstr_core::{append_fmt, utf8, GrowableBuffer, StrView, TextResult};

use super::{emit, read_file};

pub fn utf8_file(path: &str) {
    let content = read_file(path);
    emit(render_utf8_stats(&content));
}

/// Byte size, codepoint count, multi-byte codepoints and control
/// codepoints other than tab and line breaks.
pub fn render_utf8_stats(input: &[u8]) -> TextResult<GrowableBuffer> {
    let view = StrView::new(input);
    let mut multibyte = 0usize;
    let mut controls = 0usize;
    let mut rest = input;
    while !rest.is_empty() {
        let (codepoint, len) = utf8::decode_forward(rest);
        if len > 1 {
            multibyte += 1;
        }
        if u8::try_from(codepoint).is_ok_and(|b| is_control(b) && !b"\t\n\r".contains(&b)) {
            controls += 1;
        }
        rest = &rest[len..];
    }

    let mut out = GrowableBuffer::new();
    append_fmt!(out, "bytes:      {}\n", view.len())?;
    append_fmt!(out, "codepoints: {}\n", view.utf8_len())?;
    append_fmt!(out, "multi-byte: {multibyte}\n")?;
    append_fmt!(out, "controls:   {controls}\n")?;
    append_fmt!(out, "valid:      {}\n", view.as_str().is_some())?;
    Ok(out)
}
