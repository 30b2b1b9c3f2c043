//! `lines`: split a file into numbered lines.

use lstr_core::{append_fmt, GrowableBuffer, MutableBuffer, TextResult};
use lstr_lexer::Cursor;

use super::{emit, read_file};

pub fn lines_file(path: &str) {
    let content = read_file(path);
    emit(render_lines(&content));
}

/// `number | text` per line; a final line without a line feed is marked.
pub fn render_lines(input: &[u8]) -> TextResult<GrowableBuffer> {
    let mut out = GrowableBuffer::new();
    let mut cursor = Cursor::new(input);
    for (i, line) in cursor.lines().enumerate() {
        append_fmt!(out, "{:>5} | ", i + 1)?;
        out.append_view(line.text)?;
        if !line.newline {
            out.append_str(" (no newline at end)")?;
        }
        out.append_byte(b'\n')?;
    }
    Ok(out)
}
