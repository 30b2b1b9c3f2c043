//! `lex`: display the token stream.

use lstr_core::{append_fmt, GrowableBuffer, MutableBuffer, TextResult};
use lstr_lexer::{Cursor, Number, Token, TokenFlags};

use super::{emit, read_file};

/// Tokenize a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    emit(render_tokens(&content));
}

/// One line per token, `EndOfStream` included:
///
/// ```text
///    pos  kind           text  [context] = value
/// ```
pub fn render_tokens(input: &[u8]) -> TextResult<GrowableBuffer> {
    let mut out = GrowableBuffer::new();
    let mut cursor = Cursor::new(input);
    loop {
        let token = cursor.next_token();
        render_token(&mut out, &token)?;
        if token.is_end() {
            break;
        }
    }
    Ok(out)
}

fn render_token(out: &mut GrowableBuffer, token: &Token<'_>) -> TextResult<()> {
    append_fmt!(out, "{:>6}  {:<14} {:?}", token.pos, token.kind.name(), token.text)?;
    if token.has_space_before() {
        out.append_str("  space")?;
    }
    if token.has_newline_before() {
        append_fmt!(out, "  newline({})", token.newlines)?;
    }
    if token.flags.contains(TokenFlags::NUMBER_OVERFLOW) {
        out.append_str("  overflow")?;
    }
    match token.value {
        Some(Number::Integer(v)) => append_fmt!(out, " = {v}")?,
        Some(Number::Real(v)) => append_fmt!(out, " = {v:?}")?,
        None => {}
    }
    out.append_byte(b'\n')
}
