//! Token kinds.

use std::fmt;

/// Classification of a scanned token.
///
/// Closed set: the single-byte punctuation kinds, the four literal kinds,
/// and the `Unknown`/`EndOfLine`/`EndOfStream` markers. The discriminant
/// order is stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// A byte no other rule claims. Text is exactly that one byte.
    Unknown,

    // === Punctuation ===
    OpenParen,
    CloseParen,
    Colon,
    Semicolon,
    Asterisk,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    LessThan,
    GreaterThan,
    Equals,
    Minus,
    Plus,
    Dot,
    Comma,
    ForwardSlash,
    BackSlash,
    Percent,
    Pound,
    Tilde,
    Circumflex,
    Ampersand,
    Dollar,
    Pipe,
    Exclamation,
    At,
    Underscore,

    // === Literals ===
    /// `"..."`. Text excludes the quotes; no escape processing.
    String,
    /// ASCII letter followed by letters, digits, `_` or `-`.
    Identifier,
    Integer,
    Real,

    // === Markers ===
    /// Reserved for line-oriented consumers; the tokenizer itself treats
    /// newlines as whitespace.
    EndOfLine,
    EndOfStream,
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 35] = [
        TokenKind::Unknown,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Asterisk,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::OpenBrace,
        TokenKind::CloseBrace,
        TokenKind::LessThan,
        TokenKind::GreaterThan,
        TokenKind::Equals,
        TokenKind::Minus,
        TokenKind::Plus,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::ForwardSlash,
        TokenKind::BackSlash,
        TokenKind::Percent,
        TokenKind::Pound,
        TokenKind::Tilde,
        TokenKind::Circumflex,
        TokenKind::Ampersand,
        TokenKind::Dollar,
        TokenKind::Pipe,
        TokenKind::Exclamation,
        TokenKind::At,
        TokenKind::Underscore,
        TokenKind::String,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Real,
        TokenKind::EndOfLine,
        TokenKind::EndOfStream,
    ];

    /// The single-byte kind `byte` maps to, if any.
    ///
    /// `-` and `.` map to [`Minus`](Self::Minus) and [`Dot`](Self::Dot)
    /// here; the tokenizer decides separately whether they start a number.
    #[inline]
    pub const fn from_punct(byte: u8) -> Option<TokenKind> {
        Some(match byte {
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semicolon,
            b'*' => TokenKind::Asterisk,
            b'[' => TokenKind::OpenBracket,
            b']' => TokenKind::CloseBracket,
            b'{' => TokenKind::OpenBrace,
            b'}' => TokenKind::CloseBrace,
            b'<' => TokenKind::LessThan,
            b'>' => TokenKind::GreaterThan,
            b'=' => TokenKind::Equals,
            b'-' => TokenKind::Minus,
            b'+' => TokenKind::Plus,
            b'.' => TokenKind::Dot,
            b',' => TokenKind::Comma,
            b'/' => TokenKind::ForwardSlash,
            b'\\' => TokenKind::BackSlash,
            b'%' => TokenKind::Percent,
            b'#' => TokenKind::Pound,
            b'~' => TokenKind::Tilde,
            b'^' => TokenKind::Circumflex,
            b'&' => TokenKind::Ampersand,
            b'$' => TokenKind::Dollar,
            b'|' => TokenKind::Pipe,
            b'!' => TokenKind::Exclamation,
            b'@' => TokenKind::At,
            b'_' => TokenKind::Underscore,
            _ => return None,
        })
    }

    /// The fixed source byte of a punctuation kind.
    pub const fn lexeme(self) -> Option<u8> {
        Some(match self {
            TokenKind::OpenParen => b'(',
            TokenKind::CloseParen => b')',
            TokenKind::Colon => b':',
            TokenKind::Semicolon => b';',
            TokenKind::Asterisk => b'*',
            TokenKind::OpenBracket => b'[',
            TokenKind::CloseBracket => b']',
            TokenKind::OpenBrace => b'{',
            TokenKind::CloseBrace => b'}',
            TokenKind::LessThan => b'<',
            TokenKind::GreaterThan => b'>',
            TokenKind::Equals => b'=',
            TokenKind::Minus => b'-',
            TokenKind::Plus => b'+',
            TokenKind::Dot => b'.',
            TokenKind::Comma => b',',
            TokenKind::ForwardSlash => b'/',
            TokenKind::BackSlash => b'\\',
            TokenKind::Percent => b'%',
            TokenKind::Pound => b'#',
            TokenKind::Tilde => b'~',
            TokenKind::Circumflex => b'^',
            TokenKind::Ampersand => b'&',
            TokenKind::Dollar => b'$',
            TokenKind::Pipe => b'|',
            TokenKind::Exclamation => b'!',
            TokenKind::At => b'@',
            TokenKind::Underscore => b'_',
            TokenKind::Unknown
            | TokenKind::String
            | TokenKind::Identifier
            | TokenKind::Integer
            | TokenKind::Real
            | TokenKind::EndOfLine
            | TokenKind::EndOfStream => return None,
        })
    }

    /// Returns `true` for [`Integer`](Self::Integer) and [`Real`](Self::Real).
    #[inline]
    pub const fn is_number(self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Real)
    }

    /// Returns `true` for the single-byte punctuation kinds.
    #[inline]
    pub const fn is_punct(self) -> bool {
        self.lexeme().is_some()
    }

    /// Human-readable name, for diagnostics and the CLI.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Unknown => "unknown",
            TokenKind::OpenParen => "open paren",
            TokenKind::CloseParen => "close paren",
            TokenKind::Colon => "colon",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Asterisk => "asterisk",
            TokenKind::OpenBracket => "open bracket",
            TokenKind::CloseBracket => "close bracket",
            TokenKind::OpenBrace => "open brace",
            TokenKind::CloseBrace => "close brace",
            TokenKind::LessThan => "less than",
            TokenKind::GreaterThan => "greater than",
            TokenKind::Equals => "equals",
            TokenKind::Minus => "minus",
            TokenKind::Plus => "plus",
            TokenKind::Dot => "dot",
            TokenKind::Comma => "comma",
            TokenKind::ForwardSlash => "forward slash",
            TokenKind::BackSlash => "backslash",
            TokenKind::Percent => "percent",
            TokenKind::Pound => "pound",
            TokenKind::Tilde => "tilde",
            TokenKind::Circumflex => "circumflex",
            TokenKind::Ampersand => "ampersand",
            TokenKind::Dollar => "dollar",
            TokenKind::Pipe => "pipe",
            TokenKind::Exclamation => "exclamation",
            TokenKind::At => "at",
            TokenKind::Underscore => "underscore",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Real => "real",
            TokenKind::EndOfLine => "end of line",
            TokenKind::EndOfStream => "end of stream",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punct_round_trips_through_lexeme() {
        for kind in TokenKind::ALL {
            if let Some(byte) = kind.lexeme() {
                assert_eq!(TokenKind::from_punct(byte), Some(kind), "{kind:?}");
            }
        }
    }

    #[test]
    fn punct_set_is_exactly_twenty_eight() {
        let count = TokenKind::ALL.iter().filter(|k| k.is_punct()).count();
        assert_eq!(count, 28);
    }

    #[test]
    fn all_is_in_discriminant_order() {
        for (i, kind) in TokenKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }

    #[test]
    fn non_punct_bytes() {
        for byte in [b'a', b'0', b'"', b' ', b'\n', 0, b'?', b'\'', b'`'] {
            assert_eq!(TokenKind::from_punct(byte), None, "{byte:#04x}");
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(TokenKind::EndOfStream.to_string(), "end of stream");
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    }
}
