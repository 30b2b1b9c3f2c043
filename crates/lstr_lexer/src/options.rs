//! Tokenizer configuration.

/// Settings for a [`Cursor`](crate::Cursor).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Count the newlines skipped before each token into
    /// [`Token::newlines`](crate::Token::newlines).
    ///
    /// When off, the `NEWLINE_BEFORE` flag is still set but the count stays 0.
    pub count_newlines: bool,
}

impl ScanOptions {
    pub const fn new() -> Self {
        ScanOptions {
            count_newlines: true,
        }
    }

    #[must_use]
    pub const fn with_count_newlines(mut self, count_newlines: bool) -> Self {
        self.count_newlines = count_newlines;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new()
    }
}
