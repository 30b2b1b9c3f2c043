//! Command handlers for the `lstr` CLI.
//!
//! Each submodule implements one command as a pure renderer
//! (`render_*`, input bytes to report) plus a thin `*_file` wrapper that
//! reads the file, renders and prints. Shared I/O helpers live here.

mod lex;
mod lines;
mod utf8;

pub use lex::{lex_file, render_tokens};
pub use lines::{lines_file, render_lines};
pub use utf8::{render_utf8_stats, utf8_file};

use std::io::Write as _;

use lstr_core::{GrowableBuffer, MutableBuffer, TextResult};

/// Read a file from disk, exiting with a user-friendly error message on failure.
///
/// Returns raw bytes: the tokenizer accepts input that is not UTF-8.
pub(crate) fn read_file(path: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Write a rendered report to stdout, exiting on failure.
pub(crate) fn emit(report: TextResult<GrowableBuffer>) {
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error rendering report: {e}");
            std::process::exit(1);
        }
    };
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(report.as_bytes()).and_then(|()| stdout.flush()) {
        eprintln!("error writing output: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
