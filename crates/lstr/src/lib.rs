//! Command-line driver for the `lstr` text toolkit.
//!
//! The binary is a thin dispatcher over [`commands`]; each command reads a
//! file, renders its report into a [`GrowableBuffer`](lstr_core::GrowableBuffer)
//! and writes it to stdout. The renderers are public so they can be tested
//! without touching the filesystem.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=lstr_lexer=trace` or `RUST_LOG=lstr_core=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
