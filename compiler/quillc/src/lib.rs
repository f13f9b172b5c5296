//! Quill compilation-unit driver.
//!
//! Turns a set of named expression trees into one target-language class,
//! one static method per expression:
//!
//! ```text
//! package com.example;
//!
//! public final class Checks {
//!     public static boolean isFive(Env env) {
//!         return env.getValue("x").eql(LongValue.create(5L));
//!     }
//! }
//! ```
//!
//! Methods are generated independently, optionally on the rayon pool. Each
//! worker renders into its own buffer and the buffers are joined in
//! declaration order, so parallel and sequential output are identical.

mod error;
mod options;
mod unit;

pub use error::CompileError;
pub use options::{parse_unit_options, UnitOptions};
pub use unit::{compile_unit, write_unit, CompileUnit, Function};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=quill_codegen=trace,quillc=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
