#![deny(missing_docs)]
//! Shared logging utilities for the feedback form workspace.
//!
//! This crate provides the `feedback_*` logging macros used across the
//! codebase and a minimal test initializer for the global logger. Every macro
//! logs under the [`TARGET`] target so front-ends can filter component output
//! from their own.

/// Log target used by all `feedback_*` macros.
pub const TARGET: &str = "feedback_form";

/// Logs a trace-level message under the component target.
#[macro_export]
macro_rules! feedback_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message under the component target.
#[macro_export]
macro_rules! feedback_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an info-level message under the component target.
#[macro_export]
macro_rules! feedback_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message under the component target.
#[macro_export]
macro_rules! feedback_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an error-level message under the component target.
#[macro_export]
macro_rules! feedback_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized, so
/// every test may call it.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
