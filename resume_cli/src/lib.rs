//! Resume CLI
//!
//! Command implementations behind the `resume-cli` binary. Each command
//! renders its JSON output to a `String` so it can be tested without a process.

pub mod commands;

/// Log filter used when `RUST_LOG` is unset. Logs go to stderr, so stdout
/// stays pure JSON at this level.
pub const DEFAULT_LOG_FILTER: &str = "info";
