//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (entry, store).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Entries shown by `list` when no window or limit is given.
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// Log filter override, e.g. `SLEEPLOG_LOG=sleeplog_core=debug`.
pub const LOG_ENV: &str = "SLEEPLOG_LOG";

/// Config file override.
pub const CONFIG_ENV: &str = "SLEEPLOG_CONFIG";
