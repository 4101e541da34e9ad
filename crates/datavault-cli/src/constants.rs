//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (config, vault, record).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Wrong passphrase or corrupted record.
    pub const AUTH_FAILED: i32 = 5;
}

/// Environment variable holding the passphrase for non-interactive use.
pub const PASSPHRASE_ENV: &str = "DATAVAULT_PASSPHRASE";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "DATAVAULT_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "DATAVAULT_LOG";
