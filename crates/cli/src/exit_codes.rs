//! CLI exit code registry.
//!
//! Single source of truth for the `sheetlink` binary's exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! | Code | Meaning                                 |
//! |------|-----------------------------------------|
//! | 0    | Success                                 |
//! | 1    | General error (unspecified)             |
//! | 2    | Usage error (bad arguments)             |
//! | 3    | I/O error                               |
//! | 4    | Parse error (bad request/response JSON) |
//! | 10   | A hook reported failure                 |
//! | 50   | Missing HubSpot API key                 |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// I/O error reading a request or response file.
pub const EXIT_IO: u8 = 3;

/// Parse error - request or response JSON did not deserialize.
pub const EXIT_PARSE: u8 = 4;

/// A hook returned `success = false`. The failure envelope is still
/// printed on stdout; the code lets scripts branch on the outcome.
pub const EXIT_HOOK_FAILED: u8 = 10;

/// No HubSpot API key via flag, environment, or saved config.
pub const EXIT_NOT_AUTH: u8 = 50;
