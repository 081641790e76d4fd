//! Stable exit codes for devflags CLI commands.

/// Command succeeded (including non-fatal unknown-flag diagnostics).
pub const OK: i32 = 0;
/// Config document could not be parsed into flag/boolean pairs.
pub const MALFORMED_CONFIG: i32 = 1;
/// Input config file could not be read.
pub const CONFIG_UNREADABLE: i32 = 2;
/// Output config file missing at write time, or the write failed.
pub const CONFIG_UNWRITABLE: i32 = 3;
/// `--all` combined with explicit flag names.
pub const CONFLICTING_MODIFIER: i32 = 4;
/// Unrecognized `list --format` value.
pub const UNSUPPORTED_FORMAT: i32 = 5;
/// The environment variable locating the site config is not set.
pub const ENVIRONMENT_MISSING: i32 = 6;
