//! Stable exit codes for the `pkl-diag` binary.

/// Command succeeded; for `status`, diagnostics are enabled.
pub const OK: i32 = 0;
/// Invalid arguments, unreadable config or other errors.
pub const INVALID: i32 = 1;
/// `pkl-diag status` found diagnostics disabled.
pub const DISABLED: i32 = 2;
