//! Stable exit codes for the launcher CLI.

/// Launcher ran to completion (the orchestration outcome is not inspected).
pub const OK: i32 = 0;
/// Required input file missing, or another fatal error before orchestration.
pub const INVALID: i32 = 1;
