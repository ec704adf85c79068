//! Process exit codes
//!
//! Scripts branch on these, so the mapping is part of the CLI contract:
//! a clean removal is 0, a bad selection (empty, or a name that is not
//! installed) is 1, and backend or I/O failures are 2.

pub const EXIT_OK: i32 = 0;

/// Bad selection: nothing to remove, or a named package is not installed
pub const EXIT_BADOPT: i32 = 1;

/// Backend, pattern, or I/O failure
pub const EXIT_ERROR: i32 = 2;

/// Interrupted (SIGINT)
pub const EXIT_INTERRUPT: i32 = 130;
