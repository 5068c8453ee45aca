//! Stable exit codes for the gift-ring CLI.

/// A valid cycle was found and both artifacts were written.
pub const OK: i32 = 0;
/// Unreadable roster, unwritable artifacts, bad flags, or other errors.
pub const INVALID: i32 = 1;
/// The backtracking search proved that no valid gifting cycle exists.
pub const UNSATISFIABLE: i32 = 2;
