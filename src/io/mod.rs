//! I/O helpers: roster parsing and artifact writing.

pub mod artifacts;
pub mod roster;
