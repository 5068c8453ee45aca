//! Pure assignment logic.
//!
//! Core modules must be free of I/O side effects. They operate on
//! in-memory participant lists; the only nondeterminism is the `Rng`
//! handed in by the caller, so tests can seed it.

pub mod cycle;
pub mod ids;
pub mod participant;
pub mod search;
