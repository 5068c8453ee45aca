//! Circular gift-exchange assignment tool.
//!
//! Arranges the participants of a gift exchange into a single gifting
//! cycle (everyone gives to their successor, the last gives to the first)
//! such that nobody is assigned a giftee from their personal blocked list.
//! The result is emitted as two de-linked artifacts — a cards file
//! (ID → name) and an envelopes file (donor ID → giftee ID) keyed by
//! randomized IDs — so that neither file alone reveals who gives to whom.
//! The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure logic (cycle validity, search strategies, ID
//!   randomization). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (roster parsing, artifact
//!   writing). Isolated so the search core stays deterministic under test.
//!
//! [`assign`] coordinates core logic with I/O to implement the CLI.

pub mod assign;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod notify;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
