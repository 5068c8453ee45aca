//! The two interchangeable cycle search strategies.
//!
//! Both reorder the working list in place until it satisfies
//! [`is_valid_cycle`]; they differ only in how candidate orderings are
//! generated, never in how they are judged.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::core::cycle::is_valid_cycle;
use crate::core::participant::Participant;

/// Which search strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Exhaustive recursive search; terminates on every input.
    Backtracking,
    /// Random swaps until valid; loops forever when no cycle exists.
    Shuffle,
}

/// Run the selected strategy.
///
/// Returns `false` only when `strategy` is [`Strategy::Backtracking`] and
/// no valid cycle exists; [`Strategy::Shuffle`] has no failure path (see
/// [`shuffle_search`] for the non-termination hazard).
pub fn find_cycle<R: Rng>(list: &mut [Participant], strategy: Strategy, rng: &mut R) -> bool {
    match strategy {
        Strategy::Backtracking => backtracking_search(list, rng),
        Strategy::Shuffle => {
            shuffle_search(list, rng);
            true
        }
    }
}

/// Swap two random positions until the cycle predicate holds.
///
/// Intentionally naive. Whenever a valid cycle exists this terminates
/// with probability 1, but on unsatisfiable constraints it loops forever.
/// No iteration cap is imposed: a cap would make a solvable-but-rare
/// roster report failure instead of eventually succeeding. Use
/// [`backtracking_search`] when a definitive answer is required.
pub fn shuffle_search<R: Rng>(list: &mut [Participant], rng: &mut R) {
    let mut swaps = 0u64;
    while !is_valid_cycle(list) {
        // The two positions may coincide, making the step a no-op.
        let a = rng.gen_range(0..list.len());
        let b = rng.gen_range(0..list.len());
        list.swap(a, b);
        swaps += 1;
    }
    debug!(swaps, "shuffle search settled on a valid cycle");
}

/// Exhaustive backtracking construction of a valid cycle.
///
/// Pre-shuffles the list so runs over rosters with many valid solutions
/// vary in which one they return (variety only; completeness does not
/// depend on it), then recursively places a giftee at each position,
/// undoing any placement whose subtree fails. Sound and complete: returns
/// `false` only when no valid circular arrangement exists, and always
/// terminates. On success the list is a valid cycle; on failure its order
/// is unspecified. Either way it remains a permutation of the input.
pub fn backtracking_search<R: Rng>(list: &mut [Participant], rng: &mut R) -> bool {
    list.shuffle(rng);
    if list.len() <= 1 {
        return true;
    }
    place(list, 0)
}

/// Find a giftee for the donor at position `donor`; positions up to and
/// including `donor` are already fixed.
fn place(list: &mut [Participant], donor: usize) -> bool {
    let giftee = donor + 1;
    if giftee == list.len() {
        // Every position is fixed; the wrap-around edge is the last check.
        return list[donor].allows(&list[0].name);
    }
    for candidate in giftee..list.len() {
        if !list[donor].allows(&list[candidate].name) {
            continue;
        }
        list.swap(giftee, candidate);
        if place(list, giftee) {
            return true;
        }
        // Restore the exact prior order before trying the next candidate.
        list.swap(giftee, candidate);
    }
    false
}
