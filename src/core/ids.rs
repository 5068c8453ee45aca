//! Privacy-preserving randomized participant IDs.
//!
//! The cards artifact (ID → name) and the envelopes artifact (donor ID →
//! giftee ID) only reveal the assignment when cross-referenced, so the
//! IDs must cover `[0, n)` exactly once with no structure tied to cycle
//! order.

use std::collections::BTreeMap;

use rand::Rng;

use crate::core::participant::Participant;

/// Assign every participant a unique random ID in `[0, n)`.
///
/// Draws a uniform candidate per participant and linearly probes forward
/// (wrapping) to the next free slot when the candidate is taken. Expected
/// O(n) total under low load, O(n²) worst case; participant counts are
/// tens, not thousands. The sorted map keeps the cards file ordered by ID.
pub fn assign_ids<R: Rng>(list: &[Participant], rng: &mut R) -> BTreeMap<u32, String> {
    let n = list.len();
    let mut used = vec![false; n];
    let mut ids = BTreeMap::new();
    for participant in list {
        let mut id = rng.gen_range(0..n);
        while used[id] {
            id = (id + 1) % n;
        }
        used[id] = true;
        ids.insert(id as u32, participant.name.clone());
    }
    ids
}
