//! The circular successor relation and the shared validity predicate.

use crate::core::participant::Participant;

/// Iterate the (donor, giftee) pairs of the circular successor relation,
/// including the wrap-around pair (last, first).
///
/// An empty list yields nothing. A singleton yields the self pair, which
/// the envelope writer relies on (card 0 goes into envelope 0).
pub fn successor_pairs(list: &[Participant]) -> impl Iterator<Item = (&Participant, &Participant)> {
    (0..list.len()).map(|i| (&list[i], &list[(i + 1) % list.len()]))
}

/// The single acceptance test shared by both search strategies.
///
/// True iff no donor's circular successor appears in that donor's blocked
/// set. Lists of length 0 or 1 are trivially valid: there is no edge to
/// check. Pure; O(n) with one set lookup per adjacent pair.
pub fn is_valid_cycle(list: &[Participant]) -> bool {
    if list.len() <= 1 {
        return true;
    }
    successor_pairs(list).all(|(donor, giftee)| donor.allows(&giftee.name))
}
