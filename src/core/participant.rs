//! Participant data carried through parsing, search, and output.

use std::collections::HashSet;

/// One gift-exchange participant.
///
/// `blocked` holds names this participant must not be assigned as giftee
/// (spouse, last year's giftee, ...). Entries are plain strings and are
/// never validated against the roster; a blocked name matching nobody is
/// inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Unique within a roster, case-sensitive, non-empty.
    pub name: String,
    /// Contact address, parsed only when notification is enabled.
    pub address: Option<String>,
    /// Names this donor must not gift to.
    pub blocked: HashSet<String>,
}

impl Participant {
    /// True if this donor may be assigned `giftee_name`.
    pub fn allows(&self, giftee_name: &str) -> bool {
        !self.blocked.contains(giftee_name)
    }
}
