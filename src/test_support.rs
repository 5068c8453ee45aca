//! Test-only helpers for constructing participants.

use crate::core::participant::Participant;

/// Participant with no address and the given blocked names.
pub fn participant(name: &str, blocked: &[&str]) -> Participant {
    Participant {
        name: name.to_string(),
        address: None,
        blocked: blocked.iter().map(|s| s.to_string()).collect(),
    }
}

/// Participant with a contact address.
pub fn participant_with_address(name: &str, address: &str, blocked: &[&str]) -> Participant {
    Participant {
        address: Some(address.to_string()),
        ..participant(name, blocked)
    }
}

/// The four-person roster from the usage example: its only solutions are
/// rotations of Tom -> Bob -> Alice -> Peter -> Tom.
pub fn example_roster() -> Vec<Participant> {
    vec![
        participant("Alice", &["Bob"]),
        participant("Bob", &["Peter", "Tom"]),
        participant("Tom", &["Alice"]),
        participant("Peter", &["Bob"]),
    ]
}
