//! Roster file parsing.
//!
//! One participant per line: the name, then (with addresses enabled) the
//! contact address, then the blocked-giftee list. Blocked names are the
//! remaining whitespace-separated tokens, each further split on `,` and
//! `;`, e.g.
//!
//! ```text
//! Alice Bob
//! Bob   Peter,Tom
//! Tom   Alice
//! Peter Bob
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::core::participant::Participant;

/// Parse a roster file into participants, in file order.
pub fn parse_roster(path: &Path, with_addresses: bool) -> Result<Vec<Participant>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read roster {}", path.display()))?;
    let roster = parse_roster_str(&contents, with_addresses);
    debug!(participants = roster.len(), "roster parsed");
    Ok(roster)
}

/// Parse roster text.
///
/// Blank lines are skipped. A duplicate name keeps the first occurrence
/// and drops the rest with a warning; the search core may assume unique
/// names.
pub fn parse_roster_str(contents: &str, with_addresses: bool) -> Vec<Participant> {
    let mut roster: Vec<Participant> = Vec::new();
    for line in contents.lines() {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };
        if roster.iter().any(|p| p.name == name) {
            warn!(name, "appears multiple times, keeping only the first entry");
            continue;
        }
        let address = if with_addresses {
            tokens.next().map(str::to_string)
        } else {
            None
        };
        let blocked = tokens
            .flat_map(|token| token.split([',', ';']))
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .collect();
        roster.push(Participant {
            name: name.to_string(),
            address,
            blocked,
        });
    }
    roster
}
