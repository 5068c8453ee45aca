//! The two de-linked output artifacts.
//!
//! The cards file maps ID → name; the envelopes file maps donor ID →
//! giftee ID. Handing each file to a different helper lets the exchange
//! be assembled without anyone learning who gives to whom; only
//! cross-referencing both files reconstructs the assignment.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::core::cycle::successor_pairs;
use crate::core::participant::Participant;

/// Derive the artifact paths from the roster path: the roster's final
/// extension (if any) is stripped, then `_cards.txt` and `_envelopes.txt`
/// are appended.
pub fn artifact_paths(roster_path: &Path) -> (PathBuf, PathBuf) {
    let base = roster_path.with_extension("");
    let mut cards = base.as_os_str().to_owned();
    cards.push("_cards.txt");
    let mut envelopes = base.into_os_string();
    envelopes.push("_envelopes.txt");
    (PathBuf::from(cards), PathBuf::from(envelopes))
}

/// Write the cards file: one `<id> - <name>` line, ascending by ID.
pub fn write_cards(path: &Path, ids: &BTreeMap<u32, String>) -> Result<()> {
    let lines: Vec<String> = ids
        .iter()
        .map(|(id, name)| format!("{id} - {name}"))
        .collect();
    write_lines(path, &lines)
}

/// Write the envelopes file: one `Card <giftee-id> into envelope
/// <donor-id>` line per donor, in cycle order.
pub fn write_envelopes(
    path: &Path,
    ids: &BTreeMap<u32, String>,
    cycle: &[Participant],
) -> Result<()> {
    let id_of: HashMap<&str, u32> = ids.iter().map(|(id, name)| (name.as_str(), *id)).collect();
    let mut lines = Vec::with_capacity(cycle.len());
    for (donor, giftee) in successor_pairs(cycle) {
        let donor_id = lookup(&id_of, &donor.name)?;
        let giftee_id = lookup(&id_of, &giftee.name)?;
        lines.push(format!("Card {giftee_id} into envelope {donor_id}"));
    }
    write_lines(path, &lines)
}

fn lookup(id_of: &HashMap<&str, u32>, name: &str) -> Result<u32> {
    id_of
        .get(name)
        .copied()
        .ok_or_else(|| anyhow!("no id assigned for {name}"))
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut buf = lines.join("\n");
    if !buf.is_empty() {
        buf.push('\n');
    }
    fs::write(path, buf).with_context(|| format!("write {}", path.display()))
}
