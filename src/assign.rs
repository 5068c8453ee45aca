//! Orchestration of a full assignment run.
//!
//! Wires roster parsing, the selected search strategy, ID randomization,
//! artifact writing, and the optional notification pass together, and
//! reports a structured outcome so the CLI can map "no solution exists"
//! to its own exit code instead of treating it as an error.

use std::path::PathBuf;

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info};

use crate::core::ids::assign_ids;
use crate::core::participant::Participant;
use crate::core::search::{Strategy, find_cycle};
use crate::io::artifacts::{artifact_paths, write_cards, write_envelopes};
use crate::io::roster::parse_roster;
use crate::notify::{Notifier, notify_all};

/// Inputs for one assignment run.
#[derive(Debug, Clone)]
pub struct AssignOptions {
    pub roster_path: PathBuf,
    pub strategy: Strategy,
    /// Parse the address column of the roster.
    pub with_addresses: bool,
}

/// Structured run outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    /// A valid cycle was found and both artifacts were written.
    Assigned { cards: PathBuf, envelopes: PathBuf },
    /// Backtracking proved no valid cycle exists; nothing was written.
    Unsatisfiable,
}

/// Parse the roster, search for a valid cycle, and write the artifacts.
///
/// When a notifier is given, every donor with an address is told their
/// giftee after the artifacts are written.
pub fn run_assignment<R: Rng>(
    options: &AssignOptions,
    notifier: Option<&dyn Notifier>,
    rng: &mut R,
) -> Result<AssignOutcome> {
    let mut roster = parse_roster(&options.roster_path, options.with_addresses)?;
    info!(
        participants = roster.len(),
        strategy = ?options.strategy,
        "searching for a gifting cycle"
    );

    if !find_cycle(&mut roster, options.strategy, rng) {
        return Ok(AssignOutcome::Unsatisfiable);
    }
    debug!(cycle = %cycle_summary(&roster), "found a valid cycle");

    let ids = assign_ids(&roster, rng);
    let (cards, envelopes) = artifact_paths(&options.roster_path);
    write_cards(&cards, &ids)?;
    write_envelopes(&envelopes, &ids, &roster)?;

    if let Some(notifier) = notifier {
        let delivered = notify_all(&roster, notifier);
        info!(delivered, "notifications sent");
    }

    Ok(AssignOutcome::Assigned { cards, envelopes })
}

/// `A -> B -> ... -> A` rendering of the cycle. Logged at debug only:
/// printing it on stdout would undo the de-linking of the two artifacts.
fn cycle_summary(cycle: &[Participant]) -> String {
    let mut names: Vec<&str> = cycle.iter().map(|p| p.name.as_str()).collect();
    if let Some(first) = cycle.first() {
        names.push(first.name.as_str());
    }
    names.join(" -> ")
}
