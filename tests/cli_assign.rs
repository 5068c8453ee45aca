//! CLI tests for the gift-ring binary.
//!
//! Spawns the real binary against tempdir rosters and verifies exit
//! codes, artifact generation, and the de-linked artifact format.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::{Command, ExitStatus};

use gift_ring::exit_codes;

fn run_binary(dir: &Path, args: &[&str]) -> ExitStatus {
    Command::new(env!("CARGO_BIN_EXE_gift-ring"))
        .current_dir(dir)
        .args(args)
        .status()
        .expect("run gift-ring")
}

/// Parse the cards file into ID → name.
fn parse_cards(contents: &str) -> HashMap<u32, String> {
    contents
        .lines()
        .map(|line| {
            let (id, name) = line.split_once(" - ").expect("card line format");
            (id.parse().expect("card id"), name.to_string())
        })
        .collect()
}

/// Parse the envelopes file into donor ID → giftee ID.
fn parse_envelopes(contents: &str) -> HashMap<u32, u32> {
    contents
        .lines()
        .map(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(words[0], "Card");
            assert_eq!(&words[2..4], ["into", "envelope"]);
            let giftee: u32 = words[1].parse().expect("giftee id");
            let donor: u32 = words[4].parse().expect("donor id");
            (donor, giftee)
        })
        .collect()
}

/// Cross-reference both artifacts into donor name → giftee name.
fn reconstruct_assignment(dir: &Path, base: &str) -> HashMap<String, String> {
    let cards = fs::read_to_string(dir.join(format!("{base}_cards.txt"))).expect("cards");
    let envelopes =
        fs::read_to_string(dir.join(format!("{base}_envelopes.txt"))).expect("envelopes");
    let names = parse_cards(&cards);
    parse_envelopes(&envelopes)
        .into_iter()
        .map(|(donor, giftee)| (names[&donor].clone(), names[&giftee].clone()))
        .collect()
}

const FAMILY_ROSTER: &str = "Alice Bob\nBob Peter,Tom\nTom Alice\nPeter Bob\n";

#[test]
fn assigns_family_roster_and_writes_delinked_artifacts() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("family.txt"), FAMILY_ROSTER).expect("write roster");

    let status = run_binary(temp.path(), &["family.txt"]);
    assert_eq!(status.code(), Some(exit_codes::OK));

    let assignment = reconstruct_assignment(temp.path(), "family");
    assert_eq!(assignment.len(), 4);

    // Every blocked pairing is avoided.
    assert_ne!(assignment["Alice"], "Bob");
    assert_ne!(assignment["Bob"], "Peter");
    assert_ne!(assignment["Bob"], "Tom");
    assert_ne!(assignment["Tom"], "Alice");
    assert_ne!(assignment["Peter"], "Bob");

    // Following successors from Alice visits everyone and returns.
    let mut current = "Alice".to_string();
    for _ in 0..4 {
        current = assignment[&current].clone();
    }
    assert_eq!(current, "Alice");
}

#[test]
fn random_strategy_also_solves_the_family_roster() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("family.txt"), FAMILY_ROSTER).expect("write roster");

    let status = run_binary(temp.path(), &["-r", "family.txt"]);
    assert_eq!(status.code(), Some(exit_codes::OK));
    assert_eq!(reconstruct_assignment(temp.path(), "family").len(), 4);
}

#[test]
fn singleton_roster_is_trivially_assigned() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("solo.txt"), "Alice\n").expect("write roster");

    let status = run_binary(temp.path(), &["solo.txt"]);
    assert_eq!(status.code(), Some(exit_codes::OK));

    let cards = fs::read_to_string(temp.path().join("solo_cards.txt")).expect("cards");
    let envelopes = fs::read_to_string(temp.path().join("solo_envelopes.txt")).expect("envelopes");
    assert_eq!(cards, "0 - Alice\n");
    assert_eq!(envelopes, "Card 0 into envelope 0\n");
}

#[test]
fn mutual_exclusion_pair_exits_unsatisfiable_without_artifacts() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("pair.txt"), "Alice Bob\nBob Alice\n").expect("write roster");

    let status = run_binary(temp.path(), &["pair.txt"]);
    assert_eq!(status.code(), Some(exit_codes::UNSATISFIABLE));
    assert!(!temp.path().join("pair_cards.txt").exists());
    assert!(!temp.path().join("pair_envelopes.txt").exists());
}

#[test]
fn missing_roster_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let status = run_binary(temp.path(), &["absent.txt"]);
    assert_eq!(status.code(), Some(exit_codes::INVALID));
}

#[test]
fn notify_command_receives_one_message_per_donor() {
    let temp = tempfile::tempdir().expect("tempdir");
    let roster = "\
Alice alice@example.com Bob
Bob   bob@example.com   Peter,Tom
Tom   tom@example.com   Alice
Peter peter@example.com Bob
";
    fs::write(temp.path().join("family.txt"), roster).expect("write roster");

    let status = run_binary(
        temp.path(),
        &[
            "family.txt",
            "-a",
            "--notify-command",
            "sh",
            "-c",
            "cat >> delivered.txt; echo \"$0\" >> recipients.txt",
        ],
    );
    assert_eq!(status.code(), Some(exit_codes::OK));

    let delivered = fs::read_to_string(temp.path().join("delivered.txt")).expect("delivered");
    assert_eq!(delivered.matches("Hello").count(), 4);

    let recipients = fs::read_to_string(temp.path().join("recipients.txt")).expect("recipients");
    let mut lines: Vec<&str> = recipients.lines().collect();
    lines.sort_unstable();
    assert_eq!(
        lines,
        vec![
            "alice@example.com",
            "bob@example.com",
            "peter@example.com",
            "tom@example.com"
        ]
    );
}
