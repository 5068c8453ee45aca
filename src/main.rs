//! Command-line entry point for the gift-ring assignment tool.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use gift_ring::assign::{AssignOptions, AssignOutcome, run_assignment};
use gift_ring::core::search::Strategy;
use gift_ring::notify::{CommandNotifier, Notifier};
use gift_ring::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "gift-ring",
    version,
    about = "Assign gift-exchange participants a circular gifting order"
)]
struct Cli {
    /// Roster file: one participant per line, name first, then (with
    /// --addresses) the contact address, then blocked giftee names
    /// separated by whitespace, commas or semicolons.
    roster: PathBuf,

    /// Use the purely random shuffle search instead of the systematic
    /// backtracking search. Warning: never terminates if no valid cycle
    /// exists.
    #[arg(short, long)]
    random: bool,

    /// Parse the address column and notify each donor of their giftee.
    #[arg(short, long)]
    addresses: bool,

    /// Delivery command for notifications, run once per donor with the
    /// donor's address appended as the final argument and the message on
    /// stdin. Place it after all other options.
    #[arg(
        long,
        num_args = 1..,
        value_name = "CMD",
        allow_hyphen_values = true,
        requires = "addresses"
    )]
    notify_command: Vec<String>,

    /// Bound on each delivery attempt, in seconds.
    #[arg(long, default_value_t = 30)]
    notify_timeout_secs: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let strategy = if cli.random {
        Strategy::Shuffle
    } else {
        Strategy::Backtracking
    };
    let options = AssignOptions {
        roster_path: cli.roster.clone(),
        strategy,
        with_addresses: cli.addresses,
    };
    let notifier = build_notifier(cli)?;
    let mut rng = rand::thread_rng();

    match run_assignment(&options, notifier.as_deref(), &mut rng)? {
        AssignOutcome::Assigned { cards, envelopes } => {
            println!("Info for cards written into {}", cards.display());
            println!("Info for envelopes written into {}", envelopes.display());
            Ok(exit_codes::OK)
        }
        AssignOutcome::Unsatisfiable => {
            eprintln!("no valid gifting cycle exists for this roster");
            Ok(exit_codes::UNSATISFIABLE)
        }
    }
}

fn build_notifier(cli: &Cli) -> Result<Option<Box<dyn Notifier>>> {
    if cli.notify_command.is_empty() {
        if cli.addresses {
            warn!("addresses parsed but no --notify-command given, skipping notifications");
        }
        return Ok(None);
    }
    let notifier = CommandNotifier::new(
        cli.notify_command.clone(),
        Duration::from_secs(cli.notify_timeout_secs),
    )?;
    Ok(Some(Box::new(notifier)))
}
