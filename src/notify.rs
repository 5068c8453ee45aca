//! Notification side-channel: tell each donor who their giftee is.
//!
//! Delivery is delegated to a user-supplied command so the tool stays
//! transport-agnostic: the command runs once per donor with the donor's
//! address appended as the final argument and the rendered message piped
//! to stdin. Anything that reads stdin and takes a recipient argument
//! works (a `sendmail` wrapper, an API client, a script).

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, warn};
use wait_timeout::ChildExt;

use crate::core::cycle::successor_pairs;
use crate::core::participant::Participant;

/// Seam for delivering giftee notifications.
pub trait Notifier {
    fn notify(&self, donor: &str, address: &str, giftee: &str) -> Result<()>;
}

/// Render the message body a donor receives.
pub fn render_message(donor: &str, giftee: &str) -> String {
    format!(
        "Hello {donor},\n\
         \n\
         thank you for joining the gift exchange again this year. Your task\n\
         until the big day: find a memorable, fun and not too expensive\n\
         present for {giftee}.\n\
         \n\
         Good luck, and keep it secret!\n"
    )
}

/// Notify every donor of their circular successor.
///
/// Donors without an address are skipped with a warning; individual
/// delivery failures are reported and do not abort the remaining
/// notifications. Returns the number of deliveries that succeeded.
pub fn notify_all(cycle: &[Participant], notifier: &dyn Notifier) -> usize {
    let mut delivered = 0;
    for (donor, giftee) in successor_pairs(cycle) {
        let Some(address) = donor.address.as_deref() else {
            warn!(donor = %donor.name, "no address on file, skipping notification");
            continue;
        };
        match notifier.notify(&donor.name, address, &giftee.name) {
            Ok(()) => delivered += 1,
            Err(err) => warn!(donor = %donor.name, error = %err, "notification failed"),
        }
    }
    delivered
}

/// Runs a configured delivery command once per donor, with a bounded wait.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    command: Vec<String>,
    timeout: Duration,
}

impl CommandNotifier {
    pub fn new(command: Vec<String>, timeout: Duration) -> Result<Self> {
        if command.is_empty() || command[0].trim().is_empty() {
            bail!("notify command must be non-empty");
        }
        Ok(Self { command, timeout })
    }
}

impl Notifier for CommandNotifier {
    fn notify(&self, donor: &str, address: &str, giftee: &str) -> Result<()> {
        let message = render_message(donor, giftee);

        let mut cmd = Command::new(&self.command[0]);
        cmd.args(&self.command[1..])
            .arg(address)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let mut child = cmd
            .spawn()
            .with_context(|| format!("spawn notify command {}", self.command[0]))?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("stdin was not piped"))?;
        stdin.write_all(message.as_bytes()).context("write message")?;
        drop(stdin);

        let status = match child.wait_timeout(self.timeout).context("wait for delivery")? {
            Some(status) => status,
            None => {
                warn!(
                    donor,
                    timeout_secs = self.timeout.as_secs(),
                    "delivery timed out, killing"
                );
                child.kill().context("kill delivery command")?;
                child.wait().context("wait after kill")?;
                bail!("delivery to {address} timed out");
            }
        };
        if !status.success() {
            bail!("delivery command exited with {status}");
        }
        debug!(donor, "notification delivered");
        Ok(())
    }
}
