//! Credit gate guarding the script generator.
//!
//! The gate is a small state machine over a persisted balance: `HAS_CREDITS`
//! (balance > 0) and `EXHAUSTED` (balance == 0), each with an overlay
//! open/closed sub-flag. Every balance mutation writes through to the
//! session store before returning, so a re-initialization within the same
//! session always reads the last written value.
//!
//! The gate is owned by the top-level UI controller and passed by reference
//! to the consuming parts; it is never ambient global state.

use anyhow::{bail, Result};
use tracing::{info, warn};

use super::scripts::{generate_scripts, Selection, SCRIPT_COUNT};
use super::session::SessionStore;

/// Session store key holding the balance as a decimal string.
pub const CREDITS_KEY: &str = "zero_conflict_credits";

/// Balance granted the first time a session is observed.
pub const DEFAULT_CREDITS: u32 = 2;

/// Result of asking the gate to pay for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// One credit was spent and persisted; the caller may emit a fresh
    /// script set.
    Spent,
    /// The balance was already 0. Nothing changed except the purchase
    /// overlay, which is now open.
    Exhausted,
}

pub struct CreditGate<S: SessionStore> {
    store: S,
    balance: u32,
    overlay_open: bool,
}

impl<S: SessionStore> CreditGate<S> {
    /// Initialize the gate from the session store.
    ///
    /// A missing or non-numeric stored value is treated as a fresh session:
    /// the balance starts at [`DEFAULT_CREDITS`] and is persisted
    /// immediately.
    pub fn load(mut store: S) -> Self {
        let stored = store.get(CREDITS_KEY);
        let parsed = stored.as_deref().and_then(|v| v.trim().parse::<u32>().ok());

        let balance = match parsed {
            Some(balance) => balance,
            None => {
                if let Some(raw) = stored {
                    warn!(
                        "Ignoring unparseable stored credit balance {:?}, resetting to {}",
                        raw, DEFAULT_CREDITS
                    );
                }
                store.set(CREDITS_KEY, &DEFAULT_CREDITS.to_string());
                DEFAULT_CREDITS
            }
        };

        info!("Credit gate initialized with balance {}", balance);

        Self {
            store,
            balance,
            overlay_open: false,
        }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn has_credits(&self) -> bool {
        self.balance > 0
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Show the purchase overlay without touching the balance.
    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    /// Explicit cancel: close the overlay, independent of balance.
    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    /// Pay for one generation.
    ///
    /// While credits remain the balance is decremented and persisted before
    /// this returns. When exhausted the balance and any displayed scripts
    /// stay untouched and the purchase overlay opens instead.
    pub fn try_spend(&mut self) -> AttemptOutcome {
        if self.balance == 0 {
            self.overlay_open = true;
            return AttemptOutcome::Exhausted;
        }

        self.balance -= 1;
        self.persist();
        AttemptOutcome::Spent
    }

    /// Manual reconciliation hook: add credits purchased out of band.
    pub fn grant(&mut self, credits: u32) {
        self.balance = self.balance.saturating_add(credits);
        self.persist();
        info!("Granted {} credits, balance is now {}", credits, self.balance);
    }

    fn persist(&mut self) {
        self.store.set(CREDITS_KEY, &self.balance.to_string());
    }
}

/// Outcome of a full generation attempt: validation first, then the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateAttempt {
    /// A credit was spent; these scripts replace any displayed set.
    Generated([String; SCRIPT_COUNT]),
    /// One of the three dropdowns is unset. Nothing changed; the user gets
    /// a notice.
    IncompleteForm,
    /// The balance was 0. Nothing changed except the purchase overlay,
    /// which is now open.
    OutOfCredits,
}

/// Run one generation attempt against the gate.
///
/// An incomplete form is refused before the balance is consulted, so it
/// never costs a credit and never opens the overlay.
pub fn attempt_generate<S: SessionStore>(
    gate: &mut CreditGate<S>,
    selection: &Selection,
) -> GenerateAttempt {
    // Generation is pure, so running it before the gate costs nothing;
    // the scripts are only emitted once the credit is actually spent.
    let scripts = match generate_scripts(selection) {
        Some(scripts) => scripts,
        None => return GenerateAttempt::IncompleteForm,
    };

    match gate.try_spend() {
        AttemptOutcome::Spent => GenerateAttempt::Generated(scripts),
        AttemptOutcome::Exhausted => GenerateAttempt::OutOfCredits,
    }
}

/// Parse the `--grant-credits N` command-line argument, the administrative
/// entry point for applying a manually reconciled purchase.
pub fn parse_grant_credits_arg(args: &[String]) -> Result<Option<u32>> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--grant-credits" {
            let value = match iter.next() {
                Some(value) => value,
                None => bail!("--grant-credits requires a credit count"),
            };
            return match value.parse::<u32>() {
                Ok(credits) => Ok(Some(credits)),
                Err(_) => bail!("invalid credit count {:?}", value),
            };
        }
        if let Some(value) = arg.strip_prefix("--grant-credits=") {
            return match value.parse::<u32>() {
                Ok(credits) => Ok(Some(credits)),
                Err(_) => bail!("invalid credit count {:?}", value),
            };
        }
    }
    Ok(None)
}
