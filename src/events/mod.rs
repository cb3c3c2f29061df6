//! Audit log: structured, append-only event records.
//!
//! The engine records one event per applied or rejected operation. Each
//! event variant carries its own strongly typed payload with the acting
//! player ids, amounts, and outcome, so the export collaborator can render
//! both the running log and the end-of-session report by pattern matching,
//! without re-deriving any rule logic. The core formats no timestamps and
//! writes no files.
//!
//! The log is backed by a persistent vector, so cloning a session (for a
//! checkpoint the collaborator may serialize) is O(1) in the log.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ActionError, Identity, PlayerId};
use crate::restraint::Verdict;

/// How a resolved hunt played out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HuntOutcome {
    /// The identities tied; no blood moved.
    Standoff,
    /// One side won and blood moved.
    Strike {
        /// The dominating player.
        winner: PlayerId,
        /// The dominated player.
        loser: PlayerId,
        /// Blood credited to the winner.
        transfer: i64,
        /// Whether the loser died.
        lethal: bool,
    },
}

/// One audit-log record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A player received their identity at setup.
    SessionInitialized {
        player: PlayerId,
        identity: Identity,
        blood: i64,
    },

    /// A trade was applied. Blood and balance fields are post-trade.
    TradeApplied {
        giver: PlayerId,
        receiver: PlayerId,
        amount: i64,
        giver_blood: i64,
        receiver_blood: i64,
        giver_balance: i64,
        receiver_balance: i64,
    },

    /// A trade was refused by a rule; nothing changed.
    TradeRejected {
        giver: PlayerId,
        receiver: PlayerId,
        amount: i64,
        reason: ActionError,
    },

    /// A hunt ran to resolution (including standoffs).
    HuntResolved {
        attacker: PlayerId,
        defender: PlayerId,
        amount: i64,
        verdict: Verdict,
        outcome: HuntOutcome,
        attacker_blood_before: i64,
        attacker_blood_after: i64,
        defender_blood_before: i64,
        defender_blood_after: i64,
    },

    /// A hunt was refused by a rule; nothing changed.
    HuntRejected {
        attacker: PlayerId,
        defender: PlayerId,
        amount: i64,
        reason: ActionError,
    },

    /// A direct blood override (narrative/GM adjustment).
    BloodModified {
        player: PlayerId,
        delta: i64,
        /// Blood after the clamp to zero.
        blood: i64,
        /// Whether the adjustment killed the player.
        died: bool,
        note: String,
    },
}

impl std::fmt::Display for Event {
    /// Plain one-line rendering for a running log. No timestamps; the
    /// export collaborator adds those.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::SessionInitialized {
                player,
                identity,
                blood,
            } => {
                write!(f, "{player} dealt {identity}, {blood} blood")
            }
            Event::TradeApplied {
                giver,
                receiver,
                amount,
                giver_blood,
                receiver_blood,
                ..
            } => write!(
                f,
                "trade: {giver} -> {receiver}, {amount} blood (now {giver_blood}/{receiver_blood})"
            ),
            Event::TradeRejected {
                giver,
                receiver,
                amount,
                reason,
            } => write!(f, "trade refused: {giver} -> {receiver}, {amount} blood ({reason})"),
            Event::HuntResolved {
                attacker,
                defender,
                amount,
                outcome,
                ..
            } => match outcome {
                HuntOutcome::Standoff => {
                    write!(f, "hunt: {attacker} vs {defender} for {amount}, standoff")
                }
                HuntOutcome::Strike {
                    winner,
                    loser,
                    transfer,
                    lethal: true,
                } => write!(
                    f,
                    "hunt: {attacker} vs {defender}, {loser} dies, {winner} gains {transfer} blood"
                ),
                HuntOutcome::Strike {
                    winner,
                    transfer,
                    ..
                } => write!(
                    f,
                    "hunt: {attacker} vs {defender}, {winner} takes {transfer} blood"
                ),
            },
            Event::HuntRejected {
                attacker,
                defender,
                amount,
                reason,
            } => write!(f, "hunt refused: {attacker} vs {defender} for {amount} ({reason})"),
            Event::BloodModified {
                player,
                delta,
                blood,
                died,
                note,
            } => {
                write!(f, "blood override: {player} {delta:+}, now {blood}")?;
                if *died {
                    write!(f, ", dies")?;
                }
                if !note.is_empty() {
                    write!(f, " ({note})")?;
                }
                Ok(())
            }
        }
    }
}

/// Append-only sequence of events for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLog {
    entries: Vector<Event>,
}

impl AuditLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: Event) {
        self.entries.push_back(event);
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over events in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.entries.iter()
    }

    /// The most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.entries.last()
    }
}
