//! # cardhunt
//!
//! Rules engine for a hidden-identity party game for 6-13 players.
//!
//! Each player is secretly dealt an identity card (K/Q/J of a suit, or a
//! Joker) from a deck whose composition depends on the table size. Players
//! spend a shared "blood" resource through two actions: a cooperative
//! **trade** and an adversarial **hunt** whose outcome is decided by a
//! layered, cyclic restraint relation between identities.
//!
//! ## Design Principles
//!
//! 1. **Explicitly owned state**: a [`session::Session`] is a plain
//!    aggregate driven through `&mut` methods. No globals, no singletons;
//!    independent sessions are trivially supported.
//!
//! 2. **Enums over strings**: ranks, suits, verdicts, and rule tiers are
//!    exhaustive enums, and the restraint tables are pure match expressions.
//!
//! 3. **All-or-nothing operations**: every mutating call validates first and
//!    either applies completely or changes nothing, surfacing a typed error.
//!
//! ## Modules
//!
//! - `core`: identities, players, RNG, configuration, error types
//! - `deck`: deck composition table and random identity allocation
//! - `restraint`: the rank/suit dominance resolver
//! - `events`: structured audit-log records
//! - `session`: the stateful economy engine (trade, hunt, blood overrides)

pub mod core;
pub mod deck;
pub mod events;
pub mod restraint;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ActionError, GameRng, GameRngState, Identity, Player, PlayerId, Rank, Roster, SessionConfig,
    SetupError, Suit,
};

pub use crate::deck::{allocate, compose, Deck};

pub use crate::restraint::{resolve, RuleSet, SuitTier, Verdict};

pub use crate::events::{AuditLog, Event, HuntOutcome};

pub use crate::session::{BloodReceipt, HuntReceipt, PlayerSnapshot, Session, TradeReceipt};
