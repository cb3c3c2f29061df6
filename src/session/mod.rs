//! The session engine: setup, trade, hunt, and blood overrides.
//!
//! A [`Session`] owns the roster, the rules in force, and the audit log.
//! It is the only place player state is mutated, and every mutating call is
//! all-or-nothing: validate first, then apply and record, or record the
//! rejection and change nothing else.

pub mod engine;

pub use engine::{BloodReceipt, HuntReceipt, PlayerSnapshot, Session, TradeReceipt};
