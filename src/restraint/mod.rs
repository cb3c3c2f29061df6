//! The restraint relation between identities.
//!
//! A non-transitive, cyclic "beats" relation (rock-paper-scissors style),
//! tiered by rank first and suit second. The suit tier depends on the table
//! size, captured once per session in a [`RuleSet`].

pub mod resolver;

pub use resolver::{resolve, RuleSet, SuitTier, Verdict};
