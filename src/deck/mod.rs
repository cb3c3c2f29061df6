//! Deck composition and identity allocation.
//!
//! `compose` builds the exact card multiset for a table size; `allocate`
//! shuffles it and deals one identity to every player.

pub mod allocate;
pub mod compose;

pub use allocate::allocate;
pub use compose::{compose, Deck};
