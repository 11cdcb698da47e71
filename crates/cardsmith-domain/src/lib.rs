//! Cardsmith Domain Layer
//!
//! Core data model shared by every other Cardsmith crate: study cards, the
//! card sets produced by extraction or import, and the identity capability
//! used to mint card ids.
//!
//! ## Key Concepts
//!
//! - **Card**: a question/answer pair with a stable id
//! - **CardSet**: a titled, sourced, ordered collection of cards produced by
//!   exactly one extraction or import
//! - **IdGenerator**: injected capability that assigns ids to new cards
//!
//! ## Architecture
//!
//! - Pure data and invariants only, no I/O
//! - Card sets are immutable once built; a new extraction or import produces
//!   a new set that replaces the old one wholesale

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod card;
pub mod card_set;
pub mod traits;

// Re-exports for convenience
pub use card::{Card, CardId};
pub use card_set::{CardSet, CardSetError};
pub use traits::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
