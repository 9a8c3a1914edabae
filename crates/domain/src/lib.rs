//! Nocturne domain layer.
//!
//! Pure value objects and rules for storyteller-system dice pools: die
//! classification, success/botch math, and the willpower home rule. No I/O,
//! no clock, no randomness - everything here is deterministic so outcome
//! recomputation can be replayed on every render of a historical roll.

pub mod error;
pub mod rules;
pub mod value_objects;

pub use error::DomainError;
pub use rules::{classify_dice, resolve_outcome, PoolShape, ResolutionRules, MAX_FACE};
pub use value_objects::{
    ActorRef, DieTag, Outcome, OutcomeKind, RollContext, RollOrigin, WillpowerRule,
};
