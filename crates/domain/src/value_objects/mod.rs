//! Value objects for dice pool rolls.

pub mod actor;
pub mod die_tag;
pub mod outcome;
pub mod roll_context;

pub use actor::ActorRef;
pub use die_tag::DieTag;
pub use outcome::{Outcome, OutcomeKind, WillpowerRule};
pub use roll_context::{RollContext, RollOrigin};
