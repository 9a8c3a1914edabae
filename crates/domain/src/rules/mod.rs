//! Dice pool rules: classification replay and outcome math.
//!
//! Both halves are pure functions over already-rolled values. The external
//! dice engine cannot be instrumented, so classification *replays* its
//! per-die consumption order from the final results; if that order ever
//! drifts, tags degrade to `Unknown` instead of erroring.

pub mod classification;
pub mod resolution;

pub use classification::{classify_dice, PoolShape, MAX_FACE};
pub use resolution::{resolve_outcome, ResolutionRules};
