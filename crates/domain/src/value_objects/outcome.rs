//! Recomputed roll outcomes.
//!
//! An [`Outcome`] is a transient view derived fresh from dice + context on
//! every render; it is never persisted on its own.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall result category of a dice pool roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Success,
    Failure,
    Botch,
}

/// Which branch of the willpower home rule fired, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WillpowerRule {
    /// No willpower was spent on the action
    NotUsed,
    /// Net successes were positive; willpower added one more
    Bonus,
    /// Net was zero or negative; willpower guaranteed a single success
    Floor,
}

/// Recomputed outcome of a dice pool roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub kind: OutcomeKind,
    /// Successes on a success, margin of botch on a botch, 0 on a failure
    pub magnitude: u32,
    /// Successes read straight off the dice, before bonuses and penalties
    pub raw_successes: u32,
    /// Raw successes plus automatic bonus successes
    pub successes_before_penalty: u32,
    /// Count of penalty dice (ones)
    pub penalty_count: u32,
    /// Willpower home-rule branch that applied
    pub willpower_rule: WillpowerRule,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OutcomeKind::Success => write!(f, "{} success(es)", self.magnitude),
            OutcomeKind::Failure => write!(f, "failure"),
            OutcomeKind::Botch => write!(f, "botch ({})", self.magnitude),
        }
    }
}
