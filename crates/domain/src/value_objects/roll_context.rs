//! Roll context - the pending per-action state captured at initiation time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::ActorRef;

/// Action-kind tag for an initiated roll.
///
/// Matches the action surfaces the host sheet exposes; rendering collaborators
/// use it to pick labels, the pipeline itself only carries it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollOrigin {
    General,
    Soak,
    Power,
    Magic,
    Frenzy,
}

impl fmt::Display for RollOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollOrigin::General => write!(f, "general"),
            RollOrigin::Soak => write!(f, "soak"),
            RollOrigin::Power => write!(f, "power"),
            RollOrigin::Magic => write!(f, "magic"),
            RollOrigin::Frenzy => write!(f, "frenzy"),
        }
    }
}

impl FromStr for RollOrigin {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(RollOrigin::General),
            "soak" => Ok(RollOrigin::Soak),
            "power" => Ok(RollOrigin::Power),
            "magic" => Ok(RollOrigin::Magic),
            "frenzy" => Ok(RollOrigin::Frenzy),
            other => Err(DomainError::parse(format!("unknown roll origin: {}", other))),
        }
    }
}

/// Ephemeral description of an in-flight dice pool action.
///
/// Captured when the actor initiates a roll, before the external engine has
/// produced any results. Consumed exactly once when the matching chat message
/// draft appears, or expires silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollContext {
    /// Acting entity
    pub actor: ActorRef,
    /// Action-kind tag
    pub origin: RollOrigin,
    /// Difficulty target each die is measured against
    pub difficulty: u32,
    /// Whether the roll uses a specialty (tens may count double)
    pub is_specialized: bool,
    /// Whether a willpower point was spent on the action
    pub spends_willpower: bool,
    /// Automatic successes granted before any dice are read
    pub bonus_successes: u32,
    /// Total dice the actor rolled for this action
    pub pool_size: u32,
    /// How many of the pool dice came from a specialty bonus
    pub specialty_dice: u32,
    /// How many of the pool dice are distinguished "fate" dice
    pub fate_dice: u32,
}

impl RollContext {
    /// Plain pool roll with no bonuses or resource spends
    pub fn new(actor: ActorRef, origin: RollOrigin, difficulty: u32, pool_size: u32) -> Self {
        Self {
            actor,
            origin,
            difficulty,
            is_specialized: false,
            spends_willpower: false,
            bonus_successes: 0,
            pool_size,
            specialty_dice: 0,
            fate_dice: 0,
        }
    }
}
