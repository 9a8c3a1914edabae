//! Success/botch math and the willpower home rule.

use serde::{Deserialize, Serialize};

use crate::rules::classification::MAX_FACE;
use crate::value_objects::{Outcome, OutcomeKind, RollContext, WillpowerRule};

/// Rule toggles consumed by outcome recomputation.
///
/// Mirrors the host module's settings: whether a specialty doubles tens,
/// an optional flat ten-bonus value used when no specialty applies, and
/// whether tens explode into extra dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionRules {
    /// A ten on a specialized roll counts as two successes
    pub specialty_doubles_tens: bool,
    /// Flat success value of a ten when the specialty rule does not apply
    pub ten_bonus: Option<u32>,
    /// Tens add an extra die of the same type to the pool
    pub explode_tens: bool,
}

impl Default for ResolutionRules {
    fn default() -> Self {
        Self {
            specialty_doubles_tens: true,
            ten_bonus: None,
            explode_tens: true,
        }
    }
}

impl ResolutionRules {
    /// Success value of a single ten under these rules.
    ///
    /// Priority order: specialty doubling, then the configured flat bonus,
    /// then the plain single success.
    fn ten_value(&self, is_specialized: bool) -> u32 {
        if self.specialty_doubles_tens && is_specialized {
            2
        } else {
            self.ten_bonus.unwrap_or(1)
        }
    }
}

/// Recompute the outcome of a roll from its raw die values.
///
/// Pure and idempotent: the same `(values, ctx, rules)` always yields the
/// same [`Outcome`], because this runs again on every render of the same
/// historical message.
pub fn resolve_outcome(values: &[u32], ctx: &RollContext, rules: &ResolutionRules) -> Outcome {
    let mut raw_successes: u32 = 0;
    let mut penalty_count: u32 = 0;

    for &value in values {
        if value == 1 {
            penalty_count += 1;
        } else if value == MAX_FACE {
            raw_successes += rules.ten_value(ctx.is_specialized);
        } else if value >= ctx.difficulty {
            raw_successes += 1;
        }
    }

    let successes_before_penalty = raw_successes + ctx.bonus_successes;
    let net = i64::from(successes_before_penalty) - i64::from(penalty_count);

    let (kind, magnitude, willpower_rule) = if ctx.spends_willpower {
        if net >= 1 {
            // net fits u32: bounded by successes_before_penalty
            (OutcomeKind::Success, net as u32 + 1, WillpowerRule::Bonus)
        } else {
            (OutcomeKind::Success, 1, WillpowerRule::Floor)
        }
    } else if net > 0 {
        (OutcomeKind::Success, net as u32, WillpowerRule::NotUsed)
    } else if penalty_count > successes_before_penalty {
        (
            OutcomeKind::Botch,
            penalty_count - successes_before_penalty,
            WillpowerRule::NotUsed,
        )
    } else {
        (OutcomeKind::Failure, 0, WillpowerRule::NotUsed)
    };

    Outcome {
        kind,
        magnitude,
        raw_successes,
        successes_before_penalty,
        penalty_count,
        willpower_rule,
    }
}
