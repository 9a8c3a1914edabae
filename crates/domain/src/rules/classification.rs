//! Dice classification by slot-queue replay.
//!
//! The external engine rolls specialty dice first, then base pool dice, then
//! fate dice, and appends one extra die immediately after any die that shows
//! its maximum face when exploding is on. We rebuild that order as a queue of
//! classification slots and consume the raw results against it.

use std::collections::VecDeque;

use crate::value_objects::{DieTag, RollContext};

/// Maximum face value of a pool die; a die showing this value explodes
pub const MAX_FACE: u32 = 10;

/// Composition of a dice pool, clamped to internally consistent counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolShape {
    pub primary: u32,
    pub specialty: u32,
    pub fate: u32,
}

impl PoolShape {
    /// Build a shape from raw counts.
    ///
    /// Fate dice are clamped to the total, specialty dice to whatever budget
    /// remains after fate; primary dice are the remainder. Counts that do not
    /// add up can only come from a mismatched context, so clamping (rather
    /// than erroring) keeps classification best-effort.
    pub fn new(total: u32, specialty: u32, fate: u32) -> Self {
        let fate = fate.min(total);
        let specialty = specialty.min(total - fate);
        let primary = total - fate - specialty;
        Self {
            primary,
            specialty,
            fate,
        }
    }

    pub fn from_context(ctx: &RollContext) -> Self {
        Self::new(ctx.pool_size, ctx.specialty_dice, ctx.fate_dice)
    }

    pub fn total(&self) -> u32 {
        self.primary + self.specialty + self.fate
    }
}

/// Classify each raw die result in engine consumption order.
///
/// Returns exactly one tag per element of `raw`. With `explode` enabled, a
/// consumed die showing [`MAX_FACE`] pushes one extra slot of the *same*
/// classification to the front of the queue - the extra die inherits its
/// predecessor's tag. If the queue runs out before the results do, the
/// remainder tags as [`DieTag::Unknown`].
pub fn classify_dice(shape: PoolShape, raw: &[u32], explode: bool) -> Vec<DieTag> {
    let mut slots: VecDeque<DieTag> = VecDeque::with_capacity(shape.total() as usize);
    slots.extend(std::iter::repeat(DieTag::Specialty).take(shape.specialty as usize));
    slots.extend(std::iter::repeat(DieTag::Primary).take(shape.primary as usize));
    slots.extend(std::iter::repeat(DieTag::Fate).take(shape.fate as usize));

    let mut tags = Vec::with_capacity(raw.len());
    for &value in raw {
        let tag = slots.pop_front().unwrap_or(DieTag::Unknown);
        if explode && value == MAX_FACE && tag != DieTag::Unknown {
            slots.push_front(tag);
        }
        tags.push(tag);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pool_in_order() {
        let shape = PoolShape::new(3, 0, 0);
        let tags = classify_dice(shape, &[4, 6, 2], false);
        assert_eq!(tags, vec![DieTag::Primary; 3]);
    }

    #[test]
    fn test_specialty_before_primary_before_fate() {
        let shape = PoolShape::new(4, 1, 1);
        let tags = classify_dice(shape, &[5, 5, 5, 5], false);
        assert_eq!(
            tags,
            vec![DieTag::Specialty, DieTag::Primary, DieTag::Primary, DieTag::Fate]
        );
    }

    #[test]
    fn test_exploding_die_inherits_classification() {
        // First die explodes; the 4th (extra) result inherits primary.
        let shape = PoolShape::new(3, 0, 0);
        let tags = classify_dice(shape, &[10, 7, 3, 9], true);
        assert_eq!(tags, vec![DieTag::Primary; 4]);
    }

    #[test]
    fn test_exploding_fate_die_stays_fate() {
        let shape = PoolShape::new(2, 0, 1);
        let tags = classify_dice(shape, &[3, 10, 6], true);
        assert_eq!(tags, vec![DieTag::Primary, DieTag::Fate, DieTag::Fate]);
    }

    #[test]
    fn test_chained_explosions() {
        let shape = PoolShape::new(2, 1, 0);
        let tags = classify_dice(shape, &[10, 10, 4, 8], true);
        assert_eq!(
            tags,
            vec![DieTag::Specialty, DieTag::Specialty, DieTag::Specialty, DieTag::Primary]
        );
    }

    #[test]
    fn test_explosions_ignored_when_disabled() {
        let shape = PoolShape::new(2, 0, 0);
        let tags = classify_dice(shape, &[10, 7, 9], false);
        assert_eq!(tags, vec![DieTag::Primary, DieTag::Primary, DieTag::Unknown]);
    }

    #[test]
    fn test_excess_results_tag_unknown() {
        let shape = PoolShape::new(2, 0, 0);
        let tags = classify_dice(shape, &[4, 6, 2, 8], false);
        assert_eq!(
            tags,
            vec![DieTag::Primary, DieTag::Primary, DieTag::Unknown, DieTag::Unknown]
        );
    }

    #[test]
    fn test_short_results_stop_early() {
        let shape = PoolShape::new(5, 0, 0);
        let tags = classify_dice(shape, &[4, 6], false);
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_shape_clamps_fate_to_total() {
        let shape = PoolShape::new(2, 0, 5);
        assert_eq!(shape.fate, 2);
        assert_eq!(shape.primary, 0);
        assert_eq!(shape.total(), 2);
    }

    #[test]
    fn test_shape_clamps_specialty_to_remaining_budget() {
        let shape = PoolShape::new(4, 6, 1);
        assert_eq!(shape.fate, 1);
        assert_eq!(shape.specialty, 3);
        assert_eq!(shape.primary, 0);
    }

    #[test]
    fn test_empty_results() {
        let shape = PoolShape::new(3, 0, 0);
        assert!(classify_dice(shape, &[], true).is_empty());
    }
}
