//! Correlation key derivation.
//!
//! There is no shared unique identifier between "roll initiated" and "message
//! created", so the key is built from attributes observable at both points:
//! the speaker composite, the creation timestamp, and the number of
//! elementary results. The key is NOT unique - two rapid actions by the same
//! actor in the same millisecond collide - and the draft stash absorbs that
//! by serving queued payloads FIFO.

use crate::entities::SpeakerRef;

/// Derive the best-effort key linking a draft to its queued payload.
///
/// Fixed-order concatenation with empty-string defaults for missing speaker
/// fields, so derivation is deterministic on both sides of the gap.
pub fn draft_key(speaker: &SpeakerRef, timestamp_ms: u64, dice_count: usize) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        speaker.scene.as_deref().unwrap_or(""),
        speaker.token.as_deref().unwrap_or(""),
        speaker.actor.as_deref().unwrap_or(""),
        timestamp_ms,
        dice_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_speaker() {
        let speaker = SpeakerRef {
            scene: Some("Scene.1".into()),
            token: Some("Token.2".into()),
            actor: Some("Actor.3".into()),
            alias: Some("Nameless".into()),
        };
        assert_eq!(
            draft_key(&speaker, 1_700_000, 4),
            "Scene.1|Token.2|Actor.3|1700000|4"
        );
    }

    #[test]
    fn test_missing_fields_default_empty() {
        let speaker = SpeakerRef::for_actor("Actor.3");
        assert_eq!(draft_key(&speaker, 1_700_000, 4), "||Actor.3|1700000|4");
    }

    #[test]
    fn test_alias_not_part_of_key() {
        let mut a = SpeakerRef::for_actor("Actor.3");
        let b = a.clone();
        a.alias = Some("Nameless".into());
        assert_eq!(draft_key(&a, 1, 1), draft_key(&b, 1, 1));
    }

    #[test]
    fn test_dice_count_disambiguates() {
        let speaker = SpeakerRef::for_actor("Actor.3");
        assert_ne!(draft_key(&speaker, 1, 4), draft_key(&speaker, 1, 5));
    }
}
