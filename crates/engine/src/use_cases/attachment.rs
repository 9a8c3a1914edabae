//! Metadata attachment and extraction.
//!
//! Persists the classified payload onto a message draft through two channels:
//! (a) the options map of the first elementary die result, which survives the
//! host's internal create-pipeline rewrites best, and (b) a namespaced entry
//! in the message flags, best-effort. Extraction reads (a) first and falls
//! back to (b); it is a pure read, safe to repeat on every render - unlike
//! the stores, nothing here is one-shot.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use nocturne_domain::{DieTag, RollContext};

use crate::entities::{ChatMessage, ChatMessageDraft};
use crate::infrastructure::correlation::CorrelationId;

/// Bumped whenever the payload shape changes; mismatched payloads read as
/// absent rather than half-parsed.
pub const ATTACHMENT_VERSION: u32 = 1;

/// Namespace for the flags channel: `flags.nocturne.rollTags`
pub const FLAGS_NAMESPACE: &str = "nocturne";
const FLAGS_KEY: &str = "rollTags";
/// Key for the die-options channel on the first result
const OPTIONS_KEY: &str = "nocturneTags";

/// The classified payload carried from draft to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollTagPayload {
    pub version: u32,
    pub correlation_id: CorrelationId,
    /// The consumed pending context, carried whole so outcome recomputation
    /// at render time needs nothing else
    pub context: RollContext,
    /// One tag per elementary die result, in consumption order
    pub tags: Vec<DieTag>,
}

impl RollTagPayload {
    pub fn new(context: RollContext, tags: Vec<DieTag>) -> Self {
        Self {
            version: ATTACHMENT_VERSION,
            correlation_id: CorrelationId::new(),
            context,
            tags,
        }
    }
}

/// Write the payload into both channels of the draft.
///
/// Serialization failure is logged and swallowed - attachment is decoration,
/// never allowed to break the host's message creation.
pub fn attach(draft: &mut ChatMessageDraft, payload: &RollTagPayload) {
    let value = match serde_json::to_value(payload) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, correlation_id = %payload.correlation_id.short(), "failed to serialize roll tag payload");
            return;
        }
    };

    // Channel (a): options map of the first elementary die result.
    if let Some(first) = draft
        .rolls
        .first_mut()
        .and_then(|roll| roll.results.first_mut())
    {
        first.options.insert(OPTIONS_KEY.to_string(), value.clone());
    }

    // Channel (b): namespaced flags entry.
    let namespace = draft
        .flags
        .entry(FLAGS_NAMESPACE.to_string())
        .or_insert_with(|| Value::Object(serde_json::Map::new()));
    if let Value::Object(map) = namespace {
        map.insert(FLAGS_KEY.to_string(), value);
    }
}

/// Read the payload back from a created message, options channel first.
///
/// Returns `None` for messages that never went through the pipeline, for
/// stripped channels, and for version mismatches - all silent, expected
/// cases.
pub fn extract(message: &ChatMessage) -> Option<RollTagPayload> {
    let from_options = message
        .rolls
        .first()
        .and_then(|roll| roll.results.first())
        .and_then(|die| die.options.get(OPTIONS_KEY));
    let from_flags = message
        .flags
        .get(FLAGS_NAMESPACE)
        .and_then(|ns| ns.get(FLAGS_KEY));

    let raw = from_options.or(from_flags)?;
    let payload: RollTagPayload = match serde_json::from_value(raw.clone()) {
        Ok(payload) => payload,
        Err(error) => {
            tracing::debug!(message_id = %message.id, %error, "unreadable roll tag payload, treating as absent");
            return None;
        }
    };
    if payload.version != ATTACHMENT_VERSION {
        tracing::debug!(
            message_id = %message.id,
            version = payload.version,
            "roll tag payload version mismatch, treating as absent"
        );
        return None;
    }
    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{RollData, SpeakerRef};
    use nocturne_domain::{ActorRef, RollOrigin};

    fn payload() -> RollTagPayload {
        let context = RollContext::new(
            ActorRef::new("Actor.1").unwrap(),
            RollOrigin::General,
            6,
            2,
        );
        RollTagPayload::new(context, vec![DieTag::Primary, DieTag::Primary])
    }

    fn draft() -> ChatMessageDraft {
        ChatMessageDraft::new(
            SpeakerRef::for_actor("Actor.1"),
            1_000,
            vec![RollData::d10([7, 3])],
        )
    }

    #[test]
    fn test_attach_then_extract_via_options() {
        let mut draft = draft();
        let payload = payload();
        attach(&mut draft, &payload);
        let message = draft.into_message("msg-1");

        assert_eq!(extract(&message), Some(payload));
    }

    #[test]
    fn test_extract_falls_back_to_flags_when_options_stripped() {
        let mut draft = draft();
        let payload = payload();
        attach(&mut draft, &payload);
        let mut message = draft.into_message("msg-1");

        // Simulate the host rewriting die options during creation.
        for roll in &mut message.rolls {
            for die in &mut roll.results {
                die.options.clear();
            }
        }

        assert_eq!(extract(&message), Some(payload));
    }

    #[test]
    fn test_extract_none_when_both_channels_stripped() {
        let mut draft = draft();
        attach(&mut draft, &payload());
        let mut message = draft.into_message("msg-1");
        for roll in &mut message.rolls {
            for die in &mut roll.results {
                die.options.clear();
            }
        }
        message.flags.clear();

        assert_eq!(extract(&message), None);
    }

    #[test]
    fn test_extract_is_repeatable() {
        let mut draft = draft();
        attach(&mut draft, &payload());
        let message = draft.into_message("msg-1");

        let first = extract(&message);
        let second = extract(&message);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_version_mismatch_reads_as_absent() {
        let mut draft = draft();
        let mut stale = payload();
        stale.version = ATTACHMENT_VERSION + 1;
        attach(&mut draft, &stale);
        let message = draft.into_message("msg-1");

        assert_eq!(extract(&message), None);
    }

    #[test]
    fn test_attach_without_dice_still_writes_flags() {
        let mut draft = ChatMessageDraft::new(SpeakerRef::for_actor("Actor.1"), 1_000, vec![]);
        let payload = payload();
        attach(&mut draft, &payload);
        let message = draft.into_message("msg-1");

        assert_eq!(extract(&message), Some(payload));
    }

    #[test]
    fn test_attach_preserves_unrelated_flags() {
        let mut draft = draft();
        draft
            .flags
            .insert("host".to_string(), serde_json::json!({"keep": true}));
        attach(&mut draft, &payload());

        assert_eq!(draft.flags["host"]["keep"], true);
    }
}
