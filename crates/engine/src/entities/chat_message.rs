//! Chat message model.
//!
//! Mirrors the host's message shape closely enough for correlation: a speaker
//! composite, a creation timestamp, the rolled dice, and two open metadata
//! maps (per-die `options` and message-level `flags`) that the attachment
//! channels write into. Field-level semantics belong to the host; both maps
//! are opaque JSON to everything except the attachment module.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use nocturne_domain::ActorRef;

/// Speaker composite identifying who a message is attributed to.
///
/// All sub-identifiers are optional - the host fills whichever it knows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerRef {
    pub scene: Option<String>,
    pub token: Option<String>,
    pub actor: Option<String>,
    pub alias: Option<String>,
}

impl SpeakerRef {
    /// Speaker attributed to an actor only
    pub fn for_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
            ..Self::default()
        }
    }

    /// The speaker's actor as a domain ref, if one is set and non-empty.
    pub fn actor_ref(&self) -> Option<ActorRef> {
        self.actor
            .as_deref()
            .and_then(|id| ActorRef::new(id).ok())
    }
}

/// One elementary die result, with the host's open per-die options map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DieResult {
    pub value: u32,
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl DieResult {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            options: Map::new(),
        }
    }
}

/// One roll within a message: die size plus its results in consumption order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollData {
    pub faces: u32,
    pub results: Vec<DieResult>,
}

impl RollData {
    pub fn d10(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: 10,
            results: values.into_iter().map(DieResult::new).collect(),
        }
    }
}

/// Mutable pre-creation draft of a chat message (no stable id yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDraft {
    pub speaker: SpeakerRef,
    pub timestamp_ms: u64,
    pub rolls: Vec<RollData>,
    #[serde(default)]
    pub flags: Map<String, Value>,
}

impl ChatMessageDraft {
    pub fn new(speaker: SpeakerRef, timestamp_ms: u64, rolls: Vec<RollData>) -> Self {
        Self {
            speaker,
            timestamp_ms,
            rolls,
            flags: Map::new(),
        }
    }

    /// All die values across rolls, in engine consumption order.
    pub fn dice_values(&self) -> Vec<u32> {
        self.rolls
            .iter()
            .flat_map(|roll| roll.results.iter().map(|r| r.value))
            .collect()
    }

    pub fn dice_count(&self) -> usize {
        self.rolls.iter().map(|roll| roll.results.len()).sum()
    }

    /// Promote the draft to a created message with its host-assigned id.
    pub fn into_message(self, id: impl Into<String>) -> ChatMessage {
        ChatMessage {
            id: id.into(),
            speaker: self.speaker,
            timestamp_ms: self.timestamp_ms,
            rolls: self.rolls,
            flags: self.flags,
        }
    }
}

/// A created chat message with a stable host-assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub speaker: SpeakerRef,
    pub timestamp_ms: u64,
    pub rolls: Vec<RollData>,
    #[serde(default)]
    pub flags: Map<String, Value>,
}

impl ChatMessage {
    /// All die values across rolls, in engine consumption order.
    pub fn dice_values(&self) -> Vec<u32> {
        self.rolls
            .iter()
            .flat_map(|roll| roll.results.iter().map(|r| r.value))
            .collect()
    }

    pub fn dice_count(&self) -> usize {
        self.rolls.iter().map(|roll| roll.results.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_values_cross_roll_order() {
        let draft = ChatMessageDraft::new(
            SpeakerRef::for_actor("Actor.1"),
            1_000,
            vec![RollData::d10([10, 7]), RollData::d10([3])],
        );
        assert_eq!(draft.dice_values(), vec![10, 7, 3]);
        assert_eq!(draft.dice_count(), 3);
    }

    #[test]
    fn test_actor_ref_absent_or_empty() {
        assert_eq!(SpeakerRef::default().actor_ref(), None);
        let speaker = SpeakerRef {
            actor: Some(String::new()),
            ..SpeakerRef::default()
        };
        assert_eq!(speaker.actor_ref(), None);
    }

    #[test]
    fn test_into_message_keeps_fields() {
        let mut draft = ChatMessageDraft::new(
            SpeakerRef::for_actor("Actor.1"),
            1_000,
            vec![RollData::d10([5])],
        );
        draft
            .flags
            .insert("marker".to_string(), Value::Bool(true));
        let message = draft.clone().into_message("msg-1");
        assert_eq!(message.id, "msg-1");
        assert_eq!(message.flags, draft.flags);
        assert_eq!(message.dice_values(), vec![5]);
    }
}
