//! Models of host-owned artifacts.
//!
//! The host creates, persists, and deletes these; the pipeline only reads
//! them and decorates drafts in place.

pub mod chat_message;

pub use chat_message::{ChatMessage, ChatMessageDraft, DieResult, RollData, SpeakerRef};
