//! Roll lifecycle pipeline.
//!
//! The hook surface the host calls at each lifecycle event, replacing the
//! original module's prototype patching with an explicit extension point:
//!
//! 1. `action_initiated` - before the external engine rolls anything
//! 2. `message_pre_create` - with the mutable draft and final results
//! 3. `message_created` - once the message has a stable id
//! 4. `message_rendered` - on every render, possibly repeated
//!
//! The pipeline is a passive decorator: every hook handles its own failures
//! internally and returns nothing, so a broken correlation can never block
//! the host's own action flow. Missing context is the common case - most
//! messages never engage the pipeline at all.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use nocturne_domain::{
    classify_dice, resolve_outcome, ActorRef, DieTag, Outcome, PoolShape, RollContext, RollOrigin,
};

use crate::entities::{ChatMessage, ChatMessageDraft};
use crate::infrastructure::correlation::CorrelationId;
use crate::infrastructure::ports::ClockPort;
use crate::infrastructure::settings::HomebrewSettings;
use crate::stores::{DraftStash, PendingLookup, PendingRollStore};
use crate::use_cases::attachment::{self, RollTagPayload};
use crate::use_cases::correlation_key::draft_key;

/// Action-shape parameters supplied by the initiation event
#[derive(Debug, Clone, PartialEq)]
pub struct RollParams {
    pub origin: RollOrigin,
    pub difficulty: u32,
    pub pool_size: u32,
    pub specialty_dice: u32,
    pub fate_dice: u32,
    pub is_specialized: bool,
    pub spends_willpower: bool,
    pub bonus_successes: u32,
}

impl RollParams {
    /// Plain roll with no bonuses or spends
    pub fn new(origin: RollOrigin, difficulty: u32, pool_size: u32) -> Self {
        Self {
            origin,
            difficulty,
            pool_size,
            specialty_dice: 0,
            fate_dice: 0,
            is_specialized: false,
            spends_willpower: false,
            bonus_successes: 0,
        }
    }

    fn into_context(self, actor: ActorRef) -> RollContext {
        RollContext {
            actor,
            origin: self.origin,
            difficulty: self.difficulty,
            is_specialized: self.is_specialized,
            spends_willpower: self.spends_willpower,
            bonus_successes: self.bonus_successes,
            pool_size: self.pool_size,
            specialty_dice: self.specialty_dice,
            fate_dice: self.fate_dice,
        }
    }
}

/// Fully recomputed view of a rendered roll, handed to the sink
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRoll {
    pub message_id: String,
    pub correlation_id: CorrelationId,
    pub context: RollContext,
    /// One tag per die value, same order as `values`
    pub tags: Vec<DieTag>,
    pub values: Vec<u32>,
    pub outcome: Outcome,
}

/// Rendering collaborator receiving recomputed outcomes.
///
/// What it does with them (DOM injection, chat cards, logging) is out of
/// scope here.
#[async_trait]
pub trait OutcomeSink: Send + Sync {
    async fn present(&self, rendered: RenderedRoll);
}

/// The ephemeral action-correlation pipeline.
///
/// Constructed once at the composition root with its stores injected; the
/// stores are session-scoped and shared with nothing else.
pub struct RollPipeline {
    pending: Arc<PendingRollStore>,
    stash: Arc<DraftStash<RollTagPayload>>,
    clock: Arc<dyn ClockPort>,
    settings: HomebrewSettings,
    sink: Arc<dyn OutcomeSink>,
}

impl RollPipeline {
    pub fn new(
        pending: Arc<PendingRollStore>,
        stash: Arc<DraftStash<RollTagPayload>>,
        clock: Arc<dyn ClockPort>,
        settings: HomebrewSettings,
        sink: Arc<dyn OutcomeSink>,
    ) -> Self {
        Self {
            pending,
            stash,
            clock,
            settings,
            sink,
        }
    }

    /// Hook 1: an actor initiated a roll; stash its context before the
    /// external engine takes over.
    pub async fn action_initiated(&self, actor: ActorRef, params: RollParams) {
        debug!(actor = %actor, origin = %params.origin, "roll initiated, storing pending context");
        self.pending.set_pending(params.into_context(actor)).await;
    }

    /// Hook 2: the message draft exists with final results but no id yet.
    ///
    /// Consumes the pending context, classifies the dice, attaches the
    /// payload to the draft, and queues it for the post-create rekey.
    pub async fn message_pre_create(&self, draft: &mut ChatMessageDraft) {
        let Some(actor) = draft.speaker.actor_ref() else {
            debug!("draft has no speaker actor, skipping");
            return;
        };

        let context = match self
            .pending
            .consume_pending(&actor, self.settings.pending_ttl_ms)
            .await
        {
            PendingLookup::Fresh(context) => context,
            PendingLookup::Stale => {
                warn!(actor = %actor, "pending roll context was stale, ignoring");
                return;
            }
            PendingLookup::Missing => {
                debug!(actor = %actor, "no pending roll context for draft");
                return;
            }
        };

        let values = draft.dice_values();
        let shape = PoolShape::from_context(&context);
        let tags = classify_dice(shape, &values, self.settings.explode_tens);
        let payload = RollTagPayload::new(context, tags);

        attachment::attach(draft, &payload);
        let key = draft_key(&draft.speaker, draft.timestamp_ms, values.len());
        debug!(
            key = %key,
            correlation_id = %payload.correlation_id.short(),
            dice = values.len(),
            "classified draft, queueing payload"
        );
        self.stash.enqueue(&key, payload).await;
    }

    /// Hook 3: the message now has a stable id; move the queued payload
    /// onto it.
    pub async fn message_created(&self, message: &ChatMessage) {
        let key = draft_key(&message.speaker, message.timestamp_ms, message.dice_count());
        if self.stash.stash_for_message(&message.id, &key).await {
            debug!(message_id = %message.id, key = %key, "stashed payload under stable message id");
        }
    }

    /// Hook 4: the message is being rendered (possibly again).
    ///
    /// Recomputes the outcome from the attached payload and hands it to the
    /// sink. Attached channels make this idempotent across re-renders; when
    /// the host stripped both, the one-shot stash covers the first render
    /// only.
    pub async fn message_rendered(&self, message: &ChatMessage) {
        let payload = match attachment::extract(message) {
            Some(payload) => payload,
            None => match self.stash.consume_for_message(&message.id).await {
                Some(payload) => payload,
                None => {
                    debug!(message_id = %message.id, "no roll classification on message");
                    return;
                }
            },
        };

        let values = message.dice_values();
        let rules = self.settings.resolution_rules();
        let outcome = resolve_outcome(&values, &payload.context, &rules);
        debug!(
            message_id = %message.id,
            correlation_id = %payload.correlation_id.short(),
            outcome = %outcome,
            "recomputed roll outcome"
        );

        self.sink
            .present(RenderedRoll {
                message_id: message.id.clone(),
                correlation_id: payload.correlation_id,
                context: payload.context,
                tags: payload.tags,
                values,
                outcome,
            })
            .await;
    }

    /// Current wall-clock milliseconds, for hosts that build drafts
    /// themselves and need a timestamp consistent with the pipeline's clock.
    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }
}
