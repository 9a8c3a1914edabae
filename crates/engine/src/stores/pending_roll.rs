//! Pending roll context storage.
//!
//! Single-slot-per-actor store for in-flight action context. Writing again
//! for the same actor replaces the previous entry (most recent request wins);
//! reads are one-shot consume-and-delete. Absence and staleness are expected
//! outcomes, never errors.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use nocturne_domain::{ActorRef, RollContext};

use crate::infrastructure::ports::ClockPort;

/// Result of a one-shot pending-context lookup
#[derive(Debug, Clone, PartialEq)]
pub enum PendingLookup {
    /// A context was pending and within the age limit
    Fresh(RollContext),
    /// A context was pending but too old; it has been purged
    Stale,
    /// Nothing was pending for this actor
    Missing,
}

impl PendingLookup {
    pub fn into_fresh(self) -> Option<RollContext> {
        match self {
            PendingLookup::Fresh(ctx) => Some(ctx),
            _ => None,
        }
    }
}

struct PendingEntry {
    context: RollContext,
    created_at_ms: u64,
}

/// At most one non-stale pending context per actor.
pub struct PendingRollStore {
    entries: RwLock<HashMap<ActorRef, PendingEntry>>,
    clock: Arc<dyn ClockPort>,
}

impl PendingRollStore {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Store a pending context, unconditionally replacing any existing entry
    /// for the same actor and stamping it with the current time.
    pub async fn set_pending(&self, context: RollContext) {
        let entry = PendingEntry {
            created_at_ms: self.clock.now_millis(),
            context,
        };
        let key = entry.context.actor.clone();
        self.entries.write().await.insert(key, entry);
    }

    /// Consume the pending context for an actor (one-shot).
    ///
    /// The entry is removed whether fresh or stale; stale entries report
    /// [`PendingLookup::Stale`] so callers can log the miss.
    pub async fn consume_pending(&self, actor: &ActorRef, max_age_ms: u64) -> PendingLookup {
        let entry = match self.entries.write().await.remove(actor) {
            Some(entry) => entry,
            None => return PendingLookup::Missing,
        };
        let age_ms = self.clock.now_millis().saturating_sub(entry.created_at_ms);
        if age_ms > max_age_ms {
            PendingLookup::Stale
        } else {
            PendingLookup::Fresh(entry.context)
        }
    }

    /// Number of pending entries, stale or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
