//! Draft-to-message stash.
//!
//! Bridges the gap between "context known, message not yet created" and
//! "message exists with a stable id". Payloads queue FIFO under a best-effort
//! correlation key; when the real message appears they are re-keyed under its
//! id. Both maps are swept on every mutating call so memory stays bounded
//! even if consumers never show up.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::infrastructure::ports::ClockPort;

struct Stamped<V> {
    value: V,
    queued_at_ms: u64,
}

/// FIFO draft queue plus message-keyed stash with TTL sweeping.
///
/// Correlation keys are not unique (see `use_cases::correlation_key`), so a
/// key may hold several queued payloads; they are served oldest-first. Over
/// the cap, oldest entries are dropped ("best recent wins").
pub struct DraftStash<V> {
    queues: RwLock<HashMap<String, VecDeque<Stamped<V>>>>,
    stashed: RwLock<HashMap<String, Stamped<V>>>,
    clock: Arc<dyn ClockPort>,
    ttl_ms: u64,
    cap: usize,
}

impl<V: Clone + Send + Sync> DraftStash<V> {
    pub fn new(clock: Arc<dyn ClockPort>, ttl_ms: u64, cap: usize) -> Self {
        Self {
            queues: RwLock::new(HashMap::new()),
            stashed: RwLock::new(HashMap::new()),
            clock,
            ttl_ms,
            cap,
        }
    }

    /// Append a payload to the FIFO queue for `key`.
    ///
    /// If the queue exceeds the cap, the oldest entries are dropped and the
    /// overflow is logged as a warning, not an error.
    pub async fn enqueue(&self, key: &str, value: V) {
        self.sweep().await;
        let mut queues = self.queues.write().await;
        let queue = queues.entry(key.to_string()).or_default();
        queue.push_back(Stamped {
            value,
            queued_at_ms: self.clock.now_millis(),
        });
        let mut dropped = 0usize;
        while queue.len() > self.cap {
            queue.pop_front();
            dropped += 1;
        }
        if dropped > 0 {
            tracing::warn!(key, dropped, "draft queue over cap, dropped oldest entries");
        }
    }

    /// Pop the oldest queued payload for `key` and re-key it under the
    /// stable `message_id`. Returns whether anything moved; an empty queue is
    /// a normal miss (the action never engaged the pipeline).
    pub async fn stash_for_message(&self, message_id: &str, key: &str) -> bool {
        self.sweep().await;
        let entry = {
            let mut queues = self.queues.write().await;
            match queues.get_mut(key) {
                Some(queue) => {
                    let entry = queue.pop_front();
                    if queue.is_empty() {
                        queues.remove(key);
                    }
                    entry
                }
                None => None,
            }
        };
        match entry {
            Some(entry) => {
                self.stashed
                    .write()
                    .await
                    .insert(message_id.to_string(), entry);
                true
            }
            None => false,
        }
    }

    /// One-shot read-and-delete keyed by message id.
    pub async fn consume_for_message(&self, message_id: &str) -> Option<V> {
        self.sweep().await;
        self.stashed
            .write()
            .await
            .remove(message_id)
            .map(|e| e.value)
    }

    /// Queued payload count for a key (expired entries included until the
    /// next sweep).
    pub async fn queue_len(&self, key: &str) -> usize {
        self.queues
            .read()
            .await
            .get(key)
            .map_or(0, VecDeque::len)
    }

    /// Drop entries older than the TTL from both maps.
    async fn sweep(&self) {
        let cutoff = self.clock.now_millis().saturating_sub(self.ttl_ms);
        {
            let mut queues = self.queues.write().await;
            for queue in queues.values_mut() {
                queue.retain(|e| e.queued_at_ms >= cutoff);
            }
            queues.retain(|_, queue| !queue.is_empty());
        }
        self.stashed
            .write()
            .await
            .retain(|_, e| e.queued_at_ms >= cutoff);
    }
}
