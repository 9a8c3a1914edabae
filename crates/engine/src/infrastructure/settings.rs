//! Home-rule and pipeline configuration.
//!
//! Settings load from `NOCTURNE_*` environment variables with sensible
//! defaults; the demo binary loads `.env` first via dotenvy. Unparseable
//! values fall back to the default rather than failing startup.

use serde::{Deserialize, Serialize};

use nocturne_domain::ResolutionRules;

/// Operational settings for the correlation pipeline and home rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomebrewSettings {
    /// A ten on a specialized roll counts as two successes
    pub specialty_doubles_tens: bool,
    /// Flat success value of a ten when the specialty rule does not apply
    pub ten_bonus: Option<u32>,
    /// Tens add an extra die of the same type to the pool
    pub explode_tens: bool,
    /// How long a pending roll context stays consumable
    pub pending_ttl_ms: u64,
    /// How long queued/stashed draft payloads survive unconsumed
    pub draft_ttl_ms: u64,
    /// Max queued drafts per correlation key before oldest are dropped
    pub draft_queue_cap: usize,
}

impl Default for HomebrewSettings {
    fn default() -> Self {
        Self {
            specialty_doubles_tens: true,
            ten_bonus: None,
            explode_tens: true,
            pending_ttl_ms: 20_000,
            draft_ttl_ms: 60_000,
            draft_queue_cap: 5,
        }
    }
}

impl HomebrewSettings {
    /// Load settings from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            specialty_doubles_tens: env_bool(
                "NOCTURNE_SPECIALTY_DOUBLES_TENS",
                defaults.specialty_doubles_tens,
            ),
            ten_bonus: std::env::var("NOCTURNE_TEN_BONUS")
                .ok()
                .and_then(|v| v.parse().ok()),
            explode_tens: env_bool("NOCTURNE_EXPLODE_TENS", defaults.explode_tens),
            pending_ttl_ms: env_parse("NOCTURNE_PENDING_TTL_MS", defaults.pending_ttl_ms),
            draft_ttl_ms: env_parse("NOCTURNE_DRAFT_TTL_MS", defaults.draft_ttl_ms),
            draft_queue_cap: env_parse("NOCTURNE_DRAFT_QUEUE_CAP", defaults.draft_queue_cap),
        }
    }

    /// Rule toggles in the form the domain resolution engine consumes.
    pub fn resolution_rules(&self) -> ResolutionRules {
        ResolutionRules {
            specialty_doubles_tens: self.specialty_doubles_tens,
            ten_bonus: self.ten_bonus,
            explode_tens: self.explode_tens,
        }
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(v) => matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
        Err(_) => default,
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
