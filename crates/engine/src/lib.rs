//! Nocturne engine library.
//!
//! The ephemeral action-correlation pipeline: carries per-actor roll context
//! from action initiation, past the host's uninstrumentable dice roll, to the
//! chat message render, where dice are reclassified and the outcome is
//! recomputed under the home rules.
//!
//! ## Structure
//!
//! - `entities/` - Models of host-owned artifacts (chat messages, speakers)
//! - `stores/` - Session-scoped pending-context and draft stores
//! - `use_cases/` - Correlation keys, metadata attachment, the hook pipeline
//! - `infrastructure/` - Clock port, correlation ids, settings

pub mod entities;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use use_cases::roll_pipeline::{OutcomeSink, RenderedRoll, RollParams, RollPipeline};
