//! In-memory state storage modules.
//!
//! Stores hold runtime state scoped to the running session - nothing here is
//! persisted across restarts:
//! - `PendingRollStore` - roll context awaiting its chat message
//! - `DraftStash` - classified payloads bridging draft to stable message id

pub mod draft_stash;
pub mod pending_roll;

pub use draft_stash::DraftStash;
pub use pending_roll::{PendingLookup, PendingRollStore};
