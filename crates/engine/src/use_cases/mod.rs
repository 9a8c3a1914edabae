//! Use cases: correlation key derivation, metadata attachment, and the
//! lifecycle hook pipeline that orchestrates stores and rules.

pub mod attachment;
pub mod correlation_key;
pub mod roll_pipeline;

pub use attachment::RollTagPayload;
pub use roll_pipeline::{OutcomeSink, RenderedRoll, RollParams, RollPipeline};
