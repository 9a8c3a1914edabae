//! Nocturne Engine - demo entry point.
//!
//! Wires the composition root and drives a short simulated host session
//! through all four lifecycle hooks, logging recomputed outcomes. A real
//! host embeds `RollPipeline` and calls the hooks from its own events
//! instead.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

mod entities;
mod infrastructure;
mod stores;
mod use_cases;

use entities::{ChatMessageDraft, RollData, SpeakerRef};
use infrastructure::{ClockPort, HomebrewSettings, SystemClock};
use nocturne_domain::{ActorRef, RollOrigin};
use stores::{DraftStash, PendingRollStore};
use use_cases::{OutcomeSink, RenderedRoll, RollParams, RollPipeline};

/// Sink that logs rendered outcomes instead of drawing chat cards
struct TracingOutcomeSink;

#[async_trait]
impl OutcomeSink for TracingOutcomeSink {
    async fn present(&self, rendered: RenderedRoll) {
        tracing::info!(
            message_id = %rendered.message_id,
            actor = %rendered.context.actor,
            origin = %rendered.context.origin,
            dice = ?rendered.values,
            tags = ?rendered.tags,
            outcome = %rendered.outcome,
            "rendered roll"
        );
    }
}

/// Roll a d10 pool the way the external engine consumes it: an exploding
/// ten's extra die lands immediately after its predecessor.
fn roll_pool(pool_size: u32, explode: bool) -> Vec<u32> {
    fn roll_die(rng: &mut impl Rng, explode: bool, out: &mut Vec<u32>) {
        let value = rng.gen_range(1..=10);
        out.push(value);
        if explode && value == 10 {
            roll_die(rng, explode, out);
        }
    }
    let mut rng = rand::thread_rng();
    let mut values = Vec::with_capacity(pool_size as usize);
    for _ in 0..pool_size {
        roll_die(&mut rng, explode, &mut values);
    }
    values
}

async fn simulate_action(
    pipeline: &RollPipeline,
    actor_id: &str,
    params: RollParams,
) -> anyhow::Result<()> {
    let actor = ActorRef::new(actor_id)?;
    let pool_size = params.pool_size;
    let explode = true;
    pipeline.action_initiated(actor, params).await;

    // The "external engine": rolls the dice and builds the message draft.
    let values = roll_pool(pool_size, explode);
    let mut draft = ChatMessageDraft::new(
        SpeakerRef::for_actor(actor_id),
        pipeline.now_millis(),
        vec![RollData::d10(values)],
    );

    pipeline.message_pre_create(&mut draft).await;
    let message = draft.into_message(Uuid::new_v4().to_string());
    pipeline.message_created(&message).await;
    pipeline.message_rendered(&message).await;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present; real settings come from NOCTURNE_* variables.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nocturne_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Nocturne demo session");

    let settings = HomebrewSettings::from_env();
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let pending = Arc::new(PendingRollStore::new(clock.clone()));
    let stash = Arc::new(DraftStash::new(
        clock.clone(),
        settings.draft_ttl_ms,
        settings.draft_queue_cap,
    ));
    let pipeline = RollPipeline::new(
        pending,
        stash,
        clock.clone(),
        settings,
        Arc::new(TracingOutcomeSink),
    );

    // A plain attribute roll.
    simulate_action(
        &pipeline,
        "Actor.maeve",
        RollParams::new(RollOrigin::General, 6, 5),
    )
    .await?;

    // A soak roll backed by a willpower spend.
    let mut soak = RollParams::new(RollOrigin::Soak, 6, 3);
    soak.spends_willpower = true;
    simulate_action(&pipeline, "Actor.maeve", soak).await?;

    // A specialized discipline roll with fate dice in the pool.
    let mut power = RollParams::new(RollOrigin::Power, 7, 6);
    power.is_specialized = true;
    power.specialty_dice = 2;
    power.fate_dice = 1;
    simulate_action(&pipeline, "Actor.silas", power).await?;

    Ok(())
}
