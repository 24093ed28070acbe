#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use game_core::{GameConfig, GameState, RngOracle, Side, compute_seed};
use runtime::{
    AnimationEvent, Event, Feedback, FeedbackEvent, Runtime, RuntimeConfig, RuntimeHandle, Topic,
};
use tokio::sync::broadcast;

pub const SEED: u64 = 0xB0B3;

/// Oracle that lands chosen faces for chosen rounds and a 3 everywhere else.
#[derive(Default)]
pub struct ScriptedDice {
    faces: HashMap<u64, u32>,
}

impl ScriptedDice {
    /// Loads the pair `side` rolls when settling under `nonce`.
    pub fn load(mut self, nonce: u64, side: Side, first: u8, second: u8) -> Self {
        for (context, face) in [(0, first), (1, second)] {
            let seed = compute_seed(SEED, nonce, side.index(), context);
            self.faces.insert(seed, u32::from(face) - 1);
        }
        self
    }
}

impl RngOracle for ScriptedDice {
    fn next_u32(&self, seed: u64) -> u32 {
        self.faces.get(&seed).copied().unwrap_or(2)
    }
}

pub fn state_with(balance: u64, wager: u64) -> GameState {
    let mut state = GameState::new(&GameConfig::default(), SEED);
    state.balance = balance;
    state.wager = wager;
    state
}

pub async fn start(state: GameState, dice: ScriptedDice) -> Runtime {
    start_with(RuntimeConfig::default(), state, dice).await
}

pub async fn start_with(config: RuntimeConfig, state: GameState, dice: ScriptedDice) -> Runtime {
    Runtime::builder()
        .config(config)
        .initial_state(state)
        .rng(Arc::new(dice))
        .build()
        .await
        .expect("runtime should start")
}

/// Waits until the round in flight lands and returns the number of tumble frames seen.
pub async fn wait_for_landing(animation: &mut broadcast::Receiver<Event>) -> u32 {
    let mut frames = 0;
    loop {
        match animation.recv().await.expect("animation stream open") {
            Event::Animation(AnimationEvent::Frame { .. }) => frames += 1,
            Event::Animation(AnimationEvent::Finished { .. }) => return frames,
            _ => {}
        }
    }
}

pub async fn next_feedback(feedback: &mut broadcast::Receiver<Event>) -> Feedback {
    loop {
        if let Event::Feedback(FeedbackEvent::Shown(shown)) =
            feedback.recv().await.expect("feedback stream open")
        {
            return shown;
        }
    }
}

pub fn subscribe(handle: &RuntimeHandle, topic: Topic) -> broadcast::Receiver<Event> {
    handle.subscribe(topic)
}
