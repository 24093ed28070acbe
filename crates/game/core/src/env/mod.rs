//! Read-only facts the engine consults while executing actions.
//!
//! [`GameEnv`] bundles the rule configuration and the RNG oracle so actions
//! can read them without coupling to concrete implementations.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::config::GameConfig;
use crate::dice::{DicePair, Die, Side};

/// Context offset separating cosmetic frames from the settled roll.
const TUMBLE_CONTEXT_BASE: u32 = 0x100;

/// Aggregates the read-only inputs required by the action pipeline.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a dyn RngOracle) -> Self {
        Self { config, rng }
    }

    /// Default rules with the PCG oracle.
    pub fn standard() -> GameEnv<'static> {
        GameEnv {
            config: &GameConfig::DEFAULT,
            rng: &PcgRng,
        }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    /// Draws the pair a side actually rolls for the round identified by `nonce`.
    pub fn roll_pair(&self, game_seed: u64, nonce: u64, side: Side) -> DicePair {
        DicePair::new(
            self.roll_die(game_seed, nonce, side, 0),
            self.roll_die(game_seed, nonce, side, 1),
        )
    }

    /// Draws a cosmetic pair for one animation frame.
    ///
    /// Frames use their own seed contexts and never influence [`Self::roll_pair`].
    pub fn tumble_pair(&self, game_seed: u64, nonce: u64, frame: u32, side: Side) -> DicePair {
        let context = TUMBLE_CONTEXT_BASE.wrapping_add(frame.wrapping_mul(2));
        DicePair::new(
            self.roll_die(game_seed, nonce, side, context),
            self.roll_die(game_seed, nonce, side, context.wrapping_add(1)),
        )
    }

    fn roll_die(&self, game_seed: u64, nonce: u64, side: Side, context: u32) -> Die {
        let seed = compute_seed(game_seed, nonce, side.index(), context);
        Die::from_roll(
            self.rng
                .roll_die(seed, u32::from(GameConfig::DIE_FACES)),
        )
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
