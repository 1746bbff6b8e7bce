//! Match-long bot state: the map, the pellet memory and the wander RNG

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::BotConfig;
use crate::core::snapshot::RoundSnapshot;
use crate::driver::round::run_round;
use crate::map::GameMap;
use crate::memory::PelletMemory;
use crate::policy::command::CommandBatch;

/// One bot for one match
pub struct Bot {
    map: GameMap,
    memory: PelletMemory,
    config: BotConfig,
    rng: ChaCha8Rng,
    seed: u64,
}

impl Bot {
    /// Create a bot for the given map; seeds memory from the map's floor cells
    pub fn new(map: GameMap, config: BotConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let memory = PelletMemory::new(&map);
        tracing::info!(
            width = map.width,
            height = map.height,
            seed,
            horizon = config.threat_horizon,
            "bot ready"
        );

        Self {
            map,
            memory,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Decide every owned pac's command for this round
    pub fn play_round(&mut self, snapshot: &RoundSnapshot) -> CommandBatch {
        let batch = run_round(
            &self.map,
            &mut self.memory,
            snapshot,
            &self.config,
            &mut self.rng,
        );
        tracing::debug!(
            round = snapshot.round,
            my_score = snapshot.my_score,
            opponent_score = snapshot.opponent_score,
            enemies_in_sight = snapshot.enemy_pacs().count(),
            believed_total = self.memory.believed_total(),
            "round complete"
        );
        batch
    }

    pub fn memory(&self) -> &PelletMemory {
        &self.memory
    }

    /// Seed actually used for the wander RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
