//! Round driver - one decision pass per round
//!
//! observe -> collect owned pacs -> partition pellets -> threat search -> select action
//!
//! A pac whose decision fails is held in place; the rest of the round goes on.

use rand::Rng;

use crate::core::config::BotConfig;
use crate::core::snapshot::RoundSnapshot;
use crate::map::GameMap;
use crate::memory::PelletMemory;
use crate::policy::action_select::{select_action, SelectionContext};
use crate::policy::command::{CommandBatch, Decision};
use crate::policy::zones::{partition, zone_bounds};
use crate::search::{enemies_within_range, Occupancy};

/// Run one round and return one decision per living owned pac
pub fn run_round<R: Rng + ?Sized>(
    map: &GameMap,
    memory: &mut PelletMemory,
    snapshot: &RoundSnapshot,
    config: &BotConfig,
    rng: &mut R,
) -> CommandBatch {
    memory.observe(map, snapshot);

    let my_pacs = snapshot.my_living_pacs();
    if my_pacs.is_empty() {
        tracing::warn!(round = snapshot.round, "no living pacs to command");
        return CommandBatch::new();
    }

    let zone_count = my_pacs.len();
    let zones = partition(&memory.believed_pellets(map), zone_count, map.width);
    let occupancy = Occupancy::from_snapshot(map, snapshot);

    let mut batch = CommandBatch::with_capacity(zone_count);
    for (zone, pac) in my_pacs.iter().enumerate() {
        let threats = enemies_within_range(map, &occupancy, pac.pos, config.threat_horizon);
        let ctx = SelectionContext {
            map,
            memory,
            zone: zone_bounds(zone, zone_count, map.width),
            candidates: &zones[zone],
            threats: &threats,
        };

        let decision = match select_action(pac, &ctx, rng) {
            Ok(decision) => decision,
            Err(e) => {
                tracing::error!(round = snapshot.round, pac = pac.id, error = %e, "decision failed, holding");
                Decision::hold(pac)
            }
        };

        tracing::debug!(
            round = snapshot.round,
            pac = pac.id,
            zone,
            candidates = zones[zone].len(),
            threats = threats.len(),
            intent = decision.intent.label(),
            command = %decision.command,
            "pac decided"
        );
        batch.push(decision);
    }

    batch
}
