//! Per-pac action selection
//!
//! Each owned pac is decided independently:
//! 1. A nearby enemy triggers a combat response (boost, chase, switch or flee)
//! 2. Otherwise head for the best believed pellet in the pac's zone
//! 3. Otherwise wander to a random cell of the zone

use std::ops::Range;

use rand::Rng;
use tracing::debug;

use crate::core::error::Result;
use crate::core::snapshot::Pac;
use crate::core::types::Coord;
use crate::map::{GameMap, CARDINAL_DIRECTIONS};
use crate::memory::PelletMemory;
use crate::policy::command::{Command, Decision, Intent};
use crate::policy::zones::candidate_order;

/// Context provided to the action selection algorithm
pub struct SelectionContext<'a> {
    pub map: &'a GameMap,
    pub memory: &'a PelletMemory,
    /// Columns of the pac's zone
    pub zone: Range<usize>,
    /// Believed pellets inside the pac's zone
    pub candidates: &'a [Coord],
    /// Enemies found by the threat search, nearest layer first
    pub threats: &'a [&'a Pac],
}

/// Decide one command for one owned pac
pub fn select_action<R: Rng + ?Sized>(
    pac: &Pac,
    ctx: &SelectionContext,
    rng: &mut R,
) -> Result<Decision> {
    if let Some(enemy) = ctx.threats.first() {
        return respond_to_threat(pac, enemy, ctx.map);
    }

    if let Some(target) = best_candidate(pac, ctx) {
        return Ok(Decision::new(Command::move_to(pac.id, target), Intent::Harvest));
    }

    Ok(wander(pac, ctx, rng))
}

/// Fight, change type, or run from the nearest enemy
fn respond_to_threat(pac: &Pac, enemy: &Pac, map: &GameMap) -> Result<Decision> {
    if pac.pac_type.beats(&enemy.pac_type)? {
        debug!(pac = pac.id, enemy = enemy.id, "enemy is prey");
        if pac.ability_ready() {
            return Ok(Decision::new(Command::Speed { pac_id: pac.id }, Intent::Boost));
        }
        return Ok(Decision::new(Command::move_to(pac.id, enemy.pos), Intent::Engage));
    }

    let counter = enemy.pac_type.beaten_by()?;
    debug!(pac = pac.id, enemy = enemy.id, counter = %counter, "enemy is a threat");
    if pac.ability_ready() {
        return Ok(Decision::new(
            Command::Switch {
                pac_id: pac.id,
                pac_type: counter,
            },
            Intent::Switch,
        ));
    }

    match flee_target(map, pac.pos, enemy.pos) {
        Some(target) => Ok(Decision::new(Command::move_to(pac.id, target), Intent::Flee)),
        None => Ok(Decision::hold(pac)),
    }
}

/// Orthogonal floor neighbour that puts the most distance between us and `enemy`
///
/// Only cells strictly farther than the current one qualify. Ties go to the
/// first direction in north, south, west, east order.
pub fn flee_target(map: &GameMap, pos: Coord, enemy: Coord) -> Option<Coord> {
    let pos = map.wrap(pos);
    let current = map.torus_distance_squared(pos, enemy);
    let mut best: Option<(Coord, i64)> = None;

    for (dx, dy) in CARDINAL_DIRECTIONS {
        let next = map.wrap(pos.offset(dx, dy));
        if !map.is_floor(next) {
            continue;
        }
        let distance = map.torus_distance_squared(next, enemy);
        if distance <= current {
            continue;
        }
        if best.map_or(true, |(_, d)| distance > d) {
            best = Some((next, distance));
        }
    }

    best.map(|(coord, _)| coord)
}

fn best_candidate(pac: &Pac, ctx: &SelectionContext) -> Option<Coord> {
    let origin = ctx.map.wrap(pac.pos);
    ctx.candidates
        .iter()
        .min_by(|a, b| candidate_order(a, b, ctx.map, ctx.memory, origin))
        .copied()
}

/// Random cell in the pac's column band, anywhere vertically
fn wander<R: Rng + ?Sized>(pac: &Pac, ctx: &SelectionContext, rng: &mut R) -> Decision {
    let columns = if ctx.zone.is_empty() {
        0..ctx.map.width
    } else {
        ctx.zone.clone()
    };
    let x = rng.gen_range(columns) as i32;
    let y = rng.gen_range(0..ctx.map.height) as i32;

    Decision::new(Command::move_to(pac.id, Coord::new(x, y)), Intent::Wander)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BotError;
    use crate::core::types::PacType;
    use crate::map::Cell;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn open_map(width: usize, height: usize) -> GameMap {
        GameMap::new(width, height, vec![Cell::Floor; width * height]).unwrap()
    }

    fn context<'a>(
        map: &'a GameMap,
        memory: &'a PelletMemory,
        candidates: &'a [Coord],
        threats: &'a [&'a Pac],
    ) -> SelectionContext<'a> {
        SelectionContext {
            map,
            memory,
            zone: 0..map.width,
            candidates,
            threats,
        }
    }

    #[test]
    fn test_boost_when_prey_nearby() {
        let map = open_map(10, 10);
        let memory = PelletMemory::new(&map);
        let pac = Pac::new(0, true, Coord::new(2, 2), PacType::Paper);
        let enemy = Pac::new(0, false, Coord::new(4, 2), PacType::Rock);
        let threats = [&enemy];
        let ctx = context(&map, &memory, &[], &threats);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let decision = select_action(&pac, &ctx, &mut rng).unwrap();
        assert_eq!(decision.command, Command::Speed { pac_id: 0 });
        assert_eq!(decision.intent, Intent::Boost);
    }

    #[test]
    fn test_chase_prey_on_cooldown() {
        let map = open_map(10, 10);
        let memory = PelletMemory::new(&map);
        let pac = Pac::new(0, true, Coord::new(2, 2), PacType::Paper).with_cooldown(5);
        let enemy = Pac::new(0, false, Coord::new(4, 2), PacType::Rock);
        let threats = [&enemy];
        let ctx = context(&map, &memory, &[], &threats);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let decision = select_action(&pac, &ctx, &mut rng).unwrap();
        assert_eq!(decision.command, Command::move_to(0, Coord::new(4, 2)));
        assert_eq!(decision.intent, Intent::Engage);
    }

    #[test]
    fn test_switch_to_counter_type() {
        let map = open_map(10, 10);
        let memory = PelletMemory::new(&map);
        let pac = Pac::new(1, true, Coord::new(2, 2), PacType::Rock);
        let enemy = Pac::new(0, false, Coord::new(3, 3), PacType::Paper);
        let threats = [&enemy];
        let ctx = context(&map, &memory, &[], &threats);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let decision = select_action(&pac, &ctx, &mut rng).unwrap();
        assert_eq!(
            decision.command,
            Command::Switch {
                pac_id: 1,
                pac_type: PacType::Scissors
            }
        );
    }

    #[test]
    fn test_same_type_standoff_switches() {
        let map = open_map(10, 10);
        let memory = PelletMemory::new(&map);
        let pac = Pac::new(1, true, Coord::new(2, 2), PacType::Rock);
        let enemy = Pac::new(0, false, Coord::new(3, 2), PacType::Rock);
        let threats = [&enemy];
        let ctx = context(&map, &memory, &[], &threats);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let decision = select_action(&pac, &ctx, &mut rng).unwrap();
        assert_eq!(
            decision.command,
            Command::Switch {
                pac_id: 1,
                pac_type: PacType::Paper
            }
        );
    }

    #[test]
    fn test_flee_on_cooldown() {
        // Corridor: enemy to the east, only the west step gains distance
        let map = GameMap::from_rows(&["#########", "#       #", "#########"]).unwrap();
        let memory = PelletMemory::new(&map);
        let pac = Pac::new(0, true, Coord::new(3, 1), PacType::Rock).with_cooldown(2);
        let enemy = Pac::new(0, false, Coord::new(5, 1), PacType::Paper);
        let threats = [&enemy];
        let ctx = context(&map, &memory, &[], &threats);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let decision = select_action(&pac, &ctx, &mut rng).unwrap();
        assert_eq!(decision.command, Command::move_to(0, Coord::new(2, 1)));
        assert_eq!(decision.intent, Intent::Flee);
    }

    #[test]
    fn test_boxed_in_pac_holds() {
        let map = GameMap::from_rows(&["#####", "#  ##", "#####"]).unwrap();
        let memory = PelletMemory::new(&map);
        let pac = Pac::new(0, true, Coord::new(1, 1), PacType::Rock).with_cooldown(2);
        let enemy = Pac::new(0, false, Coord::new(2, 1), PacType::Paper);
        let threats = [&enemy];
        let ctx = context(&map, &memory, &[], &threats);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let decision = select_action(&pac, &ctx, &mut rng).unwrap();
        assert_eq!(decision.command, Command::stay(&pac));
        assert_eq!(decision.intent, Intent::Hold);
    }

    #[test]
    fn test_flee_tie_prefers_north() {
        let map = open_map(9, 9);
        // Enemy due east: stepping straight back beats sidestepping
        let target = flee_target(&map, Coord::new(4, 4), Coord::new(5, 4));
        assert_eq!(target, Some(Coord::new(3, 4)));

        // Enemy diagonal south-east: north and west tie, north wins
        let target = flee_target(&map, Coord::new(4, 4), Coord::new(5, 5));
        assert_eq!(target, Some(Coord::new(4, 3)));
    }

    #[test]
    fn test_dead_enemy_type_is_an_error() {
        let map = open_map(5, 5);
        let memory = PelletMemory::new(&map);
        let pac = Pac::new(0, true, Coord::new(1, 1), PacType::Rock);
        let corpse = Pac::new(0, false, Coord::new(2, 1), PacType::Dead);
        let threats = [&corpse];
        let ctx = context(&map, &memory, &[], &threats);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = select_action(&pac, &ctx, &mut rng);
        assert!(matches!(result, Err(BotError::NoCounterType(PacType::Dead))));
    }

    #[test]
    fn test_harvest_best_candidate() {
        let map = open_map(10, 10);
        let memory = PelletMemory::new(&map);
        let pac = Pac::new(0, true, Coord::new(0, 0), PacType::Rock);
        let candidates = [Coord::new(5, 5), Coord::new(1, 1), Coord::new(2, 0)];
        let ctx = context(&map, &memory, &candidates, &[]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let decision = select_action(&pac, &ctx, &mut rng).unwrap();
        assert_eq!(decision.command, Command::move_to(0, Coord::new(1, 1)));
        assert_eq!(decision.intent, Intent::Harvest);
    }

    #[test]
    fn test_extreme_positions_are_wrapped_first() {
        let map = open_map(8, 3);
        let memory = PelletMemory::new(&map);
        // i32::MIN lands on column 0
        let pac = Pac::new(0, true, Coord::new(i32::MIN, 1), PacType::Rock);
        let candidates = [Coord::new(6, 1), Coord::new(2, 1)];
        let ctx = context(&map, &memory, &candidates, &[]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let decision = select_action(&pac, &ctx, &mut rng).unwrap();
        assert_eq!(decision.command, Command::move_to(0, Coord::new(2, 1)));

        let target = flee_target(&map, Coord::new(i32::MAX, 1), Coord::new(0, 1));
        assert_eq!(target, Some(Coord::new(6, 1)));
    }

    #[test]
    fn test_wander_stays_in_zone() {
        let map = open_map(12, 6);
        let memory = PelletMemory::new(&map);
        let pac = Pac::new(0, true, Coord::new(0, 0), PacType::Rock);
        let mut ctx = context(&map, &memory, &[], &[]);
        ctx.zone = 4..8;
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        for _ in 0..50 {
            let decision = select_action(&pac, &ctx, &mut rng).unwrap();
            assert_eq!(decision.intent, Intent::Wander);
            match decision.command {
                Command::Move { target, .. } => {
                    assert!((4..8).contains(&target.x), "x = {}", target.x);
                    assert!((0..6).contains(&target.y), "y = {}", target.y);
                }
                other => panic!("expected a move, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_wander_is_deterministic_for_seed() {
        let map = open_map(12, 6);
        let memory = PelletMemory::new(&map);
        let pac = Pac::new(0, true, Coord::new(0, 0), PacType::Rock);
        let ctx = context(&map, &memory, &[], &[]);

        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            select_action(&pac, &ctx, &mut a).unwrap(),
            select_action(&pac, &ctx, &mut b).unwrap()
        );
    }
}
