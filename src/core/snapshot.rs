//! Per-round observation handed to the decision core

use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, PacId, PacType, Round};

/// A pac as observed this round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pac {
    pub id: PacId,
    pub mine: bool,
    pub pos: Coord,
    pub pac_type: PacType,
    pub speed_turns_left: u32,
    pub ability_cooldown: u32,
}

impl Pac {
    pub fn new(id: PacId, mine: bool, pos: Coord, pac_type: PacType) -> Self {
        Self {
            id,
            mine,
            pos,
            pac_type,
            speed_turns_left: 0,
            ability_cooldown: 0,
        }
    }

    /// Builder: set the ability cooldown
    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.ability_cooldown = cooldown;
        self
    }

    /// Builder: set the remaining speed-boost turns
    pub fn with_speed(mut self, turns: u32) -> Self {
        self.speed_turns_left = turns;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.pac_type.is_alive()
    }

    pub fn ability_ready(&self) -> bool {
        self.ability_cooldown == 0
    }
}

/// A visible pellet and its point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pellet {
    pub pos: Coord,
    pub value: u32,
}

impl Pellet {
    pub fn new(pos: Coord, value: u32) -> Self {
        Self { pos, value }
    }
}

/// Everything observed in one round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: Round,
    pub my_score: u32,
    pub opponent_score: u32,
    pub visible_pacs: Vec<Pac>,
    pub visible_pellets: Vec<Pellet>,
}

impl RoundSnapshot {
    /// Living pacs this bot controls, in snapshot order
    pub fn my_living_pacs(&self) -> Vec<&Pac> {
        self.visible_pacs
            .iter()
            .filter(|p| p.mine && p.is_alive())
            .collect()
    }

    /// Living opponent pacs in sight
    pub fn enemy_pacs(&self) -> impl Iterator<Item = &Pac> {
        self.visible_pacs.iter().filter(|p| !p.mine && p.is_alive())
    }
}
