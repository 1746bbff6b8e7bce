//! Commands issued to owned pacs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::snapshot::Pac;
use crate::core::types::{Coord, PacId, PacType};

/// One order for one pac
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Move toward a target cell
    Move { pac_id: PacId, target: Coord },
    /// Activate the speed boost
    Speed { pac_id: PacId },
    /// Change combat type
    Switch { pac_id: PacId, pac_type: PacType },
}

impl Command {
    pub fn move_to(pac_id: PacId, target: Coord) -> Self {
        Command::Move { pac_id, target }
    }

    /// Move onto the cell the pac already occupies
    pub fn stay(pac: &Pac) -> Self {
        Command::Move {
            pac_id: pac.id,
            target: pac.pos,
        }
    }

    pub fn pac_id(&self) -> PacId {
        match self {
            Command::Move { pac_id, .. }
            | Command::Speed { pac_id }
            | Command::Switch { pac_id, .. } => *pac_id,
        }
    }

    /// Wire form, with an optional display message appended to MOVE
    pub fn render(&self, label: Option<&str>) -> String {
        match (self, label) {
            (Command::Move { pac_id, target }, Some(label)) => {
                format!("MOVE {} {} {} {}", pac_id, target.x, target.y, label)
            }
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move { pac_id, target } => {
                write!(f, "MOVE {} {} {}", pac_id, target.x, target.y)
            }
            Command::Speed { pac_id } => write!(f, "SPEED {}", pac_id),
            Command::Switch { pac_id, pac_type } => write!(f, "SWITCH {} {}", pac_id, pac_type),
        }
    }
}

/// Why a command was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Chase an enemy we beat
    Engage,
    /// Speed up to close on an enemy we beat
    Boost,
    /// Change into the type that beats a nearby enemy
    Switch,
    /// Step away from an enemy we cannot beat
    Flee,
    /// Head for the best believed pellet in our zone
    Harvest,
    /// Explore a random cell of our zone
    Wander,
    /// Stay put (boxed in, or the decision failed)
    Hold,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Engage => "engage",
            Intent::Boost => "boost",
            Intent::Switch => "switch",
            Intent::Flee => "flee",
            Intent::Harvest => "harvest",
            Intent::Wander => "wander",
            Intent::Hold => "hold",
        }
    }
}

/// A command together with the reason it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub command: Command,
    pub intent: Intent,
}

impl Decision {
    pub fn new(command: Command, intent: Intent) -> Self {
        Self { command, intent }
    }

    /// Degraded decision: keep the pac where it is
    pub fn hold(pac: &Pac) -> Self {
        Self::new(Command::stay(pac), Intent::Hold)
    }
}

/// All decisions for one round, one per living owned pac
pub type CommandBatch = Vec<Decision>;
