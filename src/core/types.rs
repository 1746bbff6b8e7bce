//! Core type definitions used throughout the codebase

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{BotError, Result};

/// Identifier of a pac, unique per owner within a match
pub type PacId = u32;

/// Round counter (decision time unit)
pub type Round = u32;

/// Integer grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Plain squared Euclidean distance, ignoring wraparound
    pub fn distance_squared(&self, other: &Self) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Combat type of a pac
///
/// The three living types form a closed cycle: Rock beats Scissors,
/// Scissors beats Paper, Paper beats Rock. `Dead` only appears in
/// rulesets that report eliminated pacs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PacType {
    Rock,
    Paper,
    Scissors,
    Dead,
}

impl PacType {
    /// The type that wins against this one
    pub fn beaten_by(&self) -> Result<PacType> {
        match self {
            PacType::Rock => Ok(PacType::Paper),
            PacType::Paper => Ok(PacType::Scissors),
            PacType::Scissors => Ok(PacType::Rock),
            PacType::Dead => Err(BotError::NoCounterType(*self)),
        }
    }

    /// Returns true if this type wins against `other`
    pub fn beats(&self, other: &PacType) -> Result<bool> {
        if *self == PacType::Dead {
            return Err(BotError::NoCounterType(*self));
        }
        Ok(other.beaten_by()? == *self)
    }

    pub fn is_alive(&self) -> bool {
        !matches!(self, PacType::Dead)
    }

    /// Wire name used by the game protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            PacType::Rock => "ROCK",
            PacType::Paper => "PAPER",
            PacType::Scissors => "SCISSORS",
            PacType::Dead => "DEAD",
        }
    }
}

impl FromStr for PacType {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ROCK" => Ok(PacType::Rock),
            "PAPER" => Ok(PacType::Paper),
            "SCISSORS" => Ok(PacType::Scissors),
            "DEAD" => Ok(PacType::Dead),
            other => Err(BotError::UnknownPacType(other.to_string())),
        }
    }
}

impl fmt::Display for PacType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
