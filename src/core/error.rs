use thiserror::Error;

use crate::core::types::{Coord, PacType};

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Coordinate {0} is outside the map")]
    OutOfRange(Coord),

    #[error("No pac type beats {0:?}")]
    NoCounterType(PacType),

    #[error("Unknown pac type: {0}")]
    UnknownPacType(String),

    #[error("Invalid map: {0}")]
    InvalidMap(String),

    #[error("Protocol error on line {line}: {message}")]
    Protocol { line: usize, message: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
