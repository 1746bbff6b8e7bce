//! Pellet Hunter - heuristic bot for a toroidal pellet-chasing grid contest

pub mod core;
pub mod driver;
pub mod map;
pub mod memory;
pub mod policy;
pub mod protocol;
pub mod search;
