//! Spatial searches over the game area

pub mod threat;

pub use threat::{enemies_within_range, Occupancy};
