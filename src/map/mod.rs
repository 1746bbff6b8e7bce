//! Static game area: toroidal grid geometry and line of sight

pub mod grid;
pub mod visibility;

pub use grid::{Cell, GameMap};
pub use visibility::CARDINAL_DIRECTIONS;
