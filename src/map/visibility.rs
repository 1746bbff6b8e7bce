//! Line of sight on the toroidal grid
//!
//! A pac sees along the four cardinal directions until a wall blocks the ray
//! or the ray wraps all the way back to the pac.

use ahash::AHashSet;

use super::grid::GameMap;
use crate::core::types::Coord;

/// Ray directions in the order they are walked: north, south, west, east
pub const CARDINAL_DIRECTIONS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

impl GameMap {
    /// All coordinates with line of sight to `origin`, origin first
    ///
    /// Walls are never included. A cell reached by more than one ray (only
    /// possible on wall-free wraparound lines) is listed once.
    pub fn visible_cells(&self, origin: Coord) -> Vec<Coord> {
        let origin = self.wrap(origin);
        let mut visible = vec![origin];
        let mut seen = AHashSet::new();
        seen.insert(origin);

        for (dx, dy) in CARDINAL_DIRECTIONS {
            let mut pos = self.wrap(origin.offset(dx, dy));
            while pos != origin && self.is_floor(pos) {
                if seen.insert(pos) {
                    visible.push(pos);
                }
                pos = self.wrap(pos.offset(dx, dy));
            }
        }

        visible
    }
}
