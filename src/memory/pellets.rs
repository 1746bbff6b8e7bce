//! Believed pellet values for every cell
//!
//! Pellets are assumed present on every floor cell until one of our pacs sees
//! the cell empty. Cells out of sight keep whatever was last believed, however
//! stale.

use tracing::trace;

use crate::core::snapshot::RoundSnapshot;
use crate::core::types::Coord;
use crate::map::GameMap;

/// Belief state over pellet values, indexed like the map's cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PelletMemory {
    values: Vec<u32>,
}

impl PelletMemory {
    /// Seed 1 on every floor cell and 0 on every wall
    pub fn new(map: &GameMap) -> Self {
        let values = map
            .cells()
            .iter()
            .map(|cell| if cell.is_floor() { 1 } else { 0 })
            .collect();

        Self { values }
    }

    /// Fold one round of observations into the belief state
    ///
    /// Everything our living pacs can see is cleared first, then every
    /// reported pellet is written. Enemy sight lines are not known and never
    /// clear anything.
    pub fn observe(&mut self, map: &GameMap, snapshot: &RoundSnapshot) {
        let mut cleared = 0usize;
        for pac in snapshot.my_living_pacs() {
            for coord in map.visible_cells(pac.pos) {
                self.values[map.to_index(coord)] = 0;
                cleared += 1;
            }
        }

        for pellet in &snapshot.visible_pellets {
            let coord = map.wrap(pellet.pos);
            self.values[map.to_index(coord)] = pellet.value;
        }

        trace!(
            round = snapshot.round,
            cleared,
            observed = snapshot.visible_pellets.len(),
            "memory updated"
        );
    }

    /// Current belief at a coordinate (wrapped onto the map)
    pub fn value_at(&self, map: &GameMap, coord: Coord) -> u32 {
        self.values[map.to_index(map.wrap(coord))]
    }

    /// Every coordinate believed to hold a pellet, in index order
    pub fn believed_pellets(&self, map: &GameMap) -> Vec<Coord> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, value)| **value > 0)
            .map(|(index, _)| map.to_coord(index))
            .collect()
    }

    /// Sum of all believed values
    pub fn believed_total(&self) -> u64 {
        self.values.iter().map(|v| *v as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::snapshot::{Pac, Pellet};
    use crate::core::types::PacType;

    #[test]
    fn test_initial_beliefs_follow_floor() {
        let map = GameMap::from_rows(&["## ##", "#   #", "#####"]).unwrap();
        let memory = PelletMemory::new(&map);

        let expected = [0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0];
        for (index, value) in expected.iter().enumerate() {
            assert_eq!(memory.value_at(&map, map.to_coord(index)), *value, "index {}", index);
        }
        assert_eq!(memory.believed_total(), 4);
        // Lookups wrap onto the map
        assert_eq!(memory.value_at(&map, Coord::new(7, -3)), 1);
    }

    #[test]
    fn test_observe_clears_visible_then_applies_pellets() {
        let map = GameMap::from_rows(&["#####", "# ###", "# ###", "# ###", "#####"]).unwrap();
        let mut memory = PelletMemory::new(&map);
        assert!(memory.value_at(&map, Coord::new(1, 2)) > 0);
        assert!(memory.value_at(&map, Coord::new(1, 3)) > 0);

        let snapshot = RoundSnapshot {
            visible_pacs: vec![Pac::new(0, true, Coord::new(1, 1), PacType::Rock)],
            visible_pellets: vec![Pellet::new(Coord::new(1, 3), 1)],
            ..Default::default()
        };
        memory.observe(&map, &snapshot);

        assert_eq!(memory.value_at(&map, Coord::new(1, 1)), 0);
        assert_eq!(memory.value_at(&map, Coord::new(1, 2)), 0);
        assert_eq!(memory.value_at(&map, Coord::new(1, 3)), 1);
    }

    #[test]
    fn test_pellet_survives_later_pacs_reset() {
        // Two pacs share the same corridor; the pellet seen by both must survive
        let map = GameMap::from_rows(&["#####", "#   #", "#####"]).unwrap();
        let mut memory = PelletMemory::new(&map);

        let snapshot = RoundSnapshot {
            visible_pacs: vec![
                Pac::new(0, true, Coord::new(1, 1), PacType::Rock),
                Pac::new(1, true, Coord::new(3, 1), PacType::Paper),
            ],
            visible_pellets: vec![Pellet::new(Coord::new(2, 1), 10)],
            ..Default::default()
        };
        memory.observe(&map, &snapshot);

        assert_eq!(memory.value_at(&map, Coord::new(2, 1)), 10);
        assert_eq!(memory.believed_pellets(&map), vec![Coord::new(2, 1)]);
    }

    #[test]
    fn test_enemy_sight_does_not_clear() {
        let map = GameMap::from_rows(&["#####", "#   #", "#####"]).unwrap();
        let mut memory = PelletMemory::new(&map);

        let snapshot = RoundSnapshot {
            visible_pacs: vec![Pac::new(0, false, Coord::new(2, 1), PacType::Rock)],
            ..Default::default()
        };
        memory.observe(&map, &snapshot);

        assert_eq!(memory.believed_total(), 3);
    }

    #[test]
    fn test_stale_beliefs_persist() {
        let map = GameMap::from_rows(&["#####", "# # #", "#####"]).unwrap();
        let mut memory = PelletMemory::new(&map);

        let snapshot = RoundSnapshot {
            visible_pacs: vec![Pac::new(0, true, Coord::new(1, 1), PacType::Rock)],
            ..Default::default()
        };
        memory.observe(&map, &snapshot);

        // (3, 1) is behind a wall and keeps its initial belief
        assert_eq!(memory.value_at(&map, Coord::new(1, 1)), 0);
        assert_eq!(memory.value_at(&map, Coord::new(3, 1)), 1);
    }
}
