//! Bounded breadth-first search for nearby enemy pacs
//!
//! Expands through the 8-neighbourhood over floor cells, wrapping at the map
//! edges. Pacs do not block traversal.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::core::snapshot::{Pac, RoundSnapshot};
use crate::core::types::Coord;
use crate::map::GameMap;

/// Pacs indexed by the cell they stand on for the current round
#[derive(Debug, Default)]
pub struct Occupancy<'a> {
    by_pos: AHashMap<Coord, Vec<&'a Pac>>,
}

impl<'a> Occupancy<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every visible pac of a snapshot
    pub fn from_snapshot(map: &GameMap, snapshot: &'a RoundSnapshot) -> Self {
        let mut occupancy = Self::new();
        for pac in &snapshot.visible_pacs {
            occupancy.insert(map.wrap(pac.pos), pac);
        }
        occupancy
    }

    pub fn insert(&mut self, pos: Coord, pac: &'a Pac) {
        self.by_pos.entry(pos).or_default().push(pac);
    }

    pub fn pacs_at(&self, pos: Coord) -> &[&'a Pac] {
        self.by_pos.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Enemy pacs reachable from `origin` within `horizon` search steps
///
/// Results come back in discovery order, so nearer BFS layers come first but
/// pacs inside one layer are not sorted by exact distance.
pub fn enemies_within_range<'a>(
    map: &GameMap,
    occupancy: &Occupancy<'a>,
    origin: Coord,
    horizon: u32,
) -> Vec<&'a Pac> {
    let origin = map.wrap(origin);
    let mut found = Vec::new();
    let mut visited = AHashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(origin);
    queue.push_back((origin, 0u32));

    while let Some((pos, depth)) = queue.pop_front() {
        found.extend(
            occupancy
                .pacs_at(pos)
                .iter()
                .filter(|pac| !pac.mine && pac.is_alive()),
        );

        if depth >= horizon {
            continue;
        }

        for next in map.adjacent_coords(pos) {
            if visited.contains(&next) || !map.is_floor(next) {
                continue;
            }
            visited.insert(next);
            queue.push_back((next, depth + 1));
        }
    }

    found
}
