//! Static x-range zones for splitting pellets between owned pacs
//!
//! The map width is cut into equal-width column bands, one per pac. The last
//! band absorbs the remainder. Zones ignore where pacs actually stand.

use std::cmp::Ordering;
use std::ops::Range;

use crate::core::types::Coord;
use crate::map::GameMap;
use crate::memory::PelletMemory;

/// Width of every zone but the last (never zero)
pub fn bucket_width(zones: usize, width: usize) -> usize {
    if zones == 0 {
        return width.max(1);
    }
    (width / zones).max(1)
}

/// Zone (0..zones) that column `x` belongs to
pub fn bucketize(x: usize, zones: usize, width: usize) -> usize {
    if zones == 0 {
        return 0;
    }
    (x / bucket_width(zones, width)).min(zones - 1)
}

/// Column range covered by `zone`; may be empty on maps narrower than the zone count
pub fn zone_bounds(zone: usize, zones: usize, width: usize) -> Range<usize> {
    let bw = bucket_width(zones, width);
    let start = (zone * bw).min(width);
    let end = if zone + 1 >= zones {
        width
    } else {
        ((zone + 1) * bw).min(width)
    };
    start..end.max(start)
}

/// Bucket coordinates by zone, preserving input order inside each zone
pub fn partition(coords: &[Coord], zones: usize, width: usize) -> Vec<Vec<Coord>> {
    let mut buckets = vec![Vec::new(); zones];
    if zones == 0 {
        return buckets;
    }
    for coord in coords {
        let zone = bucketize(coord.x.max(0) as usize, zones, width);
        buckets[zone].push(*coord);
    }
    buckets
}

/// Higher believed value first, then nearer to `origin`
pub fn candidate_order(
    a: &Coord,
    b: &Coord,
    map: &GameMap,
    memory: &PelletMemory,
    origin: Coord,
) -> Ordering {
    memory
        .value_at(map, *b)
        .cmp(&memory.value_at(map, *a))
        .then_with(|| a.distance_squared(&origin).cmp(&b.distance_squared(&origin)))
}

/// Sort pellet candidates best-first; ties keep their input order
pub fn rank_candidates(
    candidates: &mut [Coord],
    map: &GameMap,
    memory: &PelletMemory,
    origin: Coord,
) {
    candidates.sort_by(|a, b| candidate_order(a, b, map, memory, origin));
}
