//! Toroidal grid of floor and wall cells
//!
//! Left/right and top/bottom edges are connected. Every query wraps its
//! coordinate before indexing so that stepping off one edge never lands in an
//! unrelated row.

use serde::{Deserialize, Serialize};

use crate::core::error::{BotError, Result};
use crate::core::types::Coord;

/// A single cell of the game area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Floor,
    Wall,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Cell::Floor),
            '#' => Some(Cell::Wall),
            _ => None,
        }
    }

    pub fn is_floor(&self) -> bool {
        matches!(self, Cell::Floor)
    }
}

/// Walls and floors of the game area, fixed for the whole match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMap {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl GameMap {
    /// Create a map from a row-major cell sequence
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BotError::InvalidMap(format!(
                "dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        if cells.len() != width * height {
            return Err(BotError::InvalidMap(format!(
                "expected {} cells for {}x{}, got {}",
                width * height,
                width,
                height,
                cells.len()
            )));
        }
        Ok(Self { width, height, cells })
    }

    /// Build a map from text rows where `' '` is floor and `'#'` is wall
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(BotError::InvalidMap(format!(
                    "row {} has length {}, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for c in row.chars() {
                let cell = Cell::from_char(c).ok_or_else(|| {
                    BotError::InvalidMap(format!("unexpected character {:?} in row {}", c, y))
                })?;
                cells.push(cell);
            }
        }

        Self::new(width, rows.len(), cells)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if the coordinate is already in canonical range
    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Map any integer coordinate onto the torus
    #[inline]
    pub fn wrap(&self, coord: Coord) -> Coord {
        Coord::new(
            coord.x.rem_euclid(self.width as i32),
            coord.y.rem_euclid(self.height as i32),
        )
    }

    /// Absolute position of a coordinate, `y * width + x`
    ///
    /// The coordinate must be in range; callers wrap first.
    #[inline]
    pub fn to_index(&self, coord: Coord) -> usize {
        coord.y as usize * self.width + coord.x as usize
    }

    /// Inverse of [`GameMap::to_index`]
    #[inline]
    pub fn to_coord(&self, index: usize) -> Coord {
        Coord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Cell at a canonical coordinate
    pub fn cell_at(&self, coord: Coord) -> Result<Cell> {
        if !self.in_bounds(coord) {
            return Err(BotError::OutOfRange(coord));
        }
        Ok(self.cells[self.to_index(coord)])
    }

    /// Wraps the coordinate, then tests for floor
    #[inline]
    pub fn is_floor(&self, coord: Coord) -> bool {
        let wrapped = self.wrap(coord);
        self.cells[self.to_index(wrapped)].is_floor()
    }

    /// The 8 surrounding coordinates, wrapped, in row-major order
    pub fn adjacent_coords(&self, pos: Coord) -> [Coord; 8] {
        let pos = self.wrap(pos);
        [
            self.wrap(pos.offset(-1, -1)),
            self.wrap(pos.offset(0, -1)),
            self.wrap(pos.offset(1, -1)),
            self.wrap(pos.offset(-1, 0)),
            self.wrap(pos.offset(1, 0)),
            self.wrap(pos.offset(-1, 1)),
            self.wrap(pos.offset(0, 1)),
            self.wrap(pos.offset(1, 1)),
        ]
    }

    /// Squared distance using the shortest way around each axis
    pub fn torus_distance_squared(&self, a: Coord, b: Coord) -> i64 {
        let a = self.wrap(a);
        let b = self.wrap(b);
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        let dx = dx.min(self.width as i32 - dx) as i64;
        let dy = dy.min(self.height as i32 - dy) as i64;
        dx * dx + dy * dy
    }

    /// Iterate over all floor coordinates in index order
    pub fn floor_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_floor())
            .map(|(index, _)| self.to_coord(index))
    }
}
