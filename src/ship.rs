//! Ship definitions: a straight run of cells with remaining hit points.

use serde::Serialize;

use crate::common::{BoardError, Coordinate};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// Cells extend towards higher columns.
    Horizontal,
    /// Cells extend towards higher rows.
    Vertical,
}

/// A ship anchored at its bow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Build a ship of `length` cells starting at `bow`.
    ///
    /// The ship is not checked against any board here; `Board::add_ship`
    /// does the bounds and overlap checks. The length must be positive and
    /// fit a coordinate offset.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        if length == 0 || i32::try_from(length).is_err() {
            return Err(BoardError::InvalidShipLength);
        }
        Ok(Ship {
            bow,
            length,
            orientation,
            remaining_hits: length,
        })
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hits the ship can still take before sinking.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    /// The cells covered by the ship, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length as i32).map(move |i| match self.orientation {
            Orientation::Horizontal => self.bow.offset(0, i),
            Orientation::Vertical => self.bow.offset(i, 0),
        })
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Cells within one step of the ship, diagonals included, the ship's own
    /// cells excluded. Not clipped to any board.
    pub fn contour(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let mut seen = Vec::new();
        self.cells()
            .flat_map(Coordinate::neighbourhood)
            .filter(move |c| {
                if self.contains(*c) || seen.contains(c) {
                    false
                } else {
                    seen.push(*c);
                    true
                }
            })
    }

    /// Register a hit at `coord`. Returns `true` if the ship was hit.
    ///
    /// The caller guarantees each cell is hit at most once.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        if self.contains(coord) {
            self.remaining_hits = self.remaining_hits.saturating_sub(1);
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk.
    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }
}
