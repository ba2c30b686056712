//! Common types for sea battle: coordinates, shot outcomes and board errors.

use core::fmt;
use serde::Serialize;
use thiserror::Error;

use crate::bitgrid::BitGridError;

/// A position on the board. Rows and columns are zero-based.
///
/// Values are signed so that a position just off the grid (for example a
/// user typing `0` for a one-based row) is still representable and can be
/// rejected by the board as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by (`dr`, `dc`).
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    /// The 3×3 block centred on this coordinate, the coordinate included.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| self.offset(dr, dc)))
    }
}

impl fmt::Display for Coordinate {
    /// Displayed one-based, the way players type coordinates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of a legal shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShotOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Damaged,
    /// Shot hit the last intact cell of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Hits earn the shooter another move.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Damaged | ShotOutcome::Sunk)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "Miss!"),
            ShotOutcome::Damaged => write!(f, "Ship damaged!"),
            ShotOutcome::Sunk => write!(f, "Ship sunk!"),
        }
    }
}

/// What a cell looks like to an observer of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    #[error("you are trying to shoot outside the battlefield ({0})")]
    OutOfBounds(Coordinate),
    /// Coordinate was already fired upon or is known to be empty.
    #[error("you have already fired at this sector ({0})")]
    AlreadyTargeted(Coordinate),
    /// Ship would share a cell with another ship or touch it.
    #[error("ship overlaps another ship or its contour at {0}")]
    Overlap(Coordinate),
    /// Board size is zero or too large for the grid representation.
    #[error("unsupported board size {0}")]
    InvalidSize(usize),
    /// Ships must be at least one cell long.
    #[error("ship length must be positive and fit the coordinate range")]
    InvalidShipLength,
}

impl BoardError {
    /// Bad shot targets; the shooter is asked for another coordinate.
    pub fn is_invalid_target(&self) -> bool {
        matches!(self, BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_))
    }

    /// Rejected ship positions; the placement strategy draws another one.
    pub fn is_invalid_placement(&self) -> bool {
        matches!(self, BoardError::OutOfBounds(_) | BoardError::Overlap(_))
    }
}

impl From<BitGridError> for BoardError {
    fn from(err: BitGridError) -> Self {
        match err {
            BitGridError::SizeTooLarge { size, .. } => BoardError::InvalidSize(size),
            BitGridError::IndexOutOfBounds { row, col } => {
                BoardError::OutOfBounds(Coordinate::new(row as i32, col as i32))
            }
        }
    }
}
