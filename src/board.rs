//! Game board state: ship placement, shot resolution and cell queries.

use core::fmt;
use log::{debug, trace};

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, Cell, Coordinate, ShotOutcome};
use crate::config::MAX_BOARD_SIZE;
use crate::ship::Ship;

type Grid = BitGrid<u128>;

/// One side's battlefield.
#[derive(Clone)]
pub struct Board {
    size: usize,
    ships: Vec<Ship>,
    ship_map: Grid,
    hits: Grid,
    misses: Grid,
    busy: Grid,
    sunk: usize,
    reveal_ships: bool,
}

impl Board {
    /// Create an empty `size×size` board whose ships are shown when rendered.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_reveal(size, true)
    }

    /// Create an empty board, choosing whether ship cells are rendered.
    pub fn with_reveal(size: usize, reveal_ships: bool) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        let empty = Grid::new(size)?;
        Ok(Board {
            size,
            ships: Vec::new(),
            ship_map: empty,
            hits: empty,
            misses: empty,
            busy: empty,
            sunk: 0,
            reveal_ships,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` once every placed ship is sunk. An empty board has no
    /// fleet to lose and never reports defeat.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    pub fn reveal_ships(&self) -> bool {
        self.reveal_ships
    }

    pub fn set_reveal_ships(&mut self, reveal: bool) {
        self.reveal_ships = reveal;
    }

    /// Whether `coord` lies outside `[0, size)` on either axis.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        let n = self.size as i32;
        !((0..n).contains(&coord.row) && (0..n).contains(&coord.col))
    }

    /// Whether `coord` can no longer be targeted or used for a new ship.
    /// Coordinates outside the grid are never busy.
    pub fn is_busy(&self, coord: Coordinate) -> bool {
        self.index(coord)
            .map(|(r, c)| self.busy.get(r, c).unwrap_or(false))
            .unwrap_or(false)
    }

    /// True state of a cell, ignoring `reveal_ships`.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        let (r, c) = self.index(coord)?;
        let cell = if self.hits.get(r, c).unwrap_or(false) {
            Cell::Hit
        } else if self.misses.get(r, c).unwrap_or(false) {
            Cell::Miss
        } else if self.ship_map.get(r, c).unwrap_or(false) {
            Cell::Ship
        } else {
            Cell::Empty
        };
        Some(cell)
    }

    /// The cell as an observer should see it: intact ship cells read as
    /// `Empty` unless the board reveals its ships.
    pub fn visible_cell(&self, coord: Coordinate) -> Option<Cell> {
        match self.cell(coord)? {
            Cell::Ship if !self.reveal_ships => Some(Cell::Empty),
            cell => Some(cell),
        }
    }

    /// Place `ship`, reserving its cells and one-cell contour.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if let Some(out) = ship.cells().find(|c| self.is_out_of_bounds(*c)) {
            return Err(BoardError::OutOfBounds(out));
        }
        if let Some(taken) = ship.cells().find(|c| self.is_busy(*c)) {
            return Err(BoardError::Overlap(taken));
        }
        for cell in ship.cells() {
            let (r, c) = self.checked_index(cell)?;
            self.ship_map.set(r, c)?;
            self.busy.set(r, c)?;
        }
        self.mark_contour(&ship, false)?;
        trace!("placed {:?}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Forget placement reservations so that every cell can be fired upon.
    pub fn reset_targeting_state(&mut self) {
        self.busy.clear_all();
    }

    /// Fire at `coord`.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.is_out_of_bounds(coord) {
            return Err(BoardError::OutOfBounds(coord));
        }
        if self.is_busy(coord) {
            return Err(BoardError::AlreadyTargeted(coord));
        }
        let (r, c) = self.checked_index(coord)?;
        self.busy.set(r, c)?;

        let Some(idx) = self.ships.iter().position(|s| s.contains(coord)) else {
            self.misses.set(r, c)?;
            debug!("shot at {} missed", coord);
            return Ok(ShotOutcome::Miss);
        };

        self.ships[idx].register_hit(coord);
        self.hits.set(r, c)?;
        let ship = self.ships[idx];
        if ship.is_sunk() {
            self.sunk += 1;
            self.mark_contour(&ship, true)?;
            debug!("shot at {} sank a ship of length {}", coord, ship.length());
            Ok(ShotOutcome::Sunk)
        } else {
            debug!("shot at {} damaged a ship", coord);
            Ok(ShotOutcome::Damaged)
        }
    }

    /// Reserve the in-grid contour of `ship`. With `visible` set the newly
    /// reserved cells are also shown as misses.
    fn mark_contour(&mut self, ship: &Ship, visible: bool) -> Result<(), BoardError> {
        for cell in ship.contour() {
            let Some((r, c)) = self.index(cell) else {
                continue;
            };
            if self.busy.get(r, c)? {
                continue;
            }
            self.busy.set(r, c)?;
            if visible {
                self.misses.set(r, c)?;
            }
        }
        Ok(())
    }

    fn index(&self, coord: Coordinate) -> Option<(usize, usize)> {
        if self.is_out_of_bounds(coord) {
            None
        } else {
            Some((coord.row as usize, coord.col as usize))
        }
    }

    fn checked_index(&self, coord: Coordinate) -> Result<(usize, usize), BoardError> {
        self.index(coord).ok_or(BoardError::OutOfBounds(coord))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  busy: {:?},\n  sunk: {},\n  ships: {:?}\n}}",
            self.size, self.ship_map, self.hits, self.misses, self.busy, self.sunk, self.ships
        )
    }
}
