//! Random fleet placement with a bounded attempt budget.
//!
//! Greedy random placement can paint itself into a corner on a small board,
//! so a fleet gets a fixed number of tries and the whole board is thrown
//! away and rebuilt when they run out.

use log::{debug, trace};
use rand::Rng;
use thiserror::Error;

use crate::board::Board;
use crate::common::{BoardError, Coordinate};
use crate::config::{MAX_PLACEMENT_ATTEMPTS, MAX_PLACEMENT_RESTARTS};
use crate::ship::{Orientation, Ship};

/// Errors returned while generating a fleet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The attempt budget ran out before every ship found a spot.
    #[error("fleet placement gave up after {attempts} attempts")]
    Exhausted { attempts: usize },
    /// No board could be filled, even after restarting from scratch.
    #[error("fleet could not be placed after {restarts} fresh boards")]
    Unplaceable { restarts: usize },
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Draw a random bow in `[0, size)²` and a random orientation.
pub fn random_ship<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    length: usize,
) -> Result<Ship, BoardError> {
    let n = size as i32;
    let bow = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(bow, length, orientation)
}

/// Try to place `fleet` on a fresh board within `MAX_PLACEMENT_ATTEMPTS`
/// ship positions in total.
///
/// On success the board's targeting state is already reset, so it is ready
/// for the shooting phase.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    fleet: &[usize],
) -> Result<Board, PlacementError> {
    let mut board = Board::new(size)?;
    let mut attempts = 0;
    for &length in fleet {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(PlacementError::Exhausted {
                    attempts: MAX_PLACEMENT_ATTEMPTS,
                });
            }
            let ship = random_ship(rng, size, length)?;
            match board.add_ship(ship) {
                Ok(()) => break,
                Err(e) if e.is_invalid_placement() => {
                    trace!("rejected {:?}: {}", ship, e);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
    board.reset_targeting_state();
    Ok(board)
}

/// Build a fully placed board, starting over on an empty board every time
/// the attempt budget runs out.
pub fn random_board<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    fleet: &[usize],
) -> Result<Board, PlacementError> {
    for restart in 0..MAX_PLACEMENT_RESTARTS {
        match place_fleet(rng, size, fleet) {
            Ok(board) => {
                debug!("fleet placed after {} restarts", restart);
                return Ok(board);
            }
            Err(PlacementError::Exhausted { .. }) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(PlacementError::Unplaceable {
        restarts: MAX_PLACEMENT_RESTARTS,
    })
}
