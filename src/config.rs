use core::time::Duration;
use thiserror::Error;

/// Side of the standard square board.
pub const BOARD_SIZE: usize = 6;

/// Largest board side that fits the 128-bit cell masks.
pub const MAX_BOARD_SIZE: usize = 11;

/// Ship lengths each side places, longest first.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of ships in the standard fleet.
pub const NUM_SHIPS: usize = FLEET.len();

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random ship positions tried for one whole fleet before starting over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 30;

/// Fresh boards tried before a fleet is declared impossible to place.
pub const MAX_PLACEMENT_RESTARTS: usize = 10_000;

/// Pause after the computer misses, so the human can follow the game.
pub const AI_MISS_PAUSE: Duration = Duration::from_secs(1);

/// Rejected game settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be between 1 and {max}, got {0}", max = MAX_BOARD_SIZE)]
    InvalidSize(usize),
    #[error("fleet must contain at least one ship")]
    EmptyFleet,
    #[error("ship length must be positive")]
    InvalidShipLength,
    #[error("ship of length {length} does not fit a board of size {size}")]
    ShipTooLong { length: usize, size: usize },
}

/// Settings for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    /// Show the computer's ships on the rendered board.
    pub reveal_computer: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            reveal_computer: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if self.fleet.contains(&0) {
            return Err(ConfigError::InvalidShipLength);
        }
        if let Some(&length) = self.fleet.iter().find(|&&l| l > self.size) {
            return Err(ConfigError::ShipTooLong {
                length,
                size: self.size,
            });
        }
        Ok(())
    }
}
