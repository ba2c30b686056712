use core::time::Duration;
use log::debug;
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, Coordinate},
    config::AI_MISS_PAUSE,
    player::{Player, Shot},
};

/// Computer opponent firing at uniformly random cells.
///
/// Draws cover the whole grid, previously targeted cells included; the move
/// loop rejects those and asks again.
pub struct AiPlayer<R> {
    name: String,
    rng: R,
    pause: Duration,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            name: "Computer".to_string(),
            rng,
            pause: AI_MISS_PAUSE,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the pause taken after a miss.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn ask(&mut self, _own: &Board, enemy: &Board) -> anyhow::Result<Coordinate> {
        let n = enemy.size() as i32;
        Ok(Coordinate::new(
            self.rng.random_range(0..n),
            self.rng.random_range(0..n),
        ))
    }

    fn miss_pause(&self) -> Duration {
        self.pause
    }

    fn handle_rejected_target(&mut self, target: Coordinate, err: &BoardError) {
        debug!("{} redraws after {:?}: {}", self.name, target, err);
    }

    fn handle_shot_result(&mut self, shot: Shot) {
        debug!("{} fired at {:?} -> {:?}", self.name, shot.target, shot.outcome);
    }
}
