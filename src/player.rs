use core::time::Duration;
use log::trace;
use serde::Serialize;

use crate::{
    board::Board,
    common::{BoardError, Coordinate, ShotOutcome},
};

/// A legally resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

/// Interface implemented by the two kinds of participants.
///
/// A player only ever reads its own board and fires at the opponent's.
pub trait Player {
    /// Name shown in announcements.
    fn name(&self) -> &str;

    /// Produce the next target. Coordinates are not checked here; an
    /// out-of-range or already targeted answer is rejected by the move loop
    /// and `ask` is called again.
    fn ask(&mut self, own: &Board, enemy: &Board) -> anyhow::Result<Coordinate>;

    /// Pause the match takes after this player misses.
    fn miss_pause(&self) -> Duration {
        Duration::ZERO
    }

    /// Inform the player that `target` could not be fired upon.
    fn handle_rejected_target(&mut self, _target: Coordinate, _err: &BoardError) {}

    /// Inform the player of the result of its own shot.
    fn handle_shot_result(&mut self, _shot: Shot) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _shot: Shot) {}

    /// Ask for targets until one is accepted by `enemy`, then return the
    /// resolved shot. Only errors raised by `ask` itself are returned.
    fn make_move(&mut self, own: &Board, enemy: &mut Board) -> anyhow::Result<Shot> {
        loop {
            let target = self.ask(own, enemy)?;
            match enemy.shoot(target) {
                Ok(outcome) => {
                    let shot = Shot { target, outcome };
                    self.handle_shot_result(shot);
                    return Ok(shot);
                }
                Err(err) if err.is_invalid_target() => {
                    trace!("{} picked invalid target {:?}: {}", self.name(), target, err);
                    self.handle_rejected_target(target, &err);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
