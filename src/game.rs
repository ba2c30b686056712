//! Match controller: turn order, extra turns on hits and the win check.

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::{
    board::Board,
    config::GameConfig,
    placement::random_board,
    player::{Player, Shot},
};

/// The two seats of a match. The human seat moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }

    fn from_index(idx: usize) -> Self {
        if idx % 2 == 0 {
            Side::Human
        } else {
            Side::Computer
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// How a finished match ended. There are no draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchResult {
    HumanWins,
    ComputerWins,
}

impl MatchResult {
    fn won_by(side: Side) -> Self {
        match side {
            Side::Human => MatchResult::HumanWins,
            Side::Computer => MatchResult::ComputerWins,
        }
    }

    pub fn winner(self) -> Side {
        match self {
            MatchResult::HumanWins => Side::Human,
            MatchResult::ComputerWins => Side::Computer,
        }
    }
}

/// What happened during one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// Zero-based count of resolved shots before this one.
    pub turn: usize,
    pub side: Side,
    pub shot: Shot,
    /// Set when this shot ended the match.
    pub result: Option<MatchResult>,
}

/// A single game between two players, each defending its own board.
pub struct Match<'a> {
    players: [Box<dyn Player + 'a>; 2],
    boards: [Board; 2],
    active: usize,
    turn: usize,
    result: Option<MatchResult>,
}

impl<'a> Match<'a> {
    /// Set up a match from already placed boards.
    pub fn new(
        human: Box<dyn Player + 'a>,
        human_board: Board,
        computer: Box<dyn Player + 'a>,
        computer_board: Board,
    ) -> Self {
        Self {
            players: [human, computer],
            boards: [human_board, computer_board],
            active: 0,
            turn: 0,
            result: None,
        }
    }

    /// Set up a match with a freshly generated fleet on each side.
    pub fn with_random_boards<R: Rng + ?Sized>(
        rng: &mut R,
        config: &GameConfig,
        human: Box<dyn Player + 'a>,
        computer: Box<dyn Player + 'a>,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        let human_board = random_board(rng, config.size, &config.fleet)?;
        let mut computer_board = random_board(rng, config.size, &config.fleet)?;
        computer_board.set_reveal_ships(config.reveal_computer);
        Ok(Self::new(human, human_board, computer, computer_board))
    }

    /// Side whose move is next.
    pub fn active_side(&self) -> Side {
        Side::from_index(self.active)
    }

    /// Number of shots resolved so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        &*self.players[side.index()]
    }

    /// Let the active player fire one legal shot and update turn order.
    ///
    /// A hit keeps the turn with the shooter; a miss passes it on.
    pub fn step(&mut self) -> anyhow::Result<TurnReport> {
        if let Some(result) = self.result {
            anyhow::bail!("match is already over: {:?}", result);
        }
        let side = self.active_side();
        let (mover, enemy) = (side.index(), side.opponent().index());

        let shot = {
            let (own, target) = pick_pair(&mut self.boards, mover, enemy);
            self.players[mover].make_move(own, target)?
        };
        self.players[enemy].handle_opponent_shot(shot);
        debug!(
            "turn {}: {} fired at {:?} -> {:?}",
            self.turn,
            self.players[mover].name(),
            shot.target,
            shot.outcome
        );

        let report_turn = self.turn;
        self.turn += 1;
        if !shot.outcome.is_hit() {
            self.active = enemy;
            let pause = self.players[mover].miss_pause();
            if !pause.is_zero() {
                std::thread::sleep(pause);
            }
        }

        // Only the enemy board changed, so it is checked first.
        self.result = if self.boards[enemy].all_sunk() {
            Some(MatchResult::won_by(side))
        } else if self.boards[mover].all_sunk() {
            Some(MatchResult::won_by(side.opponent()))
        } else {
            None
        };
        if let Some(result) = self.result {
            info!("match over after {} shots: {:?}", self.turn, result);
        }

        Ok(TurnReport {
            turn: report_turn,
            side,
            shot,
            result: self.result,
        })
    }

    /// Play until one fleet is destroyed.
    pub fn run(&mut self) -> anyhow::Result<MatchResult> {
        loop {
            if let Some(result) = self.step()?.result {
                return Ok(result);
            }
        }
    }
}

/// Borrow `boards[own]` shared and `boards[target]` mutably.
fn pick_pair(boards: &mut [Board; 2], own: usize, target: usize) -> (&Board, &mut Board) {
    let [first, second] = boards;
    match (own, target) {
        (0, 1) => (&*first, second),
        (1, 0) => (&*second, first),
        _ => unreachable!("a side never fires at its own board"),
    }
}
