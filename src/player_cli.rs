use std::io::{self, BufRead, Write};

use anyhow::bail;
use log::warn;
use thiserror::Error;

use crate::{
    board::Board,
    common::{BoardError, Coordinate},
    player::{Player, Shot},
    render::render_boards,
};

/// Problems with a typed coordinate. These never leave the prompt loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("enter 2 coordinates, got {0}")]
    WrongTokenCount(usize),
    #[error("coordinates must be numbers, got {0:?}")]
    NotANumber(String),
}

/// Parse `"row col"`, one-based, into a zero-based coordinate.
///
/// Range is not checked: `"0 7"` becomes `(-1, 6)` and is left for the board
/// to reject.
pub fn parse_coordinate(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    Ok(Coordinate::new(parse_index(row)? - 1, parse_index(col)? - 1))
}

fn parse_index(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_string()));
    }
    // Too many digits for an i32 is still a number, just far off the board.
    Ok(token.parse().unwrap_or(i32::MAX))
}

/// Interactive player reading targets line by line.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process' stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            name: "Player".to_string(),
            input,
            output,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_coordinate(&mut self) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed while waiting for a move");
            }
            match parse_coordinate(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, " {} ", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn ask(&mut self, own: &Board, enemy: &Board) -> anyhow::Result<Coordinate> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_boards(&self.name, own, "Enemy", enemy))?;
        self.read_coordinate()
    }

    fn handle_rejected_target(&mut self, _target: Coordinate, err: &BoardError) {
        let res = writeln!(self.output, "{}", capitalize(&err.to_string()));
        warn_on_write_error(res);
    }

    fn handle_shot_result(&mut self, shot: Shot) {
        let res = writeln!(self.output, "{}", shot.outcome);
        warn_on_write_error(res);
    }

    fn handle_opponent_shot(&mut self, shot: Shot) {
        let res = writeln!(
            self.output,
            "Enemy fires at {}: {}",
            shot.target, shot.outcome
        );
        warn_on_write_error(res);
    }
}

fn warn_on_write_error(res: io::Result<()>) {
    if let Err(e) = res {
        warn!("failed to write to player output: {}", e);
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
