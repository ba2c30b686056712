//! Text rendering of boards, built only from `Board::visible_cell`.

use std::fmt::Write;

use crate::board::Board;
use crate::common::{Cell, Coordinate};

const GAP: &str = "\t\t";

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Ship => '■',
        Cell::Hit => 'X',
        Cell::Miss => '.',
    }
}

fn header(size: usize) -> String {
    let mut line = String::from("  |");
    for c in 1..=size {
        let _ = write!(line, " {} |", c);
    }
    line
}

fn row(board: &Board, r: usize) -> String {
    let mut line = format!("{} |", r + 1);
    for c in 0..board.size() {
        let cell = board
            .visible_cell(Coordinate::new(r as i32, c as i32))
            .unwrap_or(Cell::Empty);
        let _ = write!(line, " {} |", cell_char(cell));
    }
    line
}

/// Render a single board as a grid with one-based row and column labels.
pub fn render_board(board: &Board) -> String {
    let mut out = header(board.size());
    out.push('\n');
    for r in 0..board.size() {
        out.push_str(&row(board, r));
        out.push('\n');
    }
    out
}

/// Render two boards side by side under their owners' names.
pub fn render_boards(left_name: &str, left: &Board, right_name: &str, right: &Board) -> String {
    let left_header = header(left.size());
    let width = left_header.chars().count();
    let mut out = format!("{:<width$}{}{}\n", left_name, GAP, right_name, width = width);
    let _ = writeln!(out, "{}{}{}", left_header, GAP, header(right.size()));
    for r in 0..left.size().max(right.size()) {
        let l = if r < left.size() { row(left, r) } else { String::new() };
        let rr = if r < right.size() { row(right, r) } else { String::new() };
        let _ = writeln!(out, "{:<width$}{}{}", l, GAP, rr, width = width);
    }
    out
}
