//! Projector module - maps the 2D board onto gravity-oriented lines
//!
//! A move in any direction is the same 1D collapse applied to every row or
//! column, so the four directions reduce to two orthogonal transforms:
//!
//! - vertical moves (Up/Down) walk columns instead of rows (a transpose)
//! - reversed moves (Down/Right) index each line from the far edge
//!
//! Both `project` and `unproject` go through the single [`slot`] mapping, so
//! projecting and writing back untouched lines is an identity for every
//! direction.

use z048_types::Direction;

use crate::board::Board;
use crate::line::Line;

/// Number of lines and cells-per-line for a move on this board
fn shape(board: &Board, direction: Direction) -> (usize, usize) {
    if direction.is_vertical() {
        (board.cols(), board.rows())
    } else {
        (board.rows(), board.cols())
    }
}

/// Board coordinates of cell `step` within line `lane`.
///
/// `step` counts from the gravity-facing end of the line. The same mapping
/// serves extraction and write-back; it is a bijection between
/// `(lane, step)` pairs and board cells by construction.
fn slot(direction: Direction, len: usize, lane: usize, step: usize) -> (usize, usize) {
    let step = if direction.is_reversed() {
        len - 1 - step
    } else {
        step
    };
    if direction.is_vertical() {
        (step, lane)
    } else {
        (lane, step)
    }
}

/// Extract all lines for a move in `direction`, index 0 facing gravity.
pub fn project(board: &Board, direction: Direction) -> Vec<Line> {
    let (lanes, len) = shape(board, direction);
    (0..lanes)
        .map(|lane| {
            Line::new(
                (0..len)
                    .map(|step| {
                        let (row, col) = slot(direction, len, lane, step);
                        board.get(row, col).unwrap_or(0)
                    })
                    .collect(),
            )
        })
        .collect()
}

/// Write lines back into the board using the same orientation as [`project`].
pub fn unproject(board: &mut Board, lines: &[Line], direction: Direction) {
    let (lanes, len) = shape(board, direction);
    debug_assert_eq!(lines.len(), lanes);
    for (lane, line) in lines.iter().enumerate() {
        debug_assert_eq!(line.len(), len);
        for (step, &value) in line.cells().iter().enumerate() {
            let (row, col) = slot(direction, len, lane, step);
            board.put(row, col, value);
        }
    }
}
