//! Engine module - whole-board moves, legal-move analysis, terminal check
//!
//! [`apply_move`] is the single authoritative definition of "did this move
//! change anything": it projects the board into gravity-oriented lines,
//! collapses each, and writes them back. [`legal_directions`] predicts the
//! same outcome without mutating the board, and [`is_terminal`] is defined
//! on top of it rather than through a separate adjacency shortcut, so the
//! three can never disagree.

use arrayvec::ArrayVec;
use z048_types::Direction;

use crate::board::Board;
use crate::error::{GameError, GameResult};
use crate::line::Collapse;
use crate::projector::{project, unproject};

/// Up to four legal directions, in `Direction::ALL` order
pub type DirectionSet = ArrayVec<Direction, 4>;

/// Apply one move: collapse every line toward `direction` and write back.
///
/// Returns the OR of the per-line moved flags and the sum of the per-line
/// merge scores. The board is unchanged when the returned `moved` is false.
pub fn apply_move(board: &mut Board, direction: Direction) -> Collapse {
    let mut lines = project(board, direction);
    let mut outcome = Collapse::default();
    for line in &mut lines {
        outcome.absorb(line.collapse());
    }
    unproject(board, &lines, direction);
    outcome
}

/// Directions whose move would change the board, without mutating it.
///
/// A direction is legal if some adjacent pair along its axis enables a slide
/// (empty cell on the gravity side of an occupied one) or a merge (equal
/// occupied pair). Cheap enough for solvers that must not materialize four
/// full moves; agrees with [`apply_move`] by the tested equivalence
/// `d in legal_directions(b) <=> apply_move(b.clone(), d).moved`.
pub fn legal_directions(board: &Board) -> DirectionSet {
    let mut up = false;
    let mut down = false;
    let mut left = false;
    let mut right = false;

    for r in 0..board.rows() {
        for c in 0..board.cols() - 1 {
            let a = board.get(r, c).unwrap_or(0);
            let b = board.get(r, c + 1).unwrap_or(0);
            left |= (a == 0 && b != 0) || (a != 0 && a == b);
            right |= (b == 0 && a != 0) || (a != 0 && a == b);
        }
    }
    for r in 0..board.rows() - 1 {
        for c in 0..board.cols() {
            let a = board.get(r, c).unwrap_or(0);
            let b = board.get(r + 1, c).unwrap_or(0);
            up |= (a == 0 && b != 0) || (a != 0 && a == b);
            down |= (b == 0 && a != 0) || (a != 0 && a == b);
        }
    }

    let mut set = DirectionSet::new();
    for (dir, flag) in Direction::ALL.into_iter().zip([up, down, left, right]) {
        if flag {
            set.push(dir);
        }
    }
    set
}

/// True once no empty cell remains and no direction is legal.
pub fn is_terminal(board: &Board) -> bool {
    !board.has_empty() && legal_directions(board).is_empty()
}

/// Parse a direction token, rejecting anything but the four defined values.
pub fn parse_direction(token: &str) -> GameResult<Direction> {
    Direction::from_str(token)
        .ok_or_else(|| GameError::config(format!("unknown direction token: {token:?}")))
}
