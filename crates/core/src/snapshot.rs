//! Immutable view of a game for observers.
//!
//! Renderers diff two consecutive snapshots to derive slide/merge visuals;
//! the engine keeps no presentation state on its cells.

use z048_types::Value;

use crate::game::Game;

/// One occupied cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub row: usize,
    pub col: usize,
    pub value: Value,
}

/// Point-in-time view of a game
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Occupied cells in row-major order
    pub tiles: Vec<TileSnapshot>,
    pub score: u32,
    pub max_tile: Value,
    pub moves: u32,
    pub game_over: bool,
    pub seed: u64,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        let board = game.board();
        Self {
            rows: board.rows(),
            cols: board.cols(),
            tiles: board
                .occupied_cells()
                .into_iter()
                .map(|(row, col, value)| TileSnapshot { row, col, value })
                .collect(),
            score: game.score(),
            max_tile: game.max_tile(),
            moves: game.move_count(),
            game_over: game.is_over(),
            seed: game.seed(),
        }
    }
}

impl Game {
    /// Capture the current state for an observer
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}
