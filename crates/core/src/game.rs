//! Game module - ties board, RNG, and scoring into one playable state
//!
//! This is the driver loop made concrete: apply a move, spawn a tile only
//! when the board changed, then re-check for the end of the game. External
//! front-ends (a renderer, a solver harness, the headless runner) own a
//! `Game` and feed it directions.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use z048_types::{Direction, Pos, Value, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SPAWN_BIAS};

use crate::board::Board;
use crate::engine::{apply_move, is_terminal, legal_directions, DirectionSet};
use crate::error::GameResult;
use crate::spawn::{initial_spawn, spawn_tile};

/// Board construction parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Probability that a spawned tile is a 2 rather than a 4
    pub spawn_bias: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            spawn_bias: DEFAULT_SPAWN_BIAS,
        }
    }
}

/// What one turn did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the move changed the board (a tile spawned iff true)
    pub moved: bool,
    /// Merge points earned by this move
    pub score_delta: u32,
    /// Where the new tile landed, when one was spawned
    pub spawned: Option<Pos>,
    /// Whether the game is over after this turn
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    rng: SmallRng,
    seed: u64,
    score: u32,
    moves: u32,
    game_over: bool,
}

impl Game {
    /// Create a game with the given RNG seed and spawn the two opening tiles
    pub fn new(config: GameConfig, seed: u64) -> GameResult<Self> {
        let mut board = Board::new(config.rows, config.cols, config.spawn_bias)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        initial_spawn(&mut board, &mut rng)?;
        Ok(Self {
            config,
            board,
            rng,
            seed,
            score: 0,
            moves: 0,
            game_over: false,
        })
    }

    /// Adopt an existing board mid-game (solver harnesses, tests)
    pub fn from_board(board: Board, seed: u64) -> Self {
        let game_over = is_terminal(&board);
        Self {
            config: GameConfig {
                rows: board.rows(),
                cols: board.cols(),
                spawn_bias: board.spawn_bias(),
            },
            board,
            rng: SmallRng::seed_from_u64(seed),
            seed,
            score: 0,
            moves: 0,
            game_over,
        }
    }

    /// Play one turn in `direction`.
    ///
    /// A turn that does not change the board spawns nothing and scores
    /// nothing. A finished game ignores further input.
    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        if self.game_over {
            return StepOutcome {
                moved: false,
                score_delta: 0,
                spawned: None,
                game_over: true,
            };
        }

        let outcome = apply_move(&mut self.board, direction);
        let spawned = if outcome.moved {
            self.score += outcome.score;
            self.moves += 1;
            // A move that changed the board freed or kept at least one
            // empty cell, so this spawn cannot run out of space.
            spawn_tile(&mut self.board, &mut self.rng, None).ok()
        } else {
            None
        };
        self.game_over = is_terminal(&self.board);

        StepOutcome {
            moved: outcome.moved,
            score_delta: outcome.score,
            spawned,
            game_over: self.game_over,
        }
    }

    /// Start a fresh episode with a new seed, keeping the configuration
    pub fn reset(&mut self, seed: u64) -> GameResult<()> {
        *self = Game::new(self.config, seed)?;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Cumulative merge score across all moves this episode
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of accepted (board-changing) moves this episode
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn max_tile(&self) -> Value {
        self.board.max_tile()
    }

    pub fn legal_directions(&self) -> DirectionSet {
        legal_directions(&self.board)
    }
}
