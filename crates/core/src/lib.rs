//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the rules of the tile-merging game: the board,
//! the per-line slide/merge algorithm, the direction projection, move
//! application, legal-move analysis, spawning, and the turn loop. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the only external input is an injected, seedable RNG,
//!   so the same seed produces an identical game
//! - **Testable**: every rule is covered by unit tests in its module
//! - **Portable**: runs headless, in a terminal front-end, or under a solver
//!
//! # Module Structure
//!
//! - [`board`]: rectangular grid of power-of-two values with a spawn bias
//! - [`line`]: collapse of a single gravity-oriented row or column
//! - [`projector`]: board <-> line mapping for the four directions
//! - [`engine`]: whole-board moves, legal directions, terminal detection
//! - [`spawn`]: random tile insertion
//! - [`game`]: move -> spawn -> terminal-check turn loop
//! - [`snapshot`]: immutable views for renderers and other observers
//! - [`error`]: configuration and out-of-space failures
//!
//! # Example
//!
//! ```
//! use z048_core::{Game, GameConfig};
//! use z048_types::Direction;
//!
//! let mut game = Game::new(GameConfig::default(), 42).unwrap();
//! let outcome = game.step(Direction::Left);
//! if outcome.moved {
//!     println!("scored {} points", outcome.score_delta);
//! }
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod game;
pub mod line;
pub mod projector;
pub mod snapshot;
pub mod spawn;

pub use z048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{apply_move, is_terminal, legal_directions, parse_direction, DirectionSet};
pub use error::{GameError, GameResult};
pub use game::{Game, GameConfig, StepOutcome};
pub use line::{Collapse, Line};
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use spawn::{initial_spawn, spawn_tile};
