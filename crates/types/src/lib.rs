//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (engine, history store, headless runner).
//!
//! # Board Dimensions
//!
//! Boards are rectangular, `rows x cols`, with both axes at least
//! [`MIN_DIM`]. The classic game is 4x4 ([`DEFAULT_ROWS`] x [`DEFAULT_COLS`])
//! but nothing in the engine assumes a square or a particular size.
//!
//! # Cell Values
//!
//! A cell holds a plain [`Value`]: `0` means empty, anything else is a power
//! of two starting at 2. Freshly spawned tiles are [`SPAWN_LOW`] (2) with
//! probability `p` (the spawn bias, [`DEFAULT_SPAWN_BIAS`] by default) and
//! [`SPAWN_HIGH`] (4) otherwise.

/// Minimum board dimension along either axis
pub const MIN_DIM: usize = 2;

/// Default board dimensions (classic 2048)
pub const DEFAULT_ROWS: usize = 4;
pub const DEFAULT_COLS: usize = 4;

/// Default probability that a spawned tile is a 2 rather than a 4
pub const DEFAULT_SPAWN_BIAS: f64 = 0.8;

/// The two values a fresh tile can take
pub const SPAWN_LOW: Value = 2;
pub const SPAWN_HIGH: Value = 4;

/// Cell content: 0 is empty, anything else is a power of two >= 2
pub type Value = u32;

/// Board position as (row, col), row-major from the top-left corner
pub type Pos = (usize, usize);

/// Returns true for values an occupied cell may legally hold.
pub fn is_tile_value(value: Value) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// Gravity directions for a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed scan order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Vertical moves run their lines along columns instead of rows
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Reversed moves index their lines from the far edge of the grid
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }

    /// Parse a direction from a string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
