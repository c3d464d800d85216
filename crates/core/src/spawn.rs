//! Spawn module - random tile insertion
//!
//! All randomness in the engine flows through the injected [`rand::Rng`],
//! so a seeded generator makes every game reproducible.

use rand::Rng;
use z048_types::{is_tile_value, Pos, Value, SPAWN_HIGH, SPAWN_LOW};

use crate::board::Board;
use crate::error::{GameError, GameResult};

/// Place one new tile in a uniformly chosen empty cell.
///
/// With `forced` the given value is placed (it must be a power of two >= 2);
/// otherwise the tile is a 2 with the board's spawn-bias probability, else
/// a 4. Fails with [`GameError::OutOfSpace`] when no cell is empty.
/// Exactly one cell goes from empty to occupied on success.
pub fn spawn_tile<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    forced: Option<Value>,
) -> GameResult<Pos> {
    if let Some(value) = forced {
        if !is_tile_value(value) {
            return Err(GameError::config(format!(
                "forced tile value {value} is not a power of two >= 2"
            )));
        }
    }

    let empty = board.empty_cells();
    if empty.is_empty() {
        return Err(GameError::OutOfSpace);
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = forced.unwrap_or_else(|| {
        if rng.gen_bool(board.spawn_bias()) {
            SPAWN_LOW
        } else {
            SPAWN_HIGH
        }
    });
    board.set(row, col, value);
    Ok((row, col))
}

/// Seed a fresh board with its two opening tiles (two unforced spawns).
pub fn initial_spawn<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> GameResult<[Pos; 2]> {
    let first = spawn_tile(board, rng, None)?;
    let second = spawn_tile(board, rng, None)?;
    Ok([first, second])
}
