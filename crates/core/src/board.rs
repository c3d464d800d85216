//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell holds a plain value:
//! 0 for empty, otherwise a power of two >= 2. Uses a flat row-major array
//! for better cache locality. Coordinates are (row, col) with (0, 0) at the
//! top-left corner.
//!
//! The board also carries the spawn bias `p`: the probability that a freshly
//! spawned tile is a 2 rather than a 4.

use z048_types::{is_tile_value, Pos, Value, DEFAULT_SPAWN_BIAS, MIN_DIM};

use crate::error::{GameError, GameResult};

/// The game board - dynamic dimensions with flat row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Probability that a spawned tile is a 2 (else a 4)
    spawn_bias: f64,
    /// Flat array of cell values, row-major order (row * cols + col)
    cells: Vec<Value>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Fails with [`GameError::Configuration`] if either dimension is below
    /// the 2x2 minimum or `spawn_bias` is outside `[0, 1]`.
    pub fn new(rows: usize, cols: usize, spawn_bias: f64) -> GameResult<Self> {
        if rows < MIN_DIM || cols < MIN_DIM {
            return Err(GameError::config(format!(
                "board dimensions {rows}x{cols} are below the {MIN_DIM}x{MIN_DIM} minimum"
            )));
        }
        if !(0.0..=1.0).contains(&spawn_bias) {
            return Err(GameError::config(format!(
                "spawn bias {spawn_bias} is outside [0, 1]"
            )));
        }
        Ok(Self {
            rows,
            cols,
            spawn_bias,
            cells: vec![0; rows * cols],
        })
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn spawn_bias(&self) -> f64 {
        self.spawn_bias
    }

    /// Get the value at (row, col).
    /// Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Value> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the value at (row, col).
    /// Returns false if out of bounds or if the value is neither 0 nor a
    /// power of two >= 2, leaving the board untouched.
    pub fn set(&mut self, row: usize, col: usize, value: Value) -> bool {
        if value != 0 && !is_tile_value(value) {
            return false;
        }
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Write a value without validation. Callers guarantee in-bounds
    /// coordinates and a conserved value (0 or power of two).
    pub(crate) fn put(&mut self, row: usize, col: usize, value: Value) {
        let idx = row * self.cols + col;
        self.cells[idx] = value;
    }

    /// Check if the cell at (row, col) is empty (out of bounds is not empty)
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(0)
    }

    /// True if at least one cell is empty
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|&v| v == 0)
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Positions of all empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
            .collect()
    }

    /// Non-empty cells as (row, col, value) in row-major order.
    /// This is the view a rendering collaborator consumes after each turn.
    pub fn occupied_cells(&self) -> Vec<(usize, usize, Value)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(|(idx, &v)| (idx / self.cols, idx % self.cols, v))
            .collect()
    }

    /// Largest value on the board (0 for an empty board).
    /// This is the score metric recorded when a game ends.
    pub fn max_tile(&self) -> Value {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = 0;
        }
    }

    /// Create a board from 2D rows with the default spawn bias.
    /// Fails if the rows are ragged, too small, or hold invalid values.
    pub fn from_rows(rows_2d: &[Vec<Value>]) -> GameResult<Self> {
        let rows = rows_2d.len();
        let cols = rows_2d.first().map_or(0, |r| r.len());
        if rows_2d.iter().any(|r| r.len() != cols) {
            return Err(GameError::config("rows have differing lengths"));
        }
        let mut board = Self::new(rows, cols, DEFAULT_SPAWN_BIAS)?;
        for (r, row) in rows_2d.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value != 0 && !is_tile_value(value) {
                    return Err(GameError::config(format!(
                        "cell ({r}, {c}) value {value} is not 0 or a power of two >= 2"
                    )));
                }
                board.put(r, c, value);
            }
        }
        Ok(board)
    }

    /// Convert to a 2D vector for assertions/display
    pub fn to_rows(&self) -> Vec<Vec<Value>> {
        (0..self.rows)
            .map(|r| {
                let start = r * self.cols;
                self.cells[start..start + self.cols].to_vec()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_new_validation() {
        assert!(Board::new(2, 2, 0.8).is_ok());
        assert!(Board::new(7, 3, 0.0).is_ok());
        assert!(matches!(
            Board::new(1, 4, 0.8),
            Err(GameError::Configuration { .. })
        ));
        assert!(matches!(
            Board::new(4, 1, 0.8),
            Err(GameError::Configuration { .. })
        ));
        assert!(matches!(
            Board::new(4, 4, 1.5),
            Err(GameError::Configuration { .. })
        ));
        assert!(matches!(
            Board::new(4, 4, -0.1),
            Err(GameError::Configuration { .. })
        ));
    }

    #[test]
    fn test_board_flat_indexing() {
        let mut board = Board::new(3, 5, 0.8).unwrap();
        assert!(board.set(0, 0, 2));
        assert!(board.set(2, 4, 16));
        assert_eq!(board.get(0, 0), Some(2));
        assert_eq!(board.get(2, 4), Some(16));
        assert_eq!(board.cells()[0], 2);
        assert_eq!(board.cells()[2 * 5 + 4], 16);
        // Out of bounds
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 5), None);
        assert!(!board.set(3, 0, 2));
    }

    #[test]
    fn test_board_rejects_invalid_values() {
        let mut board = Board::new(4, 4, 0.8).unwrap();
        assert!(!board.set(0, 0, 3));
        assert!(!board.set(0, 0, 1));
        assert_eq!(board.get(0, 0), Some(0));
        assert!(board.set(0, 0, 4));
        assert!(board.set(0, 0, 0)); // clearing is always fine
    }

    #[test]
    fn test_board_empty_queries() {
        let mut board = Board::new(2, 2, 0.8).unwrap();
        assert!(board.has_empty());
        assert_eq!(board.empty_count(), 4);

        board.set(0, 1, 2);
        board.set(1, 0, 4);
        assert_eq!(board.empty_count(), 2);
        assert_eq!(board.empty_cells(), vec![(0, 0), (1, 1)]);
        assert_eq!(board.occupied_cells(), vec![(0, 1, 2), (1, 0, 4)]);
    }

    #[test]
    fn test_board_max_tile() {
        let board = Board::from_rows(&[vec![0, 2, 4, 8], vec![64, 0, 2, 2]]).unwrap();
        assert_eq!(board.max_tile(), 64);
        assert_eq!(Board::new(2, 2, 0.8).unwrap().max_tile(), 0);
    }

    #[test]
    fn test_board_from_rows_roundtrip() {
        let rows = vec![vec![0, 2, 0], vec![4, 0, 8]];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.to_rows(), rows);

        assert!(Board::from_rows(&[vec![0, 2], vec![4]]).is_err());
        assert!(Board::from_rows(&[vec![0, 3], vec![4, 0]]).is_err());
    }
}
