//! Line module - slide/merge algorithm for a single row or column
//!
//! A line is a transient, reoriented copy of one row or column: index 0 is
//! the end the tiles fall toward. Lines are produced by the projector for a
//! single move and written back immediately afterwards.
//!
//! Collapse semantics:
//! - tiles slide over empty cells toward index 0
//! - two equal tiles merge into one of double value, scoring the new value
//! - a tile produced by a merge never merges again within the same move,
//!   so `2,2,4` becomes `4,4` and not `8`
//! - the sum of values is conserved by every collapse

use z048_types::Value;

/// Result of collapsing one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Collapse {
    /// Whether any tile changed position or value
    pub moved: bool,
    /// Sum of the values created by merges in this collapse
    pub score: u32,
}

impl Collapse {
    /// Fold another line's outcome into this one (used per move across lines)
    pub fn absorb(&mut self, other: Collapse) {
        self.moved |= other.moved;
        self.score += other.score;
    }
}

/// One row or column, oriented so index 0 faces the direction of gravity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    cells: Vec<Value>,
}

impl Line {
    pub fn new(cells: Vec<Value>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    /// Collapse the line in place toward index 0.
    ///
    /// Scans for the next occupied cell and either merges it into the last
    /// placed tile (when values match and that tile has not merged during
    /// this call) or slides it to the write cursor. Cells before the cursor
    /// are always occupied, so the merge candidate is exactly the cell at
    /// `write - 1`.
    pub fn collapse(&mut self) -> Collapse {
        let mut outcome = Collapse::default();
        let mut write = 0;
        // Index of the tile created by the most recent merge, if any.
        // That tile is off-limits for further merges this move.
        let mut merged_at: Option<usize> = None;

        for read in 0..self.cells.len() {
            let value = self.cells[read];
            if value == 0 {
                continue;
            }

            if write > 0 && self.cells[write - 1] == value && merged_at != Some(write - 1) {
                let doubled = value * 2;
                self.cells[write - 1] = doubled;
                self.cells[read] = 0;
                merged_at = Some(write - 1);
                outcome.score += doubled;
                outcome.moved = true;
            } else {
                if read != write {
                    self.cells[write] = value;
                    self.cells[read] = 0;
                    outcome.moved = true;
                }
                write += 1;
            }
        }

        outcome
    }

    /// Sum of all values in the line (conserved by `collapse`)
    pub fn value_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collapsed(cells: &[Value]) -> (Vec<Value>, Collapse) {
        let mut line = Line::new(cells.to_vec());
        let outcome = line.collapse();
        (line.cells().to_vec(), outcome)
    }

    #[test]
    fn test_two_pairs_merge_independently() {
        let (cells, outcome) = collapsed(&[2, 2, 4, 4]);
        assert_eq!(cells, vec![4, 8, 0, 0]);
        assert_eq!(outcome.score, 12);
        assert!(outcome.moved);
    }

    #[test]
    fn test_merge_across_gap() {
        let (cells, outcome) = collapsed(&[2, 0, 2, 0]);
        assert_eq!(cells, vec![4, 0, 0, 0]);
        assert_eq!(outcome.score, 4);
        assert!(outcome.moved);
    }

    #[test]
    fn test_packed_line_does_not_move() {
        let (cells, outcome) = collapsed(&[2, 4, 8, 16]);
        assert_eq!(cells, vec![2, 4, 8, 16]);
        assert_eq!(outcome, Collapse::default());
    }

    #[test]
    fn test_no_chain_merge() {
        // The 4 from 2+2 must not swallow the following 4.
        let (cells, outcome) = collapsed(&[2, 2, 4, 0]);
        assert_eq!(cells, vec![4, 4, 0, 0]);
        assert_eq!(outcome.score, 4);

        let (cells, outcome) = collapsed(&[4, 2, 2, 0]);
        assert_eq!(cells, vec![4, 4, 0, 0]);
        assert_eq!(outcome.score, 4);
    }

    #[test]
    fn test_triple_merges_front_pair() {
        let (cells, outcome) = collapsed(&[2, 2, 2, 0]);
        assert_eq!(cells, vec![4, 2, 0, 0]);
        assert_eq!(outcome.score, 4);
    }

    #[test]
    fn test_slide_without_merge() {
        let (cells, outcome) = collapsed(&[0, 0, 2, 4]);
        assert_eq!(cells, vec![2, 4, 0, 0]);
        assert_eq!(outcome.score, 0);
        assert!(outcome.moved);
    }

    #[test]
    fn test_empty_and_singleton_lines() {
        let (cells, outcome) = collapsed(&[0, 0, 0, 0]);
        assert_eq!(cells, vec![0, 0, 0, 0]);
        assert!(!outcome.moved);

        let (cells, outcome) = collapsed(&[8, 0, 0, 0]);
        assert_eq!(cells, vec![8, 0, 0, 0]);
        assert!(!outcome.moved);
    }

    #[test]
    fn test_value_conservation_on_random_lines() {
        // Deterministic pseudo-random lines; values from {0, 2, 4, 8, 16}.
        let mut state: u64 = 0x2048;
        let mut next = || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as usize
        };
        for _ in 0..500 {
            let len = 2 + next() % 7;
            let cells: Vec<Value> = (0..len)
                .map(|_| match next() % 5 {
                    0 => 0,
                    k => 1 << k, // 2, 4, 8, 16
                })
                .collect();
            let mut line = Line::new(cells);
            let before = line.value_sum();
            line.collapse();
            assert_eq!(line.value_sum(), before, "line {:?}", line.cells());
        }
    }
}
