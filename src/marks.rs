// gradbingo/src/marks.rs
// Mark state for one card: which cells the player has toggled.

use crate::card::Card;
use crate::defs::{CARDCONFIG, Goal};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkError {
    #[error("cell ({row}, {col}) is outside the card")]
    CellOutOfRange { row: usize, col: usize },
}

/// Boolean grid matching the card's shape. A new card always starts from a
/// fresh all-false state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkState {
    grid: Vec<Vec<bool>>,
}

impl MarkState {
    pub fn new() -> Self {
        MarkState {
            grid: vec![vec![false; CARDCONFIG.cols]; CARDCONFIG.rows],
        }
    }

    /// Flip exactly one cell and return its new value. All other cells are
    /// left untouched.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, MarkError> {
        if row >= CARDCONFIG.rows || col >= CARDCONFIG.cols {
            return Err(MarkError::CellOutOfRange { row, col });
        }
        self.grid[row][col] = !self.grid[row][col];
        Ok(self.grid[row][col])
    }

    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.grid[row][col]
    }

    pub fn marked_count(&self) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|marked| **marked)
            .count()
    }

    /// The goals behind the marked cells, in row-major card order.
    pub fn marked_goals(&self, card: &Card) -> Vec<Goal> {
        let mut goals = Vec::new();
        for row in 0..CARDCONFIG.rows {
            for col in 0..CARDCONFIG.cols {
                if self.grid[row][col] {
                    goals.push(card[row][col].clone());
                }
            }
        }
        goals
    }
}

impl Default for MarkState {
    fn default() -> Self {
        Self::new()
    }
}
