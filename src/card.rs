// gradbingo/src/card.rs
// Card generation: 25 distinct goals drawn from the pool and laid
// row-major into a 5x5 grid.

use crate::defs::{CARDCONFIG, CELLSPERCARD, Goal};
use crate::pool::{GoalPool, PoolError};

use std::collections::HashSet;

pub type Card = Vec<Vec<Goal>>; // CARDCONFIG.rows rows x CARDCONFIG.cols columns

#[derive(Debug, Clone)]
pub struct CardGenerator;

impl CardGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh card. Every cell is filled and all 25 goals are
    /// pairwise distinct; the draw order fills rows left to right, top to
    /// bottom.
    pub fn generate_card(&self, pool: &GoalPool) -> Result<Card, PoolError> {
        let drawn = pool.draw(CELLSPERCARD)?;
        let card = drawn
            .chunks(CARDCONFIG.cols)
            .map(|row| row.to_vec())
            .collect();
        Ok(card)
    }

    /// Shape and distinctness check for a generated card.
    pub fn validate_card(&self, card: &Card) -> bool {
        if card.len() != CARDCONFIG.rows {
            return false;
        }
        for row in card {
            if row.len() != CARDCONFIG.cols {
                return false;
            }
        }

        let unique: HashSet<&str> = card
            .iter()
            .flat_map(|row| row.iter())
            .map(String::as_str)
            .collect();
        unique.len() == CELLSPERCARD
    }
}

impl Default for CardGenerator {
    fn default() -> Self {
        Self::new()
    }
}
