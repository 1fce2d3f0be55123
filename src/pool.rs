// gradbingo/src/pool.rs
// The pool of candidate milestone phrases a card is drawn from.

use crate::defs::{CELLSPERCARD, DEFAULT_GOALS, Goal};

use rand::rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("goal pool holds {have} goals but a card needs {need}")]
    TooSmall { have: usize, need: usize },

    #[error("goal pool contains a duplicate phrase: {0}")]
    Duplicate(String),

    #[error("cannot read goals file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct GoalPool {
    goals: Vec<Goal>,
}

impl GoalPool {
    /// Pool backed by the built-in phrases.
    pub fn new() -> Self {
        GoalPool {
            goals: DEFAULT_GOALS.iter().map(|goal| goal.to_string()).collect(),
        }
    }

    /// Pool backed by caller-supplied phrases. The phrases must be distinct
    /// and there must be at least enough of them to fill one card.
    pub fn from_goals(goals: Vec<Goal>) -> Result<Self, PoolError> {
        let mut seen = HashSet::new();
        for goal in &goals {
            if !seen.insert(goal.as_str()) {
                return Err(PoolError::Duplicate(goal.clone()));
            }
        }
        if goals.len() < CELLSPERCARD {
            return Err(PoolError::TooSmall {
                have: goals.len(),
                need: CELLSPERCARD,
            });
        }
        Ok(GoalPool { goals })
    }

    /// Pool read from a text file, one phrase per line. Blank lines and
    /// surrounding whitespace are ignored.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PoolError> {
        let content = fs::read_to_string(path)?;
        let goals = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::from_goals(goals)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn contains(&self, goal: &str) -> bool {
        self.goals.iter().any(|candidate| candidate == goal)
    }

    /// Draw `n` goals uniformly at random without replacement.
    pub fn draw(&self, n: usize) -> Result<Vec<Goal>, PoolError> {
        if self.goals.len() < n {
            return Err(PoolError::TooSmall {
                have: self.goals.len(),
                need: n,
            });
        }
        let mut drawn = self.goals.clone();
        let mut rng = rng();
        drawn.shuffle(&mut rng);
        drawn.truncate(n);
        Ok(drawn)
    }
}

impl Default for GoalPool {
    fn default() -> Self {
        Self::new()
    }
}
