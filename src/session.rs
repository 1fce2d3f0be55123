// gradbingo/src/session.rs
// One interactive bingo session. The session owns the current card, its
// mark state, the win flag and the player identity, and applies typed UI
// events to them. Side effects are returned as requests for the caller to
// perform.

use crate::card::{Card, CardGenerator};
use crate::defs::Goal;
use crate::marks::{MarkError, MarkState};
use crate::pool::{GoalPool, PoolError};
use crate::score::check_bingo;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("card generation failed: {0}")]
    Pool(#[from] PoolError),

    #[error("toggle failed: {0}")]
    Mark(#[from] MarkError),
}

/// Events the UI layer feeds into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    ToggleCell { row: usize, col: usize },
    SetUser { name: String },
    NewCard,
    Save { name: String, goals: Vec<Goal> },
}

/// Side-effect requests returned by `apply`. The session never renders or
/// touches storage itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Redraw,
    Win,
    Persist { name: String, goals: Vec<Goal> },
}

pub struct Session {
    generator: CardGenerator,
    pool: GoalPool,
    card: Card,
    marks: MarkState,
    bingo: bool,
    user_name: Option<String>,
}

impl Session {
    pub fn new(pool: GoalPool) -> Result<Self, SessionError> {
        let generator = CardGenerator::new();
        let card = generator.generate_card(&pool)?;
        Ok(Session {
            generator,
            pool,
            card,
            marks: MarkState::new(),
            bingo: false,
            user_name: None,
        })
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn marks(&self) -> &MarkState {
        &self.marks
    }

    pub fn bingo(&self) -> bool {
        self.bingo
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// The currently marked goals in row-major card order.
    pub fn marked_goals(&self) -> Vec<Goal> {
        self.marks.marked_goals(&self.card)
    }

    /// Apply one event and return the side effects it asks for.
    ///
    /// The win effect is emitted only on the transition into bingo; further
    /// toggles while the card is already winning stay silent, and unmarking
    /// the only completed line drops the flag again.
    pub fn apply(&mut self, event: SessionEvent) -> Result<Vec<Effect>, SessionError> {
        match event {
            SessionEvent::ToggleCell { row, col } => {
                self.marks.toggle(row, col)?;
                let was_bingo = self.bingo;
                self.bingo = check_bingo(&self.marks);

                let mut effects = vec![Effect::Redraw];
                if self.bingo && !was_bingo {
                    effects.push(Effect::Win);
                }
                Ok(effects)
            }
            SessionEvent::SetUser { name } => {
                // Empty names are stored as-is.
                self.user_name = Some(name);
                Ok(vec![Effect::Redraw])
            }
            SessionEvent::NewCard => {
                self.card = self.generator.generate_card(&self.pool)?;
                self.marks = MarkState::new();
                self.bingo = false;
                Ok(vec![Effect::Redraw])
            }
            SessionEvent::Save { name, goals } => Ok(vec![Effect::Persist { name, goals }]),
        }
    }
}
