//! Interactive knight-placement session.

use thiserror::Error;

use crate::board::{Square, Tour};
use crate::move_generation::is_knight_move;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StepError {
    #[error("step {step} is outside the board")]
    OutOfBounds { step: Square },
    #[error("step {step} is not a knight move from {prev}")]
    NotAKnightMove { step: Square, prev: Square },
    #[error("square {step} was already visited")]
    AlreadyVisited { step: Square },
}

/// State of one interactive game: the knight placements made so far on the
/// play board.
pub struct Session {
    tour: Tour,
}

impl Session {
    pub fn new(size: i32) -> Self {
        Self {
            tour: Tour::new(size),
        }
    }

    pub fn size(&self) -> i32 {
        self.tour.size()
    }

    pub fn step_count(&self) -> usize {
        self.tour.len()
    }

    pub fn last_step(&self) -> Option<Square> {
        self.tour.last()
    }

    /// Whether the whole board has been covered.
    pub fn is_complete(&self) -> bool {
        self.tour.is_complete()
    }

    /// The 1-based step number placed on `square`, if any.
    pub fn step_number(&self, square: Square) -> Option<usize> {
        self.tour
            .steps()
            .iter()
            .position(|&s| s == square)
            .map(|i| i + 1)
    }

    /// Squares the next step may legally land on.
    pub fn suggestions(&self) -> Vec<Square> {
        self.tour.legal_next_moves()
    }

    /// Validates and applies one step, returning its step number. A failed
    /// step leaves the session unchanged.
    ///
    /// Checks run in order: on the board, a knight move away from the
    /// previous placement (the first placement is unconstrained), and not
    /// yet visited.
    pub fn try_step(&mut self, step: Square) -> Result<usize, StepError> {
        if !step.is_within(self.size()) {
            return Err(StepError::OutOfBounds { step });
        }
        if let Some(prev) = self.tour.last() {
            if !is_knight_move(prev, step) {
                return Err(StepError::NotAKnightMove { step, prev });
            }
        }
        if self.tour.contains(step) {
            return Err(StepError::AlreadyVisited { step });
        }

        self.tour = self.tour.extended(step);
        Ok(self.tour.len())
    }
}
