use thiserror::Error;

use crate::state::Phase;

/// Why a submitted answer could not be read as a cube count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAnswer {
    #[error("no answer entered")]
    Empty,

    #[error("{0:?} is not a whole number")]
    NotANumber(String),

    #[error("{0} is not a positive count")]
    NotPositive(i64),
}

/// Errors returned by game transitions. None of them change game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidAnswer),

    #[error("answers are not accepted while {0:?}")]
    NotAcceptingAnswers(Phase),
}
