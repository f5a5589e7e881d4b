use alloc::string::String;
use thiserror::Error;

use crate::{CategoryId, Coord};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Expected {expected} categories, got {actual}")]
    WrongCategoryCount { expected: Coord, actual: usize },
    #[error("Category {category} has {actual} clues, at least {expected} are needed")]
    NotEnoughClues {
        category: CategoryId,
        expected: Coord,
        actual: usize,
    },
    #[error("Could not fetch from the clue service: {0}")]
    FetchFailure(String),
    #[error("Malformed response from the clue service: {0}")]
    MalformedResponse(String),
}

impl GameError {
    /// Whether the error came from talking to the remote service rather than from board construction.
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::FetchFailure(_) | Self::MalformedResponse(_))
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
