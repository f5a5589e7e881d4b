#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use clue::*;
pub use error::*;
pub use loader::*;
pub use types::*;

mod board;
mod clue;
mod error;
mod loader;
mod types;

/// Shape of a board: one column per category, one row per clue slot.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
}

impl BoardConfig {
    pub const DEFAULT_CATEGORIES: Coord = 6;
    pub const DEFAULT_CLUES_PER_CATEGORY: Coord = 5;

    pub const fn new_unchecked(size: Coord2) -> Self {
        Self { size }
    }

    pub fn new((width, height): Coord2) -> Self {
        let width = width.clamp(1, Coord::MAX);
        let height = height.clamp(1, Coord::MAX);
        Self::new_unchecked((width, height))
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Position of `(column, row)` in the flattened clue list: `height * column + row`.
    pub fn flat_index(&self, coords: Coord2) -> Result<usize> {
        let (column, row) = self.validate_coords(coords)?;
        Ok(usize::from(self.height()) * usize::from(column) + usize::from(row))
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked((Self::DEFAULT_CATEGORIES, Self::DEFAULT_CLUES_PER_CATEGORY))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    ShowQuestion,
    ShowAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowQuestion => true,
            ShowAnswer => true,
        }
    }
}
