#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use api::*;
pub use board::*;
pub use clue::*;
pub use error::*;
pub use loader::*;
pub use types::*;

mod api;
mod board;
mod clue;
mod error;
mod loader;
mod types;

/// Number of categories on a standard board.
pub const NUM_CATEGORIES: usize = 6;

/// Number of clues shown per category on a standard board.
pub const NUM_QUESTIONS_PER_CAT: usize = 2;

/// Shape of a board: how many columns and how many clues per column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: usize,
    pub clues_per_category: usize,
}

impl GameConfig {
    pub const fn new_unchecked(categories: usize, clues_per_category: usize) -> Self {
        Self {
            categories,
            clues_per_category,
        }
    }

    /// Builds a config, bumping zero dimensions up to one.
    pub fn new(categories: usize, clues_per_category: usize) -> Self {
        Self::new_unchecked(categories.max(1), clues_per_category.max(1))
    }

    pub const fn total_clues(&self) -> usize {
        self.categories.saturating_mul(self.clues_per_category)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(NUM_CATEGORIES, NUM_QUESTIONS_PER_CAT)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowedQuestion,
    ShowedAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowedQuestion => true,
            ShowedAnswer => true,
        }
    }
}
