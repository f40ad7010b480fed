use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A titled column of clues.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// The clues of one game, `categories × clues_per_category`.
///
/// Only built through [`Board::new`] (deserializing goes through it too), so
/// every category holds the same number of clues and the grid is always
/// rectangular.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBoard")]
pub struct Board {
    categories: Vec<Category>,
    config: GameConfig,
}

#[derive(Deserialize)]
struct UncheckedBoard {
    categories: Vec<Category>,
    config: GameConfig,
}

impl TryFrom<UncheckedBoard> for Board {
    type Error = Error;

    fn try_from(board: UncheckedBoard) -> Result<Self> {
        Self::new(board.categories, board.config)
    }
}

impl Board {
    pub fn new(categories: Vec<Category>, config: GameConfig) -> Result<Self> {
        if categories.len() != config.categories {
            return Err(Error::CategoryCount {
                expected: config.categories,
                actual: categories.len(),
            });
        }

        if let Some(category) = categories
            .iter()
            .find(|category| category.clues.len() != config.clues_per_category)
        {
            return Err(Error::ClueCount {
                title: category.title.clone(),
                expected: config.clues_per_category,
                actual: category.clues.len(),
            });
        }

        Ok(Self { categories, config })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::title)
    }

    pub fn validate_pos(&self, pos: CluePos) -> Result<CluePos> {
        let (category, clue) = pos;
        if category < self.config.categories && clue < self.config.clues_per_category {
            Ok(pos)
        } else {
            Err(Error::InvalidPosition(pos))
        }
    }

    pub fn clue_at(&self, pos: CluePos) -> Result<&Clue> {
        let (category, clue) = self.validate_pos(pos)?;
        Ok(&self.categories[category].clues[clue])
    }

    pub fn reveal(&mut self, pos: CluePos) -> Result<RevealOutcome> {
        let (category, clue) = self.validate_pos(pos)?;
        let outcome = self.categories[category].clues[clue].reveal();
        log::debug!("reveal {:?}: {:?}", pos, outcome);
        Ok(outcome)
    }

    /// Row-major view of the grid: one row per clue index, one cell per category.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = (CluePos, &Clue)>> {
        (0..self.config.clues_per_category).map(move |clue| {
            self.categories
                .iter()
                .enumerate()
                .map(move |(category, column)| ((category, clue), &column.clues[clue]))
        })
    }

    pub fn is_finished(&self) -> bool {
        self.categories
            .iter()
            .flat_map(|category| category.clues.iter())
            .all(|clue| clue.reveal_state().is_final())
    }
}
