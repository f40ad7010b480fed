use alloc::string::String;
use thiserror::Error;

use crate::CluePos;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Could not decode response: {0}")]
    Decode(String),
    #[error("Expected {expected} categories, got {actual}")]
    CategoryCount { expected: usize, actual: usize },
    #[error("Category {title:?} has {actual} clues, expected {expected}")]
    ClueCount {
        title: String,
        expected: usize,
        actual: usize,
    },
    #[error("No clue at {0:?}")]
    InvalidPosition(CluePos),
}

pub type Result<T> = core::result::Result<T, Error>;
