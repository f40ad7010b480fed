/// Identifier the remote service assigns to a category.
pub type CategoryId = u64;

/// Position of a clue on the board: `(category index, clue index)`.
pub type CluePos = (usize, usize);
