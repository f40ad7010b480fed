use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::RevealOutcome;

/// What a clue currently shows to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Answer)
    }

    /// The state a click moves to; `Answer` maps to itself.
    pub const fn next(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => Question,
            Question => Answer,
            Answer => Answer,
        }
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    value: Option<u32>,
    reveal_state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>, value: Option<u32>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            value,
            reveal_state: Default::default(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal_state
    }

    pub fn visible_text(&self) -> Option<&str> {
        use RevealState::*;
        match self.reveal_state {
            Hidden => None,
            Question => Some(&self.question),
            Answer => Some(&self.answer),
        }
    }

    pub fn reveal(&mut self) -> RevealOutcome {
        use RevealState::*;
        let outcome = match self.reveal_state {
            Hidden => RevealOutcome::ShowedQuestion,
            Question => RevealOutcome::ShowedAnswer,
            Answer => RevealOutcome::NoChange,
        };
        self.reveal_state = self.reveal_state.next();
        outcome
    }
}
