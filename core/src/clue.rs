use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::CategoryId;

/// How much of a clue the board currently shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_answered(self) -> bool {
        matches!(self, Self::Answer)
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
    state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: RevealState) {
        self.state = state;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
}

impl Category {
    pub fn new(id: CategoryId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Column header text.
    pub fn heading(&self) -> String {
        self.title.to_uppercase()
    }
}

/// Question and answer text of one clue as delivered by a [`ClueSource`](crate::ClueSource).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueText {
    pub question: String,
    pub answer: String,
}

impl ClueText {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A category with its clues in the order the service lists them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    pub id: CategoryId,
    pub title: String,
    pub clues: Vec<ClueText>,
}
