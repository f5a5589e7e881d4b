use alloc::format;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One game of clues: the category headers plus a `(width, height)` grid of clues.
///
/// The clue grid is kept in standard layout with the column as the outer axis, so the backing slice is the
/// flattened clue list addressed by [`BoardConfig::flat_index`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
    clues: Array2<Clue>,
    open_clue: Option<Coord2>,
}

impl Board {
    pub fn new(config: BoardConfig, categories: Vec<CategoryData>) -> Result<Self> {
        let (width, height) = config.size;
        if categories.len() != usize::from(width) {
            return Err(GameError::WrongCategoryCount {
                expected: width,
                actual: categories.len(),
            });
        }

        let mut headers = Vec::with_capacity(categories.len());
        let mut flat = Vec::with_capacity(usize::from(config.total_cells()));
        for data in categories {
            if data.clues.len() < usize::from(height) {
                return Err(GameError::NotEnoughClues {
                    category: data.id,
                    expected: height,
                    actual: data.clues.len(),
                });
            }
            if data.title.trim().is_empty() {
                return Err(GameError::MalformedResponse(format!(
                    "category {} has no title",
                    data.id
                )));
            }

            for (row, text) in data.clues.into_iter().take(height.into()).enumerate() {
                if text.question.trim().is_empty() || text.answer.trim().is_empty() {
                    return Err(GameError::MalformedResponse(format!(
                        "category {} clue {} is missing its question or answer",
                        data.id, row
                    )));
                }
                flat.push(Clue::new(text.question, text.answer));
            }
            headers.push(Category::new(data.id, data.title));
        }

        let clues = Array2::from_shape_vec(config.size.to_nd_index(), flat)
            .map_err(|_| GameError::InvalidCoords)?;

        log::debug!("built board {:?} with {} clues", config.size, clues.len());
        Ok(Self {
            categories: headers,
            clues,
            open_clue: None,
        })
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size())
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.clues.dim();
        // Board::new only accepts shapes that came from a Coord2.
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, column: Coord) -> Option<&Category> {
        self.categories.get(usize::from(column))
    }

    pub fn clue_at(&self, coords: Coord2) -> Result<&Clue> {
        let coords = self.config().validate_coords(coords)?;
        Ok(&self.clues[coords.to_nd_index()])
    }

    pub fn clue_at_index(&self, index: usize) -> Option<&Clue> {
        self.clues().get(index)
    }

    /// Every clue in flattened order.
    pub fn clues(&self) -> &[Clue] {
        self.clues
            .as_slice()
            .expect("board is always built in standard layout")
    }

    /// Whether a question is on screen and waiting for its answer.
    pub fn is_locked(&self) -> bool {
        self.open_clue.is_some()
    }

    pub fn open_clue(&self) -> Option<Coord2> {
        self.open_clue
    }

    pub fn answered_count(&self) -> usize {
        self.clues
            .iter()
            .filter(|clue| clue.state().is_answered())
            .count()
    }

    pub fn is_finished(&self) -> bool {
        self.answered_count() == self.clues.len()
    }

    /// Whether a click on `coords` would change anything right now.
    pub fn can_reveal(&self, coords: Coord2) -> bool {
        let Ok(clue) = self.clue_at(coords) else {
            return false;
        };

        match (clue.state(), self.open_clue) {
            (RevealState::Hidden, None) => true,
            (RevealState::Question, Some(open)) => open == coords,
            _ => false,
        }
    }

    /// Advances the clue at `coords` one step: hidden to question, question to answer.
    ///
    /// Only one question may be open at a time. While it is, every other cell ignores clicks, and answered cells
    /// always do.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealState::*;

        let coords = self.config().validate_coords(coords)?;
        let state = self.clues[coords.to_nd_index()].state();

        Ok(match (state, self.open_clue) {
            (Hidden, None) => {
                self.clues[coords.to_nd_index()].set_state(Question);
                self.open_clue = Some(coords);
                log::debug!("question opened at {:?}", coords);
                RevealOutcome::ShowQuestion
            }
            (Question, Some(open)) if open == coords => {
                self.clues[coords.to_nd_index()].set_state(Answer);
                self.open_clue = None;
                log::debug!("answer shown at {:?}", coords);
                RevealOutcome::ShowAnswer
            }
            (Hidden, Some(open)) => {
                log::trace!("{:?} ignored, question at {:?} still open", coords, open);
                RevealOutcome::NoChange
            }
            (Question, _) | (Answer, _) => RevealOutcome::NoChange,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn category(id: CategoryId, title: &str, clues: usize) -> CategoryData {
        CategoryData {
            id,
            title: title.to_string(),
            clues: (0..clues)
                .map(|i| ClueText::new(format!("{title} question {i}"), format!("{title} answer {i}")))
                .collect(),
        }
    }

    fn math_and_art() -> Board {
        let config = BoardConfig::new((2, 5));
        Board::new(config, vec![category(1, "Math", 5), category(2, "Art", 5)]).unwrap()
    }

    #[test]
    fn clues_are_flattened_in_category_then_row_order() {
        let board = math_and_art();

        assert_eq!(board.clues().len(), 10);
        assert_eq!(board.clue_at_index(0).unwrap().question(), "Math question 0");
        assert_eq!(board.clue_at_index(4).unwrap().question(), "Math question 4");
        assert_eq!(board.clue_at_index(5).unwrap().question(), "Art question 0");
        for column in 0..2 {
            for row in 0..5 {
                let index = board.config().flat_index((column, row)).unwrap();
                assert_eq!(board.clue_at_index(index), Some(board.clue_at((column, row)).unwrap()));
            }
        }
    }

    #[test]
    fn click_shows_question_then_answer_and_ignores_other_cells_meanwhile() {
        let mut board = math_and_art();

        assert_eq!(board.reveal((0, 0)).unwrap(), RevealOutcome::ShowQuestion);
        assert_eq!(board.clue_at((0, 0)).unwrap().state(), RevealState::Question);
        assert!(board.is_locked());

        assert!(!board.can_reveal((1, 0)));
        assert!(board.can_reveal((0, 0)));
        assert_eq!(board.reveal((1, 0)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(board.clue_at((1, 0)).unwrap().state(), RevealState::Hidden);

        assert_eq!(board.reveal((0, 0)).unwrap(), RevealOutcome::ShowAnswer);
        assert_eq!(board.clue_at((0, 0)).unwrap().state(), RevealState::Answer);
        assert!(!board.is_locked());

        assert_eq!(board.reveal((1, 0)).unwrap(), RevealOutcome::ShowQuestion);
        assert_eq!(board.open_clue(), Some((1, 0)));
    }

    #[test]
    fn answered_clue_is_absorbing() {
        let mut board = math_and_art();
        board.reveal((1, 3)).unwrap();
        board.reveal((1, 3)).unwrap();

        assert!(!board.can_reveal((1, 3)));
        for _ in 0..3 {
            assert_eq!(board.reveal((1, 3)).unwrap(), RevealOutcome::NoChange);
            assert_eq!(board.clue_at((1, 3)).unwrap().state(), RevealState::Answer);
        }
        assert_eq!(board.answered_count(), 1);
    }

    #[test]
    fn at_most_one_question_is_open_during_any_click_sequence() {
        let mut board = math_and_art();
        let clicks = [(0, 0), (1, 1), (0, 0), (0, 0), (1, 1), (0, 1), (1, 1), (0, 1), (1, 4)];

        for coords in clicks {
            let before = board.clue_at(coords).unwrap().state();
            board.reveal(coords).unwrap();
            let after = board.clue_at(coords).unwrap().state();
            assert!(after as u8 >= before as u8, "{coords:?} went from {before:?} back to {after:?}");

            let open = board
                .clues()
                .iter()
                .filter(|clue| clue.state() == RevealState::Question)
                .count();
            assert!(open <= 1);
            assert_eq!(open == 1, board.is_locked());
        }
    }

    #[test]
    fn board_finishes_once_every_clue_is_answered() {
        let config = BoardConfig::new((1, 2));
        let mut board = Board::new(config, vec![category(3, "Tiny", 2)]).unwrap();

        for row in 0..2 {
            board.reveal((0, row)).unwrap();
            board.reveal((0, row)).unwrap();
        }
        assert!(board.is_finished());
    }

    #[test]
    fn extra_clues_are_dropped() {
        let config = BoardConfig::new((1, 5));
        let board = Board::new(config, vec![category(4, "Long", 9)]).unwrap();

        assert_eq!(board.clues().len(), 5);
        assert_eq!(board.clue_at((0, 4)).unwrap().answer(), "Long answer 4");
    }

    #[test]
    fn rejects_wrong_category_count() {
        let config = BoardConfig::default();
        let err = Board::new(config, vec![category(1, "Math", 5)]).unwrap_err();
        assert_eq!(
            err,
            GameError::WrongCategoryCount {
                expected: 6,
                actual: 1
            }
        );
    }

    #[test]
    fn rejects_short_category() {
        let config = BoardConfig::new((2, 5));
        let err = Board::new(config, vec![category(1, "Math", 5), category(2, "Art", 3)]).unwrap_err();
        assert_eq!(
            err,
            GameError::NotEnoughClues {
                category: 2,
                expected: 5,
                actual: 3
            }
        );
    }

    #[test]
    fn rejects_blank_clue_text() {
        let config = BoardConfig::new((1, 2));
        let mut data = category(5, "Blank", 2);
        data.clues[1].answer = " ".to_string();

        let err = Board::new(config, vec![data]).unwrap_err();
        assert!(matches!(err, GameError::MalformedResponse(_)));
    }

    #[test]
    fn reveal_rejects_out_of_range_coords() {
        let mut board = math_and_art();
        assert_eq!(board.reveal((2, 0)), Err(GameError::InvalidCoords));
        assert!(!board.is_locked());
    }
}
