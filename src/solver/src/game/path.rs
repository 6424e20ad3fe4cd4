use std::collections::HashSet;

use crate::game::board::{Board, Bonus, Cell};
use crate::game::directions::Direction;
use crate::game::scoring;

/// A self-avoiding walk over the board together with the word it spells.
///
/// States are forked by value: a child owns its own copy of the visited set
/// and word text, so nothing a child does is visible to its parent.
#[derive(Clone, Debug, PartialEq)]
pub struct PathState<'b> {
    board: &'b Board,
    current: Cell,
    cells: Vec<Cell>,
    visited: HashSet<Cell>,
    last_direction: Option<Direction>,
    word: String,
    letter_score: u32,
    word_bonus: Bonus,
}

impl<'b> PathState<'b> {
    /// A one-cell path starting at `cell`.
    pub fn seed(board: &'b Board, cell: Cell) -> Self {
        let mut state = PathState {
            board,
            current: cell,
            cells: Vec::new(),
            visited: HashSet::new(),
            last_direction: None,
            word: String::new(),
            letter_score: 0,
            word_bonus: Bonus::None,
        };
        state.visit(cell);
        state
    }

    fn visit(&mut self, cell: Cell) {
        assert!(
            self.visited.insert(cell),
            "path {:?} already visits {}",
            self.cells,
            cell
        );
        self.cells.push(cell);
        self.add_to_word(cell);
    }

    fn add_to_word(&mut self, cell: Cell) {
        let tile = self.board.tile_at(cell);

        let letter_value = scoring::letter_value(tile.letter);
        self.letter_score += scoring::apply_letter_score(tile.bonus, letter_value);
        // The most recent word bonus replaces any earlier one.
        if tile.bonus.is_word_bonus() {
            self.word_bonus = tile.bonus;
        }

        self.word.push(tile.letter);
        if tile.letter == 'q' {
            self.word.push('u');
        }
    }

    /// Moves one step. The move generator guarantees the target is on the
    /// board and unvisited; anything else is a bug and aborts.
    pub fn advance(&mut self, direction: Direction) {
        let target = self.current.step(direction).unwrap_or_else(|| {
            panic!(
                "cannot advance {} from {}: target is off the board",
                direction, self.current
            )
        });
        self.current = target;
        self.last_direction = Some(direction);
        self.visit(target);
    }

    /// An independent copy of this state, advanced by `direction`.
    pub fn fork(&self, direction: Direction) -> PathState<'b> {
        let mut child = self.clone();
        child.advance(direction);
        child
    }

    pub fn current(&self) -> Cell {
        self.current
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn has_visited(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Length of the word text in characters, which can exceed the cell count.
    pub fn word_len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn letter_score(&self) -> u32 {
        self.letter_score
    }

    pub fn word_bonus(&self) -> Bonus {
        self.word_bonus
    }

    pub fn score(&self) -> u32 {
        scoring::final_score(self.letter_score, self.word_bonus, self.word_len())
    }
}
