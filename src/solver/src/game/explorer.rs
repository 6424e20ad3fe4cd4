use thiserror::Error;
use tracing::debug;

use crate::game::answer::WordList;
use crate::game::board::Board;
use crate::game::dictionary::Dictionary;
use crate::game::directions::Direction;
use crate::game::moves::legal_moves;
use crate::game::path::PathState;

pub const DEFAULT_MIN_WORD_SIZE: usize = 4;
pub const DEFAULT_MAX_WORD_SIZE: usize = 8;

/// Order in which children are pushed; the last legal one is expanded first.
const PUSH_ORDER: [Direction; 8] = [
    Direction::South,
    Direction::SouthEast,
    Direction::East,
    Direction::NorthEast,
    Direction::North,
    Direction::NorthWest,
    Direction::West,
    Direction::SouthWest,
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitsError {
    #[error("minimum word size {min} exceeds maximum word size {max}")]
    MinAboveMax { min: usize, max: usize },
    #[error("maximum word size must be at least 1")]
    ZeroMax,
}

/// Inclusive bounds on the length of reported words, in characters of word text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLimits {
    min: usize,
    max: usize,
}

impl WordLimits {
    pub fn new(min: usize, max: usize) -> Result<Self, LimitsError> {
        if max == 0 {
            return Err(LimitsError::ZeroMax);
        }
        if min > max {
            return Err(LimitsError::MinAboveMax { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl Default for WordLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_WORD_SIZE,
            max: DEFAULT_MAX_WORD_SIZE,
        }
    }
}

/// Counters gathered over one exploration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub seeded: usize,
    pub explored: usize,
    pub admitted: usize,
    pub pruned_at_max: usize,
    pub pruned_by_prefix: usize,
    pub peak_worklist: usize,
}

/// Exhaustive search over every self-avoiding walk on the board, driven by
/// an explicit LIFO worklist.
pub struct Explorer<'a, D: Dictionary + ?Sized> {
    board: &'a Board,
    dictionary: &'a D,
    limits: WordLimits,
    prune_prefixes: bool,
}

impl<'a, D: Dictionary + ?Sized> Explorer<'a, D> {
    pub fn new(board: &'a Board, dictionary: &'a D, limits: WordLimits) -> Self {
        Self {
            board,
            dictionary,
            limits,
            prune_prefixes: false,
        }
    }

    /// Stops expanding walks whose word is not the start of any dictionary
    /// word. The set of reported words is unchanged.
    pub fn with_prefix_pruning(mut self, enabled: bool) -> Self {
        self.prune_prefixes = enabled;
        self
    }

    /// One state per cell, stacked so that popping yields row-major order.
    pub fn seeds(&self) -> Vec<PathState<'a>> {
        let mut seeds: Vec<PathState<'a>> = self
            .board
            .cells()
            .map(|cell| PathState::seed(self.board, cell))
            .collect();
        seeds.reverse();
        seeds
    }

    pub fn explore(&self, found: &mut WordList) -> SearchStats {
        let mut stats = SearchStats::default();
        let mut worklist = self.seeds();
        stats.seeded = worklist.len();
        stats.peak_worklist = worklist.len();

        while let Some(state) = worklist.pop() {
            stats.explored += 1;
            let word = state.word();
            let word_len = state.word_len();

            if word_len >= self.limits.min
                && self.dictionary.is_word(word)
                && found.add(word, state.score(), state.cells())
            {
                stats.admitted += 1;
            }

            if word_len >= self.limits.max {
                stats.pruned_at_max += 1;
                continue;
            }
            if self.prune_prefixes && !self.dictionary.has_prefix(word) {
                stats.pruned_by_prefix += 1;
                continue;
            }

            let moves = legal_moves(&state);
            for direction in PUSH_ORDER {
                if moves.contains(&direction) {
                    worklist.push(state.fork(direction));
                }
            }
            stats.peak_worklist = stats.peak_worklist.max(worklist.len());
        }

        debug!(
            "Explored {} states from {} seeds, peak worklist {}",
            stats.explored, stats.seeded, stats.peak_worklist
        );
        stats
    }
}
