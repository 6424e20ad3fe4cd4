pub mod answer;
pub mod board;
pub mod dictionary;
pub mod directions;
pub mod explorer;
pub mod moves;
pub mod path;
pub mod scoring;
pub mod trie;

pub use answer::{FoundWord, WordList};
pub use board::{Board, BoardError, Bonus, Cell, Tile};
pub use dictionary::Dictionary;
pub use explorer::{Explorer, SearchStats, WordLimits};
pub use trie::Trie;

use std::path::Path;

use anyhow::Result;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use tracing::info;

use board::BOARD_SIZE;

const LETTER_FREQUENCIES: [(char, f64); 26] = [
    ('a', 0.078),
    ('b', 0.02),
    ('c', 0.04),
    ('d', 0.038),
    ('e', 0.11),
    ('f', 0.014),
    ('g', 0.03),
    ('h', 0.023),
    ('i', 0.086),
    ('j', 0.0021),
    ('k', 0.0097),
    ('l', 0.053),
    ('m', 0.027),
    ('n', 0.072),
    ('o', 0.061),
    ('p', 0.028),
    ('q', 0.0019),
    ('r', 0.073),
    ('s', 0.087),
    ('t', 0.067),
    ('u', 0.033),
    ('v', 0.01),
    ('w', 0.0091),
    ('x', 0.0027),
    ('y', 0.016),
    ('z', 0.0044),
];

// Bonus tiles placed on every generated board.
const GENERATED_BONUSES: [Bonus; 3] = [Bonus::DoubleLetter, Bonus::TripleLetter, Bonus::DoubleWord];

/// Random boards drawn from English letter frequencies.
pub struct BoardGenerator {
    letters: Vec<char>,
    distribution: WeightedIndex<f64>,
}

impl BoardGenerator {
    pub fn new() -> Self {
        let letters = LETTER_FREQUENCIES.iter().map(|(c, _)| *c).collect();
        let distribution = WeightedIndex::new(LETTER_FREQUENCIES.iter().map(|(_, w)| *w))
            .expect("letter frequencies are positive");
        Self {
            letters,
            distribution,
        }
    }

    pub fn generate_board<R: rand::Rng>(&self, rng: &mut R) -> Board {
        let mut tiles = [[Tile::plain('a'); BOARD_SIZE]; BOARD_SIZE];
        for row in tiles.iter_mut() {
            for tile in row.iter_mut() {
                *tile = Tile::plain(self.letters[self.distribution.sample(rng)]);
            }
        }

        let mut positions: Vec<usize> = (0..BOARD_SIZE * BOARD_SIZE).collect();
        positions.shuffle(rng);
        for (position, bonus) in positions.into_iter().zip(GENERATED_BONUSES) {
            tiles[position / BOARD_SIZE][position % BOARD_SIZE].bonus = bonus;
        }

        Board::new(tiles)
    }
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// The ranked outcome of one search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub words: Vec<FoundWord>,
    pub stats: SearchStats,
}

/// Combines the dictionary with the run's word limits.
pub struct SearchEngine<D: Dictionary = Trie> {
    dictionary: D,
    limits: WordLimits,
    prune_prefixes: bool,
}

impl SearchEngine<Trie> {
    pub fn from_wordlist<P: AsRef<Path>>(wordlist_path: P, limits: WordLimits) -> Result<Self> {
        let dictionary = Trie::from_file(wordlist_path.as_ref())?;
        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            wordlist_path.as_ref().display()
        );
        Ok(Self::new(dictionary, limits))
    }
}

impl<D: Dictionary> SearchEngine<D> {
    pub fn new(dictionary: D, limits: WordLimits) -> Self {
        Self {
            dictionary,
            limits,
            prune_prefixes: false,
        }
    }

    pub fn with_prefix_pruning(mut self, enabled: bool) -> Self {
        self.prune_prefixes = enabled;
        self
    }

    pub fn validate_word(&self, word: &str) -> bool {
        self.dictionary.is_word(word)
    }

    pub fn find_words(&self, board: &Board) -> SearchResult {
        let mut found = WordList::new();
        let stats = Explorer::new(board, &self.dictionary, self.limits)
            .with_prefix_pruning(self.prune_prefixes)
            .explore(&mut found);
        let words = found.drain();
        info!(
            "Found {} words after exploring {} paths",
            words.len(),
            stats.explored
        );
        SearchResult { words, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils;
    use rand::SeedableRng;

    #[test]
    fn test_board_generator_is_deterministic_per_seed() {
        let generator = BoardGenerator::new();
        let a = generator.generate_board(&mut rand::rngs::StdRng::seed_from_u64(42));
        let b = generator.generate_board(&mut rand::rngs::StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_board_generator_places_bonuses() {
        let generator = BoardGenerator::new();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let board = generator.generate_board(&mut rng);
            let mut bonuses: Vec<Bonus> = board
                .cells()
                .map(|cell| board.tile_at(cell).bonus)
                .filter(|bonus| *bonus != Bonus::None)
                .collect();
            assert_eq!(bonuses.len(), GENERATED_BONUSES.len());
            bonuses.sort_by_key(|bonus| bonus.suffix());
            assert_eq!(
                bonuses,
                vec![Bonus::DoubleWord, Bonus::DoubleLetter, Bonus::TripleLetter]
            );
            for cell in board.cells() {
                assert!(board.tile_at(cell).letter.is_ascii_lowercase());
            }
        }
    }

    #[test]
    fn test_generated_board_parses_back() {
        let generator = BoardGenerator::new();
        let board = generator.generate_board(&mut rand::rngs::StdRng::seed_from_u64(3));
        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn test_search_engine_validate_word() {
        let (engine, _temp_file) = test_utils::create_test_search_engine(WordLimits::default());
        assert!(engine.validate_word("stone"));
        assert!(!engine.validate_word("stonez"));
    }

    #[test]
    fn test_search_engine_find_words() {
        let (engine, _temp_file) = test_utils::create_test_search_engine(WordLimits::default());
        let board = test_utils::create_scoring_board();
        let result = engine.find_words(&board);

        let words: Vec<&str> = result.words.iter().map(|w| w.word.as_str()).collect();
        assert!(words.contains(&"stone"));
        assert!(words.contains(&"tone"));
        // three letters, below the default minimum
        assert!(!words.contains(&"ton"));
        for pair in result.words.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(result.stats.admitted, result.words.len());
    }

    #[test]
    fn test_search_engine_prefix_pruning_matches() {
        let (engine, _temp_file) = test_utils::create_test_search_engine(WordLimits::default());
        let board = test_utils::create_scoring_board();
        let plain = engine.find_words(&board);
        let engine = engine.with_prefix_pruning(true);
        let pruned = engine.find_words(&board);
        assert_eq!(plain.words, pruned.words);
    }

    #[test]
    fn test_search_engine_missing_wordlist() {
        let result = SearchEngine::from_wordlist("/no/such/wordlist", WordLimits::default());
        assert!(result.is_err());
    }
}
