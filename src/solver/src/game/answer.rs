use core::fmt::Display;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::game::board::Cell;

/// A dictionary word discovered on the board, with the score and path of
/// the first walk that spelled it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub score: u32,
    pub path: Vec<Cell>,
}

impl Display for FoundWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", &self.word))
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Ranked {
    admitted: usize,
    found: FoundWord,
}

impl Ord for Ranked {
    // Higher score first; among equal scores the earlier admission wins.
    fn cmp(&self, other: &Self) -> Ordering {
        self.found
            .score
            .cmp(&other.found.score)
            .then_with(|| other.admitted.cmp(&self.admitted))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Collects discovered words, keeping only the first arrival of each word
/// text, and hands them back best score first.
#[derive(Debug, Default)]
pub struct WordList {
    words_found: HashSet<String>,
    ranked: BinaryHeap<Ranked>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when `word` was already admitted; its first score stands
    /// even if this one is higher.
    pub fn add(&mut self, word: &str, score: u32, path: &[Cell]) -> bool {
        if self.words_found.contains(word) {
            return false;
        }
        self.words_found.insert(word.to_string());
        self.ranked.push(Ranked {
            admitted: self.words_found.len(),
            found: FoundWord {
                word: word.to_string(),
                score,
                path: path.to_vec(),
            },
        });
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words_found.contains(word)
    }

    /// Words still waiting to be drained.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Removes every entry, highest score first.
    pub fn drain(&mut self) -> Vec<FoundWord> {
        let mut words = Vec::with_capacity(self.ranked.len());
        while let Some(ranked) = self.ranked.pop() {
            words.push(ranked.found);
        }
        words
    }
}
