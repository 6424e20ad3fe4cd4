use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    str::Chars,
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::game::dictionary::Dictionary;

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Trie {
    // Linear search over a Vec beats a HashMap for the handful of children most nodes have
    next: Vec<(char, Box<Trie>)>,
    finish: bool,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Adds a word; entries are trimmed and lowercased, blank lines are skipped.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        if self.insert_chars(&mut word.chars()) {
            self.words += 1;
        }
    }

    fn insert_chars(&mut self, word: &mut Chars) -> bool {
        match word.next() {
            None => {
                let added = !self.finish;
                self.finish = true;
                added
            }
            Some(c) => {
                if let Some(pos) = self.next.iter().position(|(ch, _)| *ch == c) {
                    self.next[pos].1.insert_chars(word)
                } else {
                    let mut trie = Trie::new();
                    let added = trie.insert_chars(word);
                    self.next.push((c, Box::new(trie)));
                    added
                }
            }
        }
    }

    fn child(&self, c: char) -> Option<&Trie> {
        self.next
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, child)| child.as_ref())
    }

    fn descend(&self, chars: &mut Chars) -> Option<&Trie> {
        match chars.next() {
            Some(c) => self.child(c)?.descend(chars),
            None => Some(self),
        }
    }

    pub fn search(&self, word: &str) -> bool {
        self.descend(&mut word.chars())
            .map(|node| node.finish)
            .unwrap_or(false)
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.descend(&mut prefix.chars()).is_some()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Loads a word list with one word per line.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open word list {}", path.display()))?;
        let mut result = Trie::new();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line.with_context(|| {
                format!("failed to read line {} of {}", number + 1, path.display())
            })?;
            result.insert(&line);
        }
        debug!("Loaded {} words from {}", result.len(), path.display());
        Ok(result)
    }
}

impl Dictionary for Trie {
    fn is_word(&self, word: &str) -> bool {
        self.search(word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        Trie::has_prefix(self, prefix)
    }
}

impl From<Vec<&str>> for Trie {
    fn from(words: Vec<&str>) -> Self {
        let mut result = Trie::new();
        for word in words {
            result.insert(word)
        }

        result
    }
}

impl From<Vec<String>> for Trie {
    fn from(words: Vec<String>) -> Self {
        let mut result = Trie::new();
        for word in words {
            result.insert(&word)
        }

        result
    }
}

impl From<String> for Trie {
    fn from(text: String) -> Self {
        let mut result = Trie::new();
        for word in text.lines() {
            result.insert(word);
        }
        result
    }
}

impl TryFrom<PathBuf> for Trie {
    type Error = anyhow::Error;

    fn try_from(value: PathBuf) -> Result<Self> {
        Trie::from_file(value)
    }
}
