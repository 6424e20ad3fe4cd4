use std::collections::HashSet;

/// Membership test over lowercase word strings.
pub trait Dictionary {
    fn is_word(&self, word: &str) -> bool;

    /// Whether any word starts with `prefix`. Implementations that cannot
    /// answer cheaply keep the default, which never prunes.
    fn has_prefix(&self, _prefix: &str) -> bool {
        true
    }
}

impl Dictionary for HashSet<String> {
    fn is_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}
