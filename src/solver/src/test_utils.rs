#[cfg(test)]
pub mod test_utils {
    use crate::game::{Board, SearchEngine, Trie, WordLimits};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Creates a bonus-free board from 16 letters in row-major order
    pub fn create_test_board(letters: &str) -> Board {
        Board::from_letters(letters).expect("test boards need exactly 16 letters")
    }

    /// Creates a board with known words and no bonuses
    pub fn create_scoring_board() -> Board {
        // S T O N
        // E A R E
        // S N I P
        // E T A R
        create_test_board("stonearesnipetar")
    }

    /// Creates a word list file on disk
    pub fn create_test_wordlist() -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        for word in [
            "ton", "tone", "stone", "stoner", "notes", "onset", "rates", "tares", "snipe", "pine",
            "ripe", "aria", "quit",
        ] {
            writeln!(temp_file, "{}", word).unwrap();
        }
        temp_file.flush().unwrap();
        temp_file
    }

    /// Creates a search engine over `create_test_wordlist`; keep the file alive while using it
    pub fn create_test_search_engine(limits: WordLimits) -> (SearchEngine<Trie>, NamedTempFile) {
        let temp_file = create_test_wordlist();
        let engine = SearchEngine::from_wordlist(temp_file.path(), limits).unwrap();
        (engine, temp_file)
    }
}
