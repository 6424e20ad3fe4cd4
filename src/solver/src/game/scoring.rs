use phf::phf_map;

use crate::game::board::Bonus;

static LETTER_POINTS: phf::Map<char, u32> = phf_map! {
    'a' => 1, 'e' => 1, 'i' => 1, 'n' => 1, 'o' => 1, 'r' => 1, 's' => 1, 't' => 1,
    'd' => 2, 'u' => 2, 'l' => 2,
    'g' => 3, 'h' => 3, 'y' => 3,
    'b' => 4, 'c' => 4, 'f' => 4, 'm' => 4, 'p' => 4, 'w' => 4,
    'v' => 5, 'k' => 5,
    'q' => 10, 'j' => 10, 'x' => 10, 'z' => 10,
};

/// Base value of a single letter; unknown characters are worth nothing.
pub fn letter_value(letter: char) -> u32 {
    LETTER_POINTS.get(&letter).copied().unwrap_or(0)
}

/// Bonus awarded for the length of the word text (an implied `u` after `q` counts).
pub fn length_bonus(word_len: usize) -> u32 {
    match word_len {
        5 | 6 => 5,
        7 => 10,
        8 => 15,
        _ => 0,
    }
}

pub fn apply_letter_score(bonus: Bonus, value: u32) -> u32 {
    match bonus {
        Bonus::DoubleLetter => value * 2,
        Bonus::TripleLetter => value * 3,
        Bonus::None | Bonus::DoubleWord | Bonus::TripleWord => value,
    }
}

pub fn apply_word_score(bonus: Bonus, score: u32) -> u32 {
    match bonus {
        Bonus::DoubleWord => score * 2,
        Bonus::TripleWord => score * 3,
        Bonus::None | Bonus::DoubleLetter | Bonus::TripleLetter => score,
    }
}

/// Score of a finished path. One- and two-letter words are flat-valued at 1.
pub fn final_score(letter_sum: u32, word_bonus: Bonus, word_len: usize) -> u32 {
    match word_len {
        1 | 2 => 1,
        _ => apply_word_score(word_bonus, letter_sum) + length_bonus(word_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values() {
        for c in "aeinorst".chars() {
            assert_eq!(letter_value(c), 1, "{}", c);
        }
        assert_eq!(letter_value('d'), 2);
        assert_eq!(letter_value('u'), 2);
        assert_eq!(letter_value('h'), 3);
        assert_eq!(letter_value('w'), 4);
        assert_eq!(letter_value('k'), 5);
        assert_eq!(letter_value('q'), 10);
        assert_eq!(letter_value('z'), 10);
    }

    #[test]
    fn test_unknown_letters_are_worthless() {
        assert_eq!(letter_value('*'), 0);
        assert_eq!(letter_value('A'), 0);
        assert_eq!(letter_value('1'), 0);
    }

    #[test]
    fn test_every_lowercase_letter_has_a_value() {
        for c in 'a'..='z' {
            assert!(letter_value(c) > 0, "{} has no value", c);
        }
    }

    #[test]
    fn test_length_bonus_table() {
        let expected = [0, 0, 0, 0, 0, 5, 5, 10, 15, 0, 0];
        for (len, bonus) in expected.iter().enumerate() {
            assert_eq!(length_bonus(len), *bonus, "length {}", len);
        }
    }

    #[test]
    fn test_letter_bonus_only_touches_letters() {
        assert_eq!(apply_letter_score(Bonus::DoubleLetter, 4), 8);
        assert_eq!(apply_letter_score(Bonus::TripleLetter, 4), 12);
        assert_eq!(apply_letter_score(Bonus::DoubleWord, 4), 4);
        assert_eq!(apply_letter_score(Bonus::None, 4), 4);
    }

    #[test]
    fn test_word_bonus_only_touches_words() {
        assert_eq!(apply_word_score(Bonus::DoubleWord, 7), 14);
        assert_eq!(apply_word_score(Bonus::TripleWord, 7), 21);
        assert_eq!(apply_word_score(Bonus::TripleLetter, 7), 7);
        assert_eq!(apply_word_score(Bonus::None, 7), 7);
    }

    #[test]
    fn test_final_score_five_plain_letters() {
        assert_eq!(final_score(5, Bonus::None, 5), 10);
    }

    #[test]
    fn test_final_score_multiplier_before_length_bonus() {
        // (4 * 3) + 5, not (4 + 5) * 3
        assert_eq!(final_score(4, Bonus::TripleWord, 6), 17);
        assert_eq!(final_score(10, Bonus::DoubleWord, 8), 35);
    }

    #[test]
    fn test_short_words_score_one() {
        assert_eq!(final_score(20, Bonus::TripleWord, 1), 1);
        assert_eq!(final_score(12, Bonus::DoubleWord, 2), 1);
        assert_eq!(final_score(0, Bonus::None, 2), 1);
    }
}
