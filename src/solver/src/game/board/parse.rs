use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use super::{Board, Bonus, Tile, BOARD_SIZE};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid bonus after '{letter}': '{marker}{value}'")]
    InvalidBonus {
        letter: char,
        marker: char,
        value: String,
    },
    #[error("board needs {expected} tiles, found {found}")]
    Incomplete { expected: usize, found: usize },
}

/// Reads the bonus suffix that may follow a letter, consuming it from `chars`.
fn read_bonus(
    letter: char,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<Bonus, BoardError> {
    let marker = match chars.peek() {
        Some(&m) if m == '+' || m == '*' => m,
        _ => return Ok(Bonus::None),
    };
    chars.next();

    let value = chars.next();
    match (marker, value) {
        ('+', Some('2')) => Ok(Bonus::DoubleLetter),
        ('+', Some('3')) => Ok(Bonus::TripleLetter),
        ('*', Some('2')) => Ok(Bonus::DoubleWord),
        ('*', Some('3')) => Ok(Bonus::TripleWord),
        _ => Err(BoardError::InvalidBonus {
            letter,
            marker,
            value: value.map(String::from).unwrap_or_default(),
        }),
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses the textual board format: one token per cell in row-major
    /// order, each a letter optionally followed by `+2`/`+3` (letter bonus)
    /// or `*2`/`*3` (word bonus). `qu` is read as a single `q` tile.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let capacity = BOARD_SIZE * BOARD_SIZE;
        let mut tiles: Vec<Tile> = Vec::with_capacity(capacity);

        'reading: for token in input.split_whitespace() {
            let mut chars = token.chars().peekable();
            while let Some(c) = chars.next() {
                if !c.is_alphabetic() {
                    continue;
                }
                if tiles.len() == capacity {
                    warn!("Ignoring board input after tile {}: '{}'", capacity, token);
                    break 'reading;
                }

                let letter = c.to_ascii_lowercase();
                if letter == 'q' && matches!(chars.peek(), Some('u') | Some('U')) {
                    chars.next();
                }
                let bonus = read_bonus(letter, &mut chars)?;
                tiles.push(Tile::new(letter, bonus));
            }
        }

        if tiles.len() < capacity {
            return Err(BoardError::Incomplete {
                expected: capacity,
                found: tiles.len(),
            });
        }

        let mut grid = [[Tile::plain('a'); BOARD_SIZE]; BOARD_SIZE];
        for (i, tile) in tiles.into_iter().enumerate() {
            grid[i / BOARD_SIZE][i % BOARD_SIZE] = tile;
        }
        Ok(Board::new(grid))
    }
}
