use crate::game::directions::Direction;
use core::fmt;

pub mod parse;

pub use parse::BoardError;

pub const BOARD_SIZE: usize = 4;

/// A position on the board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        assert!(
            x < BOARD_SIZE && y < BOARD_SIZE,
            "cell ({}, {}) is off the board",
            x,
            y
        );
        Cell { x, y }
    }

    /// The neighbouring cell in `direction`, or `None` when that would leave the board.
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return None;
        }
        Some(Cell { x, y })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bonus {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Bonus {
    pub fn is_word_bonus(self) -> bool {
        matches!(self, Bonus::DoubleWord | Bonus::TripleWord)
    }

    /// The suffix used for this bonus in the textual board format.
    pub fn suffix(self) -> &'static str {
        match self {
            Bonus::None => "",
            Bonus::DoubleLetter => "+2",
            Bonus::TripleLetter => "+3",
            Bonus::DoubleWord => "*2",
            Bonus::TripleWord => "*3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: char,
    pub bonus: Bonus,
}

impl Tile {
    pub fn new(letter: char, bonus: Bonus) -> Self {
        Tile {
            letter: letter.to_ascii_lowercase(),
            bonus,
        }
    }

    pub fn plain(letter: char) -> Self {
        Tile::new(letter, Bonus::None)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.letter == 'q' {
            write!(f, "qu{}", self.bonus.suffix())
        } else {
            write!(f, "{}{}", self.letter, self.bonus.suffix())
        }
    }
}

/// The fixed letter grid, indexed `[row][col]`. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [[Tile; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new(tiles: [[Tile; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { tiles }
    }

    /// Builds a bonus-free board from 16 letters in row-major order.
    pub fn from_letters(letters: &str) -> Option<Self> {
        let letters: Vec<char> = letters.chars().collect();
        if letters.len() != BOARD_SIZE * BOARD_SIZE {
            return None;
        }
        let mut tiles = [[Tile::plain('a'); BOARD_SIZE]; BOARD_SIZE];
        for (i, letter) in letters.into_iter().enumerate() {
            tiles[i / BOARD_SIZE][i % BOARD_SIZE] = Tile::plain(letter);
        }
        Some(Self::new(tiles))
    }

    pub fn tile_at(&self, cell: Cell) -> &Tile {
        &self.tiles[cell.y][cell.x]
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Cell { x, y }))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.tiles {
            let tokens: Vec<String> = row.iter().map(|tile| tile.to_string()).collect();
            writeln!(f, "{}", tokens.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils;

    #[test]
    fn test_step_inside_board() {
        let cell = Cell::new(1, 1);
        assert_eq!(cell.step(Direction::North), Some(Cell::new(1, 0)));
        assert_eq!(cell.step(Direction::SouthEast), Some(Cell::new(2, 2)));
        assert_eq!(cell.step(Direction::West), Some(Cell::new(0, 1)));
    }

    #[test]
    fn test_step_off_board() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.step(Direction::North), None);
        assert_eq!(corner.step(Direction::West), None);
        assert_eq!(corner.step(Direction::NorthWest), None);

        let far = Cell::new(3, 3);
        assert_eq!(far.step(Direction::East), None);
        assert_eq!(far.step(Direction::South), None);
    }

    #[test]
    #[should_panic]
    fn test_cell_rejects_out_of_range() {
        Cell::new(4, 0);
    }

    #[test]
    fn test_tile_at_is_row_major() {
        let board = test_utils::create_test_board("abcdefghijklmnop");
        assert_eq!(board.tile_at(Cell::new(0, 0)).letter, 'a');
        assert_eq!(board.tile_at(Cell::new(3, 0)).letter, 'd');
        assert_eq!(board.tile_at(Cell::new(0, 1)).letter, 'e');
        assert_eq!(board.tile_at(Cell::new(3, 3)).letter, 'p');
    }

    #[test]
    fn test_cells_visits_every_position_once() {
        let board = test_utils::create_test_board("abcdefghijklmnop");
        let cells: Vec<Cell> = board.cells().collect();
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[4], Cell::new(0, 1));
        let mut unique = cells.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 16);
    }

    #[test]
    fn test_from_letters_requires_sixteen() {
        assert!(Board::from_letters("abc").is_none());
        assert!(Board::from_letters("abcdefghijklmnopq").is_none());
    }

    #[test]
    fn test_display_uses_board_format() {
        let mut tiles = [[Tile::plain('e'); BOARD_SIZE]; BOARD_SIZE];
        tiles[0][0] = Tile::new('b', Bonus::DoubleLetter);
        tiles[0][1] = Tile::new('q', Bonus::None);
        tiles[3][3] = Tile::new('x', Bonus::TripleWord);
        let text = Board::new(tiles).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "b+2\tqu\te\te");
        assert_eq!(lines[3], "e\te\te\tx*3");
    }
}
