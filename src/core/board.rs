//! 3x3 tile grid
//!
//! The grid is stored row-major as nine bytes, `0` for the blank and `1..=8`
//! for the numbered tiles. The solved layout puts the blank first:
//!
//! ```text
//! b 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! so tile `t` belongs at linear index `t`.

use super::direction::{Direction, MoveError};
use super::heuristic::Heuristic;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width and height of the grid
pub const SIDE: usize = 3;

/// Number of cells in the grid
pub const CELLS: usize = SIDE * SIDE;

/// Symbol used for the blank in layouts and rendering
pub const BLANK_SYMBOL: char = 'b';

const BLANK: u8 = 0;

/// An 8-puzzle arrangement
///
/// Always holds each of `0..=8` exactly once; constructors reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: usize,
}

/// Error type for malformed layouts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Layout must contain exactly 9 cells, got {0}")]
    InvalidLength(usize),
    #[error("Layout contains invalid symbol '{0}' (expected 1-8 or 'b')")]
    InvalidSymbol(char),
    #[error("Layout contains '{0}' more than once")]
    DuplicateSymbol(char),
    #[error("Tile value {0} is out of range (expected 0-8)")]
    InvalidTile(u8),
}

impl Board {
    /// The canonical solved layout `b12 345 678`
    #[must_use]
    pub const fn solved() -> Self {
        Self {
            tiles: [0, 1, 2, 3, 4, 5, 6, 7, 8],
            blank: 0,
        }
    }

    /// Parse a layout such as `"1b2 345 678"`
    ///
    /// Whitespace is ignored, `b` (or `B`) marks the blank and the digits
    /// `1..=8` fill the remaining cells in row-major order.
    ///
    /// # Errors
    /// Returns `BoardError` unless the layout holds exactly one blank and each
    /// digit `1..=8` exactly once.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::core::Board;
    ///
    /// let board = Board::parse("1b2 345 678").unwrap();
    /// assert_eq!(board.blank_index(), 1);
    /// assert!(Board::parse("112 345 678").is_err());
    /// ```
    pub fn parse(layout: &str) -> Result<Self, BoardError> {
        let symbols: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CELLS {
            return Err(BoardError::InvalidLength(symbols.len()));
        }

        let mut tiles = [BLANK; CELLS];
        for (cell, &symbol) in tiles.iter_mut().zip(&symbols) {
            *cell = match symbol {
                'b' | 'B' => BLANK,
                '1'..='8' => symbol as u8 - b'0',
                _ => return Err(BoardError::InvalidSymbol(symbol)),
            };
        }

        Self::from_tiles(tiles)
    }

    /// Build a board from raw tile values, `0` being the blank
    ///
    /// # Errors
    /// Returns `BoardError` if a value is above 8 or appears twice.
    pub fn from_tiles(tiles: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        let mut blank = 0;

        for (index, &tile) in tiles.iter().enumerate() {
            let slot = usize::from(tile);
            if slot >= CELLS {
                return Err(BoardError::InvalidTile(tile));
            }
            if seen[slot] {
                return Err(BoardError::DuplicateSymbol(symbol(tile)));
            }
            seen[slot] = true;
            if tile == BLANK {
                blank = index;
            }
        }

        Ok(Self { tiles, blank })
    }

    /// Raw tiles in row-major order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Linear index (0-8) of the blank
    #[inline]
    #[must_use]
    pub const fn blank_index(&self) -> usize {
        self.blank
    }

    /// Whether moving the blank in `direction` keeps it on the grid
    #[must_use]
    pub const fn is_valid_move(&self, direction: Direction) -> bool {
        let row = self.blank / SIDE;
        let col = self.blank % SIDE;
        match direction {
            Direction::Up => row > 0,
            Direction::Down => row < SIDE - 1,
            Direction::Left => col > 0,
            Direction::Right => col < SIDE - 1,
        }
    }

    /// Directions that are currently applicable, in `Direction::ALL` order
    pub fn valid_moves(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.is_valid_move(direction))
    }

    /// Return a copy with the blank swapped against its neighbour in `direction`
    ///
    /// # Errors
    /// Returns `MoveError::Blocked` if the blank is on that edge of the grid.
    pub fn apply_move(&self, direction: Direction) -> Result<Self, MoveError> {
        if !self.is_valid_move(direction) {
            return Err(MoveError::Blocked { direction });
        }

        // In range: is_valid_move rules out leaving the grid.
        let target = self.blank.wrapping_add_signed(direction.index_offset());
        let mut next = *self;
        next.tiles.swap(self.blank, target);
        next.blank = target;
        Ok(next)
    }

    /// Whether this is the canonical solved layout
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    /// `h1`: count of numbered tiles not on their home cell
    ///
    /// The blank's own displacement is not counted.
    #[must_use]
    pub fn misplaced_tiles(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(index, &tile)| tile != BLANK && usize::from(tile) != index)
            .count() as u32
    }

    /// `h2`: sum over numbered tiles of row offset plus column offset to home
    #[must_use]
    pub fn manhattan_distance(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(index, &tile)| {
                let home = usize::from(tile);
                (index / SIDE).abs_diff(home / SIDE) + (index % SIDE).abs_diff(home % SIDE)
            })
            .sum::<usize>() as u32
    }

    /// Evaluate the selected heuristic
    #[inline]
    #[must_use]
    pub fn heuristic(&self, heuristic: Heuristic) -> u32 {
        match heuristic {
            Heuristic::MisplacedTiles => self.misplaced_tiles(),
            Heuristic::Manhattan => self.manhattan_distance(),
        }
    }

    /// Nine symbols in row-major order, e.g. `"b12345678"`
    ///
    /// One symbol per cell makes this injective over arrangements, so it is
    /// usable as a visited-set key.
    #[must_use]
    pub fn canonical_string(&self) -> String {
        self.tiles.iter().map(|&tile| symbol(tile)).collect()
    }

    /// Symbols of one row, `row < SIDE`
    #[must_use]
    pub fn row_symbols(&self, row: usize) -> [char; SIDE] {
        let start = row * SIDE;
        [
            symbol(self.tiles[start]),
            symbol(self.tiles[start + 1]),
            symbol(self.tiles[start + 2]),
        ]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

/// Display symbol for a raw tile value
#[must_use]
pub fn symbol(tile: u8) -> char {
    if tile == BLANK {
        BLANK_SYMBOL
    } else {
        char::from(b'0' + tile)
    }
}

impl fmt::Display for Board {
    /// Layout form, rows separated by spaces: `b12 345 678`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                f.write_str(" ")?;
            }
            for ch in self.row_symbols(row) {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
