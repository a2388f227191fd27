//! `PuzzleState`: one arrangement of the eight tiles and the blank.
//!
//! # Layout
//!
//! Nine symbols in row-major order over a 3x3 grid. Symbol `0` is the
//! blank. Every value of this type is a permutation of `0..=8`; the
//! constructors reject anything else and the only other producer is
//! [`crate::board::moves::apply_move`], which swaps two cells.
//!
//! # Identity
//!
//! Two states are the same board iff their [`Fingerprint`]s are equal. The
//! fingerprint is the nine symbols read as one decimal number, so its
//! `Display` form is the symbols concatenated in order (`"123456780"`).

use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Width (and height) of the board.
pub const GRID_WIDTH: usize = 3;

/// The blank symbol.
pub const BLANK: u8 = 0;

/// Symbols of the solved board.
pub const GOAL_SYMBOLS: [u8; CELL_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Canonical key of a board: the symbols concatenated in row-major order.
///
/// Stored packed as a base-10 integer. Leading zeros are restored by
/// `Display`, which always renders exactly nine digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(u32);

impl Fingerprint {
    /// Fingerprint of a raw symbol array.
    #[must_use]
    pub const fn of(symbols: &[u8; CELL_COUNT]) -> Self {
        let mut acc = 0u32;
        let mut i = 0;
        while i < CELL_COUNT {
            acc = acc * 10 + symbols[i] as u32;
            i += 1;
        }
        Self(acc)
    }

    /// The packed integer value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

/// Fingerprint of the solved board.
pub const GOAL_FINGERPRINT: Fingerprint = Fingerprint::of(&GOAL_SYMBOLS);

/// Typed failure for building a board from external input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Input did not contain exactly nine symbols.
    WrongLength { actual: usize },
    /// A symbol outside `0..=8`.
    SymbolOutOfRange { index: usize, symbol: u8 },
    /// A symbol appeared more than once.
    DuplicateSymbol { symbol: u8 },
    /// Textual input contained a character that is neither a digit nor a separator.
    InvalidCharacter { ch: char },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { actual } => {
                write!(f, "board needs {CELL_COUNT} symbols, got {actual}")
            }
            Self::SymbolOutOfRange { index, symbol } => {
                write!(f, "symbol {symbol} at index {index} is outside 0..=8")
            }
            Self::DuplicateSymbol { symbol } => write!(f, "symbol {symbol} appears more than once"),
            Self::InvalidCharacter { ch } => write!(f, "unexpected character {ch:?} in board"),
        }
    }
}

impl std::error::Error for BoardError {}

/// A validated 3x3 board.
///
/// The blank position is cached alongside the cells; it is always the index
/// of the single `0` symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    cells: [u8; CELL_COUNT],
    blank: usize,
}

impl PuzzleState {
    /// The solved board `[1,2,3,4,5,6,7,8,0]`.
    pub const GOAL: Self = Self {
        cells: GOAL_SYMBOLS,
        blank: 8,
    };

    /// Build a board from nine symbols.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SymbolOutOfRange`] or [`BoardError::DuplicateSymbol`]
    /// if `cells` is not a permutation of `0..=8`.
    pub fn new(cells: [u8; CELL_COUNT]) -> Result<Self, BoardError> {
        let mut seen = [false; CELL_COUNT];
        let mut blank = 0;
        for (index, &symbol) in cells.iter().enumerate() {
            let slot = seen
                .get_mut(usize::from(symbol))
                .ok_or(BoardError::SymbolOutOfRange { index, symbol })?;
            if *slot {
                return Err(BoardError::DuplicateSymbol { symbol });
            }
            *slot = true;
            if symbol == BLANK {
                blank = index;
            }
        }
        Ok(Self { cells, blank })
    }

    /// Build a board from a slice of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongLength`] unless the slice has nine entries,
    /// otherwise the same errors as [`PuzzleState::new`].
    pub fn from_slice(symbols: &[u8]) -> Result<Self, BoardError> {
        let cells: [u8; CELL_COUNT] =
            symbols
                .try_into()
                .map_err(|_| BoardError::WrongLength {
                    actual: symbols.len(),
                })?;
        Self::new(cells)
    }

    /// Swap two cells. Only [`crate::board::moves::apply_move`] calls this.
    pub(crate) fn swapped(&self, a: usize, b: usize) -> Self {
        let mut cells = self.cells;
        cells.swap(a, b);
        let blank = if self.blank == a {
            b
        } else if self.blank == b {
            a
        } else {
            self.blank
        };
        Self { cells, blank }
    }

    /// The nine symbols in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Index of the blank cell.
    #[must_use]
    pub const fn empty_tile_index(&self) -> usize {
        self.blank
    }

    /// Canonical key for equality and dedup.
    #[must_use]
    pub const fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&self.cells)
    }

    /// True iff this is the solved board.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.fingerprint() == GOAL_FINGERPRINT
    }

    /// Number of tile pairs (blank excluded) that appear in the wrong order.
    #[must_use]
    pub fn inversion_count(&self) -> usize {
        let tiles: Vec<u8> = self.cells.iter().copied().filter(|&s| s != BLANK).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|b| a > b).count())
            .sum()
    }

    /// Whether the goal is reachable from this board.
    ///
    /// On an odd-width grid a blank swap never changes inversion parity, and
    /// the goal has zero inversions.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.inversion_count() % 2 == 0
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::GOAL
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(GRID_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &symbol) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if symbol == BLANK {
                    write!(f, "_")?;
                } else {
                    write!(f, "{symbol}")?;
                }
            }
        }
        Ok(())
    }
}

/// Parses nine digits. Commas, brackets and whitespace are ignored and `_`
/// reads as the blank, so both `"123456780"` and the `Display` grid parse.
impl FromStr for PuzzleState {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut symbols = Vec::with_capacity(CELL_COUNT);
        for ch in s.chars() {
            match ch {
                '_' => symbols.push(BLANK),
                ',' | '[' | ']' => {}
                c if c.is_whitespace() => {}
                c => {
                    let digit = c.to_digit(10).ok_or(BoardError::InvalidCharacter { ch: c })?;
                    #[allow(clippy::cast_possible_truncation)]
                    symbols.push(digit as u8);
                }
            }
        }
        Self::from_slice(&symbols)
    }
}
