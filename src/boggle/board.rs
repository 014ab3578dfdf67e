use std::fmt;
use std::path::Path;

use ndarray::Array2;
use rand::Rng;
use serde::Deserialize;

use super::bag::TileBag;
use super::util::{self, Position};
use crate::errors::{Result, WordSearchError};
use crate::utils::serialization;

const DEFAULT_TILES: [&str; 16] = [
    "E", "E", "C", "A", //
    "A", "L", "E", "P", //
    "H", "N", "B", "O", //
    "Q", "T", "T", "Y",
];

/// Board layouts accepted in JSON board files
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBoard {
    Rows(Vec<Vec<String>>),
    Flat(Vec<String>),
}

/// Square grid of tile tokens. Tokens are uppercase, non-empty and may hold more than
/// one character ("QU"). A board never changes once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<String>,
}

impl Default for Board {
    /// The standard 4x4 practice board
    fn default() -> Self {
        let tiles = DEFAULT_TILES.iter().map(|t| t.to_string()).collect();
        Self {
            cells: Array2::from_shape_vec((4, 4), tiles)
                .expect("default board has 16 tiles"),
        }
    }
}

impl Board {
    /// Builds a board from tokens in row-major order. The number of tokens must be a
    /// non-zero perfect square
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|t| t.as_ref().to_uppercase())
            .collect();
        if tokens.is_empty() {
            return Err(WordSearchError::EmptyBoard);
        }
        let size = integer_sqrt(tokens.len());
        if size * size != tokens.len() {
            return Err(WordSearchError::NonSquareBoard { len: tokens.len() });
        }
        if let Some(index) = tokens.iter().position(|t| t.is_empty()) {
            return Err(WordSearchError::EmptyToken { index });
        }
        let cells = Array2::from_shape_vec((size, size), tokens)
            .map_err(|_| WordSearchError::NonSquareBoard { len: size * size })?;
        Ok(Self { cells })
    }

    /// Loads a board from a JSON file holding either a flat row-major array of tokens
    /// or an array of rows
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw: RawBoard = serialization::load_json(path)?;
        match raw {
            RawBoard::Flat(tokens) => Self::new(tokens),
            RawBoard::Rows(rows) => {
                let expected = rows.len();
                if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected)
                {
                    return Err(WordSearchError::RaggedBoard {
                        row,
                        found: r.len(),
                        expected,
                    });
                }
                Self::new(rows.into_iter().flatten())
            }
        }
    }

    /// Fills a `size`x`size` board with tiles drawn from the bag
    pub fn random<R: Rng + ?Sized>(size: usize, bag: &TileBag, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(WordSearchError::InvalidBoardSize);
        }
        let cells = size
            .checked_mul(size)
            .ok_or(WordSearchError::InvalidBoardSize)?;
        Self::new(bag.draw_tiles(cells, rng))
    }

    /// Width (and height) of the board
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, pos: Position) -> Option<&str> {
        self.cells.get((pos.row, pos.col)).map(String::as_str)
    }

    /// In-bounds neighbours of a cell in the fixed offset order
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        pos.adjacent(self.size())
    }

    /// All cell positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        util::row_major(self.size())
    }

    /// Tokens in row-major order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(String::as_str)
    }

    /// Concatenates the tokens found at the given row-major indices
    pub fn spell(&self, indices: &[usize]) -> Option<String> {
        indices
            .iter()
            .map(|&i| self.get(Position::from_index(i, self.size())))
            .collect()
    }
}

impl std::ops::Index<Position> for Board {
    type Output = str;

    fn index(&self, index: Position) -> &Self::Output {
        &self.cells[(index.row, index.col)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.cells.rows().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line = row.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    // Float rounding can land one off for large inputs
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
