use std::fmt;

/// Relative offsets of the eight neighbours of a cell, in row-major order over the
/// surrounding 3x3 block. Both the search and the path locator walk neighbours in
/// this order, so it decides which path is reported when several spell the same word.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position shifted by the given offset if it stays inside a `size`x`size` grid
    pub fn offset(&self, (d_row, d_col): (isize, isize), size: usize) -> Option<Position> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        if row < size && col < size {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// Returns every in-bounds neighbour of this position (no wraparound)
    pub fn adjacent(&self, size: usize) -> Vec<Position> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&delta| self.offset(delta, size))
            .collect()
    }

    /// Checks if the two positions touch horizontally, vertically or diagonally
    pub fn is_adjacent(&self, other: Position) -> bool {
        *self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Converts the row/col to a 1d row-major index
    pub fn as_index(&self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self {
            row: index / width,
            col: index % width,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Iterates all positions of a `size`x`size` grid top to bottom, left to right
pub fn row_major(size: usize) -> impl Iterator<Item = Position> {
    (0..size).flat_map(move |row| (0..size).map(move |col| Position { row, col }))
}
