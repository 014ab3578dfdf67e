use ndarray::Array2;

use super::util::Position;

/// The cell trail of the word currently being built, plus a visited bitmap kept in step
/// with it: a cell is marked visited exactly while it is part of the trail.
///
/// Each search call owns its own tracker, so no visited state leaks between calls.
#[derive(Debug, Clone)]
pub struct PathTracker {
    positions: Vec<Position>,
    visited: Array2<bool>,
}

impl PathTracker {
    pub fn new(size: usize) -> Self {
        Self {
            positions: Vec::with_capacity(size * size),
            visited: Array2::from_elem((size, size), false),
        }
    }

    /// Appends a cell to the trail. Returns false (and changes nothing) if the cell is
    /// already on it
    pub fn push(&mut self, pos: Position) -> bool {
        if self.is_visited(pos) {
            return false;
        }
        self.visited[(pos.row, pos.col)] = true;
        self.positions.push(pos);
        true
    }

    /// Removes the most recent cell from the trail
    pub fn pop(&mut self) -> Option<Position> {
        let pos = self.positions.pop()?;
        self.visited[(pos.row, pos.col)] = false;
        Some(pos)
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.visited
            .get((pos.row, pos.col))
            .copied()
            .unwrap_or(false)
    }

    pub fn last(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Row-major indices of the trail, in order
    pub fn to_indices(&self) -> Vec<usize> {
        let width = self.visited.ncols();
        self.positions.iter().map(|p| p.as_index(width)).collect()
    }

    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_keeps_visited_in_step() {
        let mut tracker = PathTracker::new(3);
        let a = Position::new(0, 0);
        let b = Position::new(1, 1);

        assert!(tracker.push(a));
        assert!(tracker.push(b));
        assert!(tracker.is_visited(a) && tracker.is_visited(b));
        assert_eq!(tracker.to_indices(), vec![0, 4]);

        assert_eq!(tracker.pop(), Some(b));
        assert!(!tracker.is_visited(b));
        assert!(tracker.is_visited(a));
        assert_eq!(tracker.last(), Some(a));
    }

    #[test]
    fn test_rejects_revisit() {
        let mut tracker = PathTracker::new(2);
        let a = Position::new(1, 0);
        assert!(tracker.push(a));
        assert!(!tracker.push(a));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut tracker = PathTracker::new(2);
        tracker.push(Position::new(0, 0));
        tracker.push(Position::new(0, 1));
        tracker.clear();
        assert!(tracker.is_empty());
        assert!(!tracker.is_visited(Position::new(0, 0)));
        assert_eq!(tracker.pop(), None);
    }

    #[test]
    fn test_out_of_bounds_is_not_visited() {
        let tracker = PathTracker::new(2);
        assert!(!tracker.is_visited(Position::new(5, 5)));
    }
}
