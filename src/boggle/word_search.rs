use std::collections::BTreeSet;

use super::board::Board;
use super::lexicon::Vocabulary;
use super::path::PathTracker;
use super::util::Position;

/*
    Depth-first backtracking over the board graph.

    Every step appends a neighbouring, not yet used tile to the word built so far. A branch
    is abandoned as soon as the vocabulary reports that no word starts with the current
    string, which keeps the search proportional to the dictionary's prefix structure
    instead of the number of board paths.
*/

/// Counters collected during a full-board search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of tile sequences that passed the prefix check
    pub explored: usize,
    /// Number of extensions dropped by the prefix check
    pub pruned: usize,
}

#[derive(Debug)]
pub struct WordSearcher<'a, V: Vocabulary> {
    board: &'a Board,
    vocab: &'a V,
    /// Cells of the word currently being built
    tracker: PathTracker,
    stats: SearchStats,
}

impl<'a, V: Vocabulary> WordSearcher<'a, V> {
    pub fn new(board: &'a Board, vocab: &'a V) -> Self {
        Self {
            board,
            vocab,
            tracker: PathTracker::new(board.size()),
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Finds every dictionary word with at least `min_length` characters that can be traced
    /// on the board. Assumes the caller already validated `min_length`
    pub fn find_all(&mut self, min_length: usize) -> BTreeSet<String> {
        self.stats = SearchStats::default();
        let mut found = BTreeSet::new();
        let board = self.board;
        for start in board.positions() {
            let current = &board[start];
            self.tracker.push(start);
            self.record(current, min_length, &mut found);
            if self.vocab.has_prefix(current) {
                self.stats.explored += 1;
                self.extend_all(start, current, min_length, &mut found);
            } else {
                self.stats.pruned += 1;
            }
            self.tracker.pop();
            debug_assert!(self.tracker.is_empty());
        }
        log::debug!(
            "Board search found {} words ({} prefixes explored, {} pruned)",
            found.len(),
            self.stats.explored,
            self.stats.pruned
        );
        found
    }

    fn extend_all(
        &mut self,
        from: Position,
        prefix: &str,
        min_length: usize,
        found: &mut BTreeSet<String>,
    ) {
        let board = self.board;
        for next in board.neighbors(from) {
            if self.tracker.is_visited(next) {
                continue;
            }
            let candidate = format!("{}{}", prefix, &board[next]);
            if !self.vocab.has_prefix(&candidate) {
                self.stats.pruned += 1;
                continue;
            }
            self.stats.explored += 1;

            self.tracker.push(next);
            self.record(&candidate, min_length, found);
            self.extend_all(next, &candidate, min_length, found);
            self.tracker.pop();
        }
    }

    fn record(&self, word: &str, min_length: usize, found: &mut BTreeSet<String>) {
        if word.chars().count() >= min_length && self.vocab.contains(word) {
            found.insert(word.to_string());
        }
    }

    /// Finds a path that spells `word` exactly and returns it as row-major indices.
    /// Returns an empty path if the word cannot be traced. The first path in row-major
    /// start order and fixed neighbour order wins
    pub fn locate(&mut self, word: &str) -> Vec<usize> {
        if word.is_empty() {
            return Vec::new();
        }
        let board = self.board;
        for start in board.positions() {
            let token = &board[start];
            if !word.starts_with(token) {
                continue;
            }
            self.tracker.push(start);
            if self.trace(start, token, word) {
                let path = self.tracker.to_indices();
                self.tracker.clear();
                return path;
            }
            self.tracker.pop();
        }
        Vec::new()
    }

    /// Extends the current trail one tile at a time, only along tiles that spell the
    /// next part of `word`. Leaves the full trail in place on success
    fn trace(&mut self, from: Position, so_far: &str, word: &str) -> bool {
        if so_far == word {
            return true;
        }
        let board = self.board;
        let remaining = &word[so_far.len()..];
        for next in board.neighbors(from) {
            if self.tracker.is_visited(next) {
                continue;
            }
            let token = &board[next];
            if !remaining.starts_with(token) {
                continue;
            }
            let candidate = &word[..so_far.len() + token.len()];

            self.tracker.push(next);
            if self.trace(next, candidate, word) {
                return true;
            }
            self.tracker.pop();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::*;
    use crate::boggle::lexicon::Lexicon;

    fn cat_board() -> Board {
        // C A T
        // X S Y
        // Z Z Z
        Board::new(["C", "A", "T", "X", "S", "Y", "Z", "Z", "Z"]).unwrap()
    }

    #[test]
    fn test_find_all() {
        let board = cat_board();
        let lex = Lexicon::from_words(["CAT", "CATS", "AT", "ACT", "SAT", "TAXI", "CASTS"]).unwrap();
        let mut searcher = WordSearcher::new(&board, &lex);
        let found = searcher.find_all(2);
        // ACT would need C and T to touch
        let expected: BTreeSet<String> = ["AT", "CAT", "CATS", "SAT"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(found, expected);

        let found = searcher.find_all(3);
        assert!(!found.contains("AT"));
        assert!(found.contains("CATS"));
    }

    #[test]
    fn test_find_all_respects_min_length_in_chars() {
        let board = Board::new(["QU", "A", "D", "S"]).unwrap();
        let lex = Lexicon::from_words(["QUA", "QUAD", "QUADS"]).unwrap();
        let found = WordSearcher::new(&board, &lex).find_all(4);
        // QUA is three characters even though it uses only two tiles
        let expected: BTreeSet<String> = ["QUAD", "QUADS"].iter().map(|s| s.to_string()).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_find_all_is_idempotent() {
        let board = Board::default();
        let lex = Lexicon::from_words(["ALE", "PEA", "CAPE", "BOY", "LANE", "EEL", "TOY"]).unwrap();
        let mut searcher = WordSearcher::new(&board, &lex);
        let first = searcher.find_all(3);
        let first_stats = searcher.stats();
        let second = searcher.find_all(3);
        assert!(!first.is_empty());
        assert_eq!(first, second);
        // Counters describe the latest search only
        assert!(first_stats.explored > 0);
        assert_eq!(searcher.stats(), first_stats);
    }

    #[test]
    fn test_no_tile_reuse() {
        // A single "A" cannot spell "AA"
        let board = Board::new(["A", "B", "C", "D"]).unwrap();
        let lex = Lexicon::from_words(["AA", "ABA", "AB"]).unwrap();
        let found = WordSearcher::new(&board, &lex).find_all(2);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["AB".to_string()]);
    }

    #[test]
    fn test_single_tile_words() {
        let board = Board::new(["CAT", "X", "Y", "Z"]).unwrap();
        let lex = Lexicon::from_words(["CAT"]).unwrap();
        let found = WordSearcher::new(&board, &lex).find_all(3);
        assert!(found.contains("CAT"));
    }

    /// Records every prefix query the search makes
    struct RecordingVocab<'a> {
        inner: &'a Lexicon,
        queries: RefCell<Vec<(String, bool)>>,
    }

    impl Vocabulary for RecordingVocab<'_> {
        fn contains(&self, word: &str) -> bool {
            self.inner.contains(word)
        }

        fn has_prefix(&self, prefix: &str) -> bool {
            let ok = self.inner.has_prefix(prefix);
            self.queries.borrow_mut().push((prefix.to_string(), ok));
            ok
        }
    }

    #[test]
    fn test_never_extends_failed_prefix() {
        let board = Board::default();
        let lex = Lexicon::from_words(["ALE", "ALP", "PEA", "LEAP", "BONY", "TOTE", "HEN"]).unwrap();
        let vocab = RecordingVocab {
            inner: &lex,
            queries: RefCell::new(Vec::new()),
        };
        let mut searcher = WordSearcher::new(&board, &vocab);
        searcher.find_all(3);
        let pruned = searcher.stats().pruned;

        let queries = vocab.queries.into_inner();
        let failed: HashSet<&str> = queries
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(q, _)| q.as_str())
            .collect();
        assert!(!failed.is_empty());
        for (query, _) in queries.iter() {
            for dead in failed.iter() {
                assert!(
                    !(query.len() > dead.len() && query.starts_with(dead)),
                    "{} was queried after {} failed",
                    query,
                    dead
                );
            }
        }
        assert!(pruned >= failed.len());
    }

    #[test]
    fn test_locate() {
        let board = Board::default();
        let lex = Lexicon::from_words(["ALE"]).unwrap();
        let path = WordSearcher::new(&board, &lex).locate("ALE");
        assert_eq!(path.len(), 3);
        assert_eq!(board.spell(&path).as_deref(), Some("ALE"));
        // A at (0, 3) has no L neighbour, so the path starts from A at (1, 0) and
        // takes the first E around the L
        assert_eq!(path, vec![4, 5, 0]);
    }

    #[test]
    fn test_locate_backtracks() {
        // A B D
        // X Y Z
        // A B C
        let board = Board::new(["A", "B", "D", "X", "Y", "Z", "A", "B", "C"]).unwrap();
        let lex = Lexicon::from_words(["ABC"]).unwrap();
        let path = WordSearcher::new(&board, &lex).locate("ABC");
        assert_eq!(path, vec![6, 7, 8]);
    }

    #[test]
    fn test_locate_missing() {
        let board = Board::default();
        let lex = Lexicon::from_words(["ZZZZ"]).unwrap();
        let mut searcher = WordSearcher::new(&board, &lex);
        assert!(searcher.locate("ZZZZ").is_empty());
        assert!(searcher.locate("").is_empty());
        // Only three E tiles and a single C
        assert!(searcher.locate("EEEE").is_empty());
        assert!(searcher.locate("CC").is_empty());
        assert_eq!(searcher.locate("EEE"), vec![0, 1, 6]);
    }

    #[test]
    fn test_locate_whole_token() {
        let board = Board::new(["X", "QU", "Y", "Z"]).unwrap();
        let lex = Lexicon::from_words(["QU"]).unwrap();
        assert_eq!(WordSearcher::new(&board, &lex).locate("QU"), vec![1]);
    }

    #[test]
    fn test_locate_multi_char_tokens() {
        let board = Board::new(["QU", "I", "T", "E"]).unwrap();
        let lex = Lexicon::from_words(["QUITE"]).unwrap();
        let path = WordSearcher::new(&board, &lex).locate("QUITE");
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert!(WordSearcher::new(&board, &lex).locate("QIT").is_empty());
    }

    #[test]
    fn test_found_words_round_trip() {
        let board = Board::default();
        let lex = Lexicon::from_words([
            "ALE", "ALP", "PEA", "LEAP", "BONY", "TOTE", "HEN", "CAPE", "LANE", "BLEEP", "PACE",
        ])
        .unwrap();
        let found = WordSearcher::new(&board, &lex).find_all(3);
        assert!(!found.is_empty());
        for word in found.iter() {
            let path = WordSearcher::new(&board, &lex).locate(word);
            assert!(!path.is_empty(), "{} has no path", word);
            assert_eq!(board.spell(&path).as_deref(), Some(word.as_str()));

            let distinct: HashSet<_> = path.iter().collect();
            assert_eq!(distinct.len(), path.len());
            for pair in path.windows(2) {
                let a = Position::from_index(pair[0], board.size());
                let b = Position::from_index(pair[1], board.size());
                assert!(a.is_adjacent(b));
            }
        }
    }
}
