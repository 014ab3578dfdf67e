use std::collections::BTreeSet;
use std::path::Path;

use super::board::Board;
use super::lexicon::{Lexicon, Vocabulary};
use super::score::{self, WordChecker};
use super::word_search::WordSearcher;
use crate::errors::{Result, WordSearchError};

/// A board together with the dictionary it is played against.
///
/// Every query takes `&self` and builds its own search state, so one game can be queried
/// any number of times without resetting anything in between.
#[derive(Debug, Clone, Default)]
pub struct WordSearchGame {
    board: Board,
    lexicon: Option<Lexicon>,
}

impl WordSearchGame {
    /// Game on the default board with no lexicon loaded yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(board: Board, lexicon: Lexicon) -> Self {
        Self {
            board,
            lexicon: Some(lexicon),
        }
    }

    /// Replaces the lexicon with the words read from `path`. On failure the previously
    /// loaded lexicon (if any) stays in place. Returns the number of words loaded
    pub fn load_lexicon<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let lexicon = Lexicon::load(path)?;
        let count = lexicon.len();
        self.lexicon = Some(lexicon);
        Ok(count)
    }

    /// Replaces the board with tokens given in row-major order. The board is left unchanged
    /// if the tokens do not form a square
    pub fn set_board<I, S>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.board = Board::new(tokens)?;
        log::info!("Board set to {0}x{0}", self.board.size());
        Ok(())
    }

    pub fn replace_board(&mut self, board: Board) {
        self.board = board;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board as text, one row per line
    pub fn board_text(&self) -> String {
        self.board.to_string()
    }

    fn require_lexicon(&self) -> Result<&Lexicon> {
        self.lexicon.as_ref().ok_or(WordSearchError::LexiconNotLoaded)
    }

    /// Every dictionary word of at least `min_length` characters that can be traced on the
    /// board, sorted
    pub fn all_scorable_words(&self, min_length: usize) -> Result<BTreeSet<String>> {
        if min_length == 0 {
            return Err(WordSearchError::InvalidMinLength(min_length));
        }
        let lexicon = self.require_lexicon()?;
        let mut searcher = WordSearcher::new(&self.board, lexicon);
        Ok(searcher.find_all(min_length))
    }

    /// Every scorable word paired with one path that spells it
    pub fn word_paths(&self, min_length: usize) -> Result<Vec<(String, Vec<usize>)>> {
        let words = self.all_scorable_words(min_length)?;
        let lexicon = self.require_lexicon()?;
        Ok(words
            .into_iter()
            .map(|word| {
                let path = WordSearcher::new(&self.board, lexicon).locate(&word);
                (word, path)
            })
            .collect())
    }

    /// Total score of the given words, see [`score::score`]
    pub fn score_for_words<I, S>(&self, words: I, min_length: usize) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.require_lexicon()?;
        score::score(self, words, min_length)
    }

    pub fn is_valid_word(&self, word: &str) -> Result<bool> {
        let lexicon = self.require_lexicon()?;
        if word.is_empty() {
            return Err(WordSearchError::EmptyWord);
        }
        Ok(lexicon.contains(&word.to_uppercase()))
    }

    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool> {
        let lexicon = self.require_lexicon()?;
        if prefix.is_empty() {
            return Err(WordSearchError::EmptyWord);
        }
        Ok(lexicon.has_prefix(&prefix.to_uppercase()))
    }

    /// Row-major path spelling `word` on the board, or an empty path if there is none
    pub fn is_on_board(&self, word: &str) -> Result<Vec<usize>> {
        let lexicon = self.require_lexicon()?;
        if word.is_empty() {
            return Err(WordSearchError::EmptyWord);
        }
        let word = word.to_uppercase();
        Ok(WordSearcher::new(&self.board, lexicon).locate(&word))
    }
}

impl WordChecker for WordSearchGame {
    fn is_valid_word(&self, word: &str) -> Result<bool> {
        WordSearchGame::is_valid_word(self, word)
    }

    fn is_on_board(&self, word: &str) -> Result<Vec<usize>> {
        WordSearchGame::is_on_board(self, word)
    }
}
