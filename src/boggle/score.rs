use crate::errors::{Result, WordSearchError};

/// What the scorer needs to know about a word: whether the dictionary accepts it and
/// where (if anywhere) it lies on the board
pub trait WordChecker {
    fn is_valid_word(&self, word: &str) -> Result<bool>;
    /// Row-major path of the word on the board, empty if it cannot be traced
    fn is_on_board(&self, word: &str) -> Result<Vec<usize>>;
}

/// Points for one word that already passed every check. A word at the minimum length is
/// worth one point, each extra character one more
pub fn word_score(word: &str, min_length: usize) -> usize {
    word.chars().count().saturating_sub(min_length) + 1
}

/// Sums the score of every word that reaches `min_length`, is in the dictionary and can be
/// traced on the board. Words failing any check contribute nothing
pub fn score<C, I, S>(checker: &C, words: I, min_length: usize) -> Result<usize>
where
    C: WordChecker + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if min_length == 0 {
        return Err(WordSearchError::InvalidMinLength(min_length));
    }
    let mut total = 0;
    for word in words {
        let word = word.as_ref();
        if word.chars().count() < min_length {
            continue;
        }
        if checker.is_valid_word(word)? && !checker.is_on_board(word)?.is_empty() {
            total += word_score(word, min_length);
        }
    }
    Ok(total)
}
