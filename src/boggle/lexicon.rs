use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use fst::{IntoStreamer, Set, Streamer};

use crate::errors::{Result, WordSearchError};

/// Word queries the board search depends on. Keys are expected to already be uppercase.
pub trait Vocabulary {
    /// Exact membership
    fn contains(&self, word: &str) -> bool;
    /// True if at least one stored word starts with `prefix`
    fn has_prefix(&self, prefix: &str) -> bool;
}

/// Dictionary of valid words stored as an FST. Words are uppercased and deduplicated
/// on construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Set<Vec<u8>>,
}

fn read_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| WordSearchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(data.split_whitespace().map(str::to_string).collect())
}

impl Lexicon {
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // The FST builder needs its keys sorted and unique
        let sorted: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        let words = Set::from_iter(sorted)?;
        Ok(Self { words })
    }

    /// Loads a whitespace-delimited word list
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let words = read_word_file(path.as_ref())?;
        let lexicon = Self::from_words(words)?;
        log::info!(
            "Loaded {} words from {}",
            lexicon.len(),
            path.as_ref().display()
        );
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Runs `f` on the smallest stored word that is greater than or equal to `key`
    fn with_ceiling<T>(&self, key: &str, f: impl FnOnce(&[u8]) -> T) -> Option<T> {
        let mut stream = self.words.range().ge(key).into_stream();
        stream.next().map(f)
    }

    /// Smallest stored word that is greater than or equal to `key`
    pub fn ceiling(&self, key: &str) -> Option<String> {
        self.with_ceiling(key, |w| String::from_utf8_lossy(w).into_owned())
    }

    /// All stored words in sorted order
    pub fn words(&self) -> Vec<String> {
        let mut stream = self.words.stream();
        let mut acc = Vec::with_capacity(self.words.len());
        while let Some(w) = stream.next() {
            acc.push(String::from_utf8_lossy(w).into_owned());
        }
        acc
    }
}

impl Vocabulary for Lexicon {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        // If anything starts with the prefix, it sorts right at (or just after) the prefix itself
        self.with_ceiling(prefix, |w| w.starts_with(prefix.as_bytes()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::errors::ErrorKind;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["cat", "cats", "dog", "Catalog", "at", "cat"]).unwrap()
    }

    #[test]
    fn test_contains_uppercases_and_dedups() {
        let lex = lexicon();
        assert_eq!(lex.len(), 5);
        assert!(lex.contains("CAT"));
        assert!(lex.contains("CATALOG"));
        assert!(!lex.contains("cat"));
        assert!(!lex.contains("CA"));
    }

    #[test]
    fn test_has_prefix() {
        let lex = lexicon();
        assert!(lex.has_prefix("C"));
        assert!(lex.has_prefix("CATA"));
        assert!(lex.has_prefix("CATS"));
        assert!(lex.has_prefix("DOG"));
        assert!(!lex.has_prefix("CATX"));
        assert!(!lex.has_prefix("Z"));
        assert!(!lex.has_prefix("DOGS"));
    }

    #[test]
    fn test_has_prefix_is_monotone() {
        let lex = lexicon();
        for failed in ["B", "CB", "DOGE", "ZZ"] {
            assert!(!lex.has_prefix(failed));
            for ext in ["A", "S", "Z", "ATALOG"] {
                assert!(!lex.has_prefix(&format!("{}{}", failed, ext)));
            }
        }
    }

    #[test]
    fn test_ceiling() {
        let lex = lexicon();
        assert_eq!(lex.ceiling("CATB").as_deref(), Some("CATS"));
        assert_eq!(lex.ceiling("A").as_deref(), Some("AT"));
        assert_eq!(lex.ceiling("E"), None);
    }

    #[test]
    fn test_words_sorted() {
        let lex = lexicon();
        assert_eq!(lex.words(), vec!["AT", "CAT", "CATALOG", "CATS", "DOG"]);
    }

    #[test]
    fn test_load_whitespace_delimited() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ale  bee\ncat\n\n\tdog").unwrap();
        let lex = Lexicon::load(file.path()).unwrap();
        assert_eq!(lex.words(), vec!["ALE", "BEE", "CAT", "DOG"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Lexicon::load(dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resource);
    }
}
