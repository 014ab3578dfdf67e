//! Error types for the word-search engine.
//!
//! Every failure belongs to one [`ErrorKind`]:
//!
//! - `Validation`: a bad argument (empty word, zero minimum length, malformed board).
//!   Nothing is mutated when one of these is returned.
//! - `Precondition`: the game was queried in the wrong order, e.g. before a lexicon was loaded.
//! - `Resource`: a file could not be read or parsed.
//!
//! A word that is simply not on the board is never an error; it is an empty path.

use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Precondition,
    Resource,
}

#[derive(Debug, thiserror::Error)]
pub enum WordSearchError {
    #[error("word must not be empty")]
    EmptyWord,

    #[error("minimum word length must be at least 1 (got {0})")]
    InvalidMinLength(usize),

    #[error("board must be square: {len} tokens is not a perfect square")]
    NonSquareBoard { len: usize },

    #[error("board must contain at least one tile")]
    EmptyBoard,

    #[error("board tile {index} is empty")]
    EmptyToken { index: usize },

    #[error("board row {row} has {found} tiles, expected {expected}")]
    RaggedBoard {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("random board size must be at least 1")]
    InvalidBoardSize,

    #[error("no lexicon loaded")]
    LexiconNotLoaded,

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not build lexicon: {0}")]
    Fst(#[from] fst::Error),
}

impl WordSearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyWord
            | Self::InvalidMinLength(_)
            | Self::NonSquareBoard { .. }
            | Self::EmptyBoard
            | Self::EmptyToken { .. }
            | Self::RaggedBoard { .. }
            | Self::InvalidBoardSize => ErrorKind::Validation,
            Self::LexiconNotLoaded => ErrorKind::Precondition,
            Self::Io { .. } | Self::Json { .. } | Self::Fst(_) => ErrorKind::Resource,
        }
    }
}

pub type Result<T> = std::result::Result<T, WordSearchError>;
