use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::Result;
use crate::utils::serialization;

pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Settings for a game session. Read from an optional JSON file; any field left out
/// keeps its default, and command-line flags override whatever the file says
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Word list to load
    pub lexicon: Option<PathBuf>,
    /// JSON board file. Takes precedence over `tiles` and `random_size`
    pub board: Option<PathBuf>,
    /// Inline board tiles in row-major order
    pub tiles: Option<Vec<String>>,
    /// Size of a random board to generate when no board is given
    pub random_size: Option<usize>,
    /// Seed for random boards
    pub seed: Option<u64>,
    /// Minimum number of characters for a word to count
    pub min_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lexicon: None,
            board: None,
            tiles: None,
            random_size: None,
            seed: None,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

/// Values given on the command line; `None` means "not given"
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub lexicon: Option<PathBuf>,
    pub board: Option<PathBuf>,
    pub random_size: Option<usize>,
    pub seed: Option<u64>,
    pub min_length: Option<usize>,
}

impl GameConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        serialization::load_json(path)
    }

    /// Applies command-line values on top of this config
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(lexicon) = overrides.lexicon {
            self.lexicon = Some(lexicon);
        }
        if let Some(board) = overrides.board {
            self.board = Some(board);
            self.random_size = None;
        }
        if let Some(size) = overrides.random_size {
            self.random_size = Some(size);
            self.board = None;
            self.tiles = None;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(min_length) = overrides.min_length {
            self.min_length = min_length;
        }
        self
    }
}
