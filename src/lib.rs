// Library API shared by the CLI and the tests
pub mod boggle;
pub mod config;
pub mod errors;
pub mod logging;
pub mod utils;

pub use boggle::{Board, Lexicon, WordSearchGame};
pub use errors::{ErrorKind, Result, WordSearchError};
