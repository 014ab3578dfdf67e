pub mod bag;
pub mod board;
pub mod game;
pub mod lexicon;
pub mod path;
pub mod score;
pub mod util;
pub mod word_search;

pub use self::board::Board;
pub use self::game::WordSearchGame;
pub use self::lexicon::{Lexicon, Vocabulary};
