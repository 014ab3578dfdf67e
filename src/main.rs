use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
#[macro_use]
extern crate text_io;

use wordsearch::boggle::bag::TileBag;
use wordsearch::boggle::score::word_score;
use wordsearch::config::{ConfigOverrides, GameConfig};
use wordsearch::{Board, WordSearchError, WordSearchGame};

/// Boggle-style word search
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list (whitespace separated)
    #[arg(short, long)]
    lexicon: Option<PathBuf>,

    /// JSON board file (flat token array or array of rows)
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Play on a random NxN board instead
    #[arg(short, long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long)]
    seed: Option<u64>,

    /// Minimum word length
    #[arg(short = 'm', long)]
    min_length: Option<usize>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging (also WORDSEARCH_DEBUG)
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every word on the board with its path and the total score
    Solve,
    /// Check whether words are in the lexicon and on the board
    Check { words: Vec<String> },
    /// Score a list of words
    Score { words: Vec<String> },
    /// Guess words interactively
    Play,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("WORDSEARCH_DEBUG").is_ok();
    wordsearch::logging::init_logger(debug_enabled);

    if let Err(e) = try_main(cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<(), WordSearchError> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let config = config.merge(ConfigOverrides {
        lexicon: cli.lexicon,
        board: cli.board,
        random_size: cli.random,
        seed: cli.seed,
        min_length: cli.min_length,
    });
    log::debug!("Using config {:?}", config);

    let game = build_game(&config)?;
    let min_length = config.min_length;

    match cli.command {
        Command::Solve => solve(&game, min_length),
        Command::Check { words } => check(&game, &words),
        Command::Score { words } => {
            println!("{}", game.score_for_words(&words, min_length)?);
            Ok(())
        }
        Command::Play => play(&game, min_length),
    }
}

fn build_game(config: &GameConfig) -> Result<WordSearchGame, WordSearchError> {
    let mut game = WordSearchGame::new();

    if let Some(path) = &config.board {
        game.replace_board(Board::from_file(path)?);
    } else if let Some(tiles) = &config.tiles {
        game.set_board(tiles)?;
    } else if let Some(size) = config.random_size {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        game.replace_board(Board::random(size, &TileBag::default(), &mut rng)?);
    }

    match &config.lexicon {
        Some(path) => {
            let t_load = Instant::now();
            let count = game.load_lexicon(path)?;
            log::info!(
                "Loaded {} words in {:.3}s",
                count,
                t_load.elapsed().as_secs_f64()
            );
        }
        None => log::warn!("No lexicon given; pass --lexicon or set it in the config file"),
    }
    Ok(game)
}

fn solve(game: &WordSearchGame, min_length: usize) -> Result<(), WordSearchError> {
    println!("{}\n", game.board_text());

    let t_solve = Instant::now();
    let paths = game.word_paths(min_length)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    for (word, path) in paths.iter() {
        println!("{:<16} {:?}", word, path);
    }
    let words: BTreeSet<&str> = paths.iter().map(|(w, _)| w.as_str()).collect();
    let total = game.score_for_words(&words, min_length)?;

    eprintln!(
        "Found {} words worth {} points in {:.3}s.",
        words.len(),
        total,
        solve_secs
    );
    Ok(())
}

fn check(game: &WordSearchGame, words: &[String]) -> Result<(), WordSearchError> {
    for word in words {
        let valid = game.is_valid_word(word)?;
        let path = game.is_on_board(word)?;
        let status = match (valid, path.is_empty()) {
            (true, false) => "ok",
            (true, true) => "not on board",
            (false, false) => "not a word",
            (false, true) => "not a word, not on board",
        };
        println!("{:<16} {:<26} {:?}", word.to_uppercase(), status, path);
    }
    Ok(())
}

fn play(game: &WordSearchGame, min_length: usize) -> Result<(), WordSearchError> {
    let all_words = game.all_scorable_words(min_length)?;
    let mut guessed = BTreeSet::new();
    let mut total = 0;

    println!("{}\n", game.board_text());
    println!(
        "{} words to find (at least {} letters). Empty line to stop.",
        all_words.len(),
        min_length
    );

    loop {
        let guess: String = match try_read!("{}\n") {
            Ok(line) => line,
            Err(_) => break,
        };
        let guess = guess.trim().to_uppercase();
        if guess.is_empty() {
            break;
        }
        if guessed.contains(&guess) {
            println!("Already found {}", guess);
        } else if guess.chars().count() < min_length {
            println!("Too short");
        } else if !game.is_valid_word(&guess)? {
            println!("{} is not a word", guess);
        } else if game.is_on_board(&guess)?.is_empty() {
            println!("{} is not on the board", guess);
        } else {
            total += word_score(&guess, min_length);
            println!("+{} ({} total)", word_score(&guess, min_length), total);
            guessed.insert(guess);
        }
    }

    let missed: Vec<&String> = all_words.difference(&guessed).collect();
    println!(
        "Final score: {} ({} of {} words)",
        total,
        guessed.len(),
        all_words.len()
    );
    if !missed.is_empty() {
        println!(
            "Missed: {}",
            missed
                .iter()
                .map(|w| w.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(())
}
