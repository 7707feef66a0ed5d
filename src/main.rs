use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::process::ExitCode;

use assignmate::crossword::Crossword;
use assignmate::errors::PuzzleError;
use assignmate::placement::{self, PuzzleConfig, DEFAULT_GRID_SIZE, DEFAULT_MAX_WORDS};
use assignmate::word_list::WordList;

/// AssignMate crossword generator
#[derive(Parser, Debug)]
#[command(author, version = assignmate::VERSION, about, long_about = None)]
struct Cli {
    /// Words to place, each as `word` or `word;clue` (e.g., "tucan;Bird with a huge beak")
    words: Vec<String>,

    /// Path to a word list file (word;clue per line), read before WORDS
    #[arg(short, long)]
    word_list: Option<String>,

    /// Side length of the square grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Maximum number of words accepted
    #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Seed for the random tie-break (a random seed is drawn and logged if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the letters instead of blank squares
    #[arg(short, long)]
    reveal: bool,

    /// Print the numbered clue list under the grid
    #[arg(short, long)]
    clues: bool,
}

/// Entry point of the AssignMate CLI.
///
/// Delegates to [`try_main`], printing any error with its code and help text
/// before exiting with code 1.
fn main() -> ExitCode {
    assignmate::log::init_logger(assignmate::log::debug_requested());

    if let Err(e) = try_main() {
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Collect the word list from the file (if any) and the positional words.
/// 3. Generate the crossword with a seeded random source.
/// 4. Report skipped words on stderr, then print the grid (and optionally the
///    clues) on stdout.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut word_list = match &cli.word_list {
        Some(path) => WordList::load_from_path(path)?,
        None => WordList::default(),
    };
    word_list.extend(WordList::parse_from_str(&cli.words.join("\n")));
    if word_list.is_empty() {
        return Err(PuzzleError::NoWords.into());
    }

    let config = PuzzleConfig { grid_size: cli.size, max_words: cli.max_words };
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("generating with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let crossword = placement::generate(&word_list.entries, &config, &mut rng)?;
    for line in skipped_report(&crossword) {
        eprintln!("{line}");
    }
    check_placed(&crossword)?;

    print!("{}", crossword.render(cli.reveal));

    if cli.clues {
        println!();
        let mut heading = None;
        for clue in crossword.clue_numbers() {
            if heading != Some(clue.direction) {
                println!("{}:", clue.direction.to_string().to_uppercase());
                heading = Some(clue.direction);
            }
            if clue.clue.is_empty() {
                println!("  {}. ({} letters)", clue.number, clue.word.chars().count());
            } else {
                println!("  {}. {}", clue.number, clue.clue);
            }
        }
    }

    eprintln!(
        "✓ Placed {}/{} words (seed {seed})",
        crossword.placed().len(),
        crossword.placed().len() + crossword.unplaced().len()
    );

    Ok(())
}

/// One stderr line per word the engine had to skip.
fn skipped_report(crossword: &Crossword) -> Vec<String> {
    crossword
        .unplaced()
        .iter()
        .map(|skipped| format!("⚠️  Could not place {}: {}", skipped.word, skipped.reason))
        .collect()
}

/// A puzzle with no placed word has nothing to print.
///
/// `NoWords` when every entry was too short to reach the engine,
/// `NothingPlaced` when words were tried and all of them were skipped.
fn check_placed(crossword: &Crossword) -> Result<(), PuzzleError> {
    match (crossword.placed().is_empty(), crossword.unplaced().len()) {
        (false, _) => Ok(()),
        (true, 0) => Err(PuzzleError::NoWords),
        (true, skipped) => Err(PuzzleError::NothingPlaced { skipped }),
    }
}
