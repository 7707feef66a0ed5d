//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of crossword generation for a handful of word lists.
//! - Each case runs once per seed in `0..repeats`; the median time is reported.
//! - Also reports how many words were placed on average, so layout regressions
//!   show up next to speed regressions.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - More seeds:                     `cargo run --bin bench_local --release -- -r 200`
//! - Print the last grid per case:   `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Printing is kept outside the timed section.

use assignmate::placement::{self, PuzzleConfig, DEFAULT_GRID_SIZE};
use assignmate::word::WordClue;
use assignmate::Crossword;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Instant;

/// Simple local benchmark runner: time generation over fixed word lists.
#[derive(Parser, Debug)]
#[command(author, version = assignmate::VERSION, about, long_about = None)]
struct Cli {
    /// Number of seeded runs per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 50)]
    num_repeats: u64,

    /// Grid size used for every case
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Print the revealed grid of the last run of each case
    #[arg(short = 'p', long = "print")]
    print_grid: bool,
}

/// A benchmark case: a name and its words.
struct Case {
    name: &'static str,
    words: &'static [&'static str],
}

/// Edit/add new word lists here.
fn get_cases() -> Vec<Case> {
    vec![
        Case { name: "two animals", words: &["tucan", "dingo"] },
        Case {
            name: "zoo",
            words: &[
                "elephant", "giraffe", "kangaroo", "penguin", "leopard", "cheetah", "gorilla",
                "flamingo", "tortoise", "antelope", "panther", "ostrich", "hyena", "lemur", "zebra",
            ],
        },
        Case {
            name: "short words",
            words: &["cat", "dog", "cow", "pig", "hen", "ant", "bee", "owl", "emu", "yak", "eel", "ape"],
        },
        Case {
            name: "no shared letters",
            words: &["abc", "def", "ghi", "jkl", "mno"],
        },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = PuzzleConfig { grid_size: cli.size, ..PuzzleConfig::default() };
    config.validate()?;

    let mut summary: Vec<(&str, f64, f64, usize)> = Vec::new();

    for (idx, case) in get_cases().iter().enumerate() {
        eprintln!("\n[{:02}] {} ({} words)", idx + 1, case.name, case.words.len());
        let pairs: Vec<WordClue> = case.words.iter().map(|&w| WordClue::from(w)).collect();

        let mut times = Vec::new();
        let mut placed_total = 0;
        let mut last: Option<Crossword> = None;

        for seed in 0..cli.num_repeats {
            let mut rng = StdRng::seed_from_u64(seed);
            let t_gen = Instant::now();
            let crossword = placement::generate(black_box(&pairs), &config, &mut rng)?;
            times.push(t_gen.elapsed().as_secs_f64());

            placed_total += crossword.placed().len();
            last = Some(crossword);
        }

        let med = median(times);
        let avg_placed = placed_total as f64 / cli.num_repeats.max(1) as f64;
        eprintln!("  → median {:.6}s; {:.1}/{} words placed on average", med, avg_placed, pairs.len());

        if cli.print_grid {
            if let Some(crossword) = &last {
                print!("{}", crossword.render(true));
            }
        }

        summary.push((case.name, med, avg_placed, pairs.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<20} | {:>12} | {:>8} | {:>5}", "case", "median (s)", "placed", "words");
    eprintln!("{:-<20}-+-{:-<12}-+-{:-<8}-+-{:-<5}", "", "", "", "");
    for (name, med, avg_placed, total) in &summary {
        eprintln!("{name:<20} | {med:>12.6} | {avg_placed:>8.1} | {total:>5}");
    }

    Ok(())
}
