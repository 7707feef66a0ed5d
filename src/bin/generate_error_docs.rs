//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `PuzzleError` via its `code()`, `description()`, `details()`,
//! and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use assignmate::errors::PuzzleError;
use assignmate::placement::{DEFAULT_MAX_WORDS, MAX_GRID_SIZE, MIN_GRID_SIZE};
use std::fmt::Write;

/// One of each `PuzzleError` variant, with representative values
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::InvalidGridSize { size: 1, min: MIN_GRID_SIZE, max: MAX_GRID_SIZE },
        PuzzleError::TooManyWords { count: DEFAULT_MAX_WORDS + 1, max: DEFAULT_MAX_WORDS },
        PuzzleError::NoWords,
        PuzzleError::ReplayMismatch { row: 16, col: 18 },
        PuzzleError::NothingPlaced { skipped: 3 },
    ]
}

/// Render one documentation section per error
fn error_sections(errors: &[PuzzleError]) -> String {
    let mut out = String::new();

    // NB: writing to a String never fails
    for error in errors {
        let _ = writeln!(out, "### {}: {}\n", error.code(), error.description());
        let _ = writeln!(out, "**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            let _ = writeln!(out, "**How to fix:**");
            let _ = writeln!(out, "```\n{help_text}\n```\n");
        }

        let _ = writeln!(out, "**Example error message:**");
        let _ = writeln!(out, "```\n{error}\n```\n");

        let _ = writeln!(out, "**Detailed format:**");
        let _ = writeln!(out, "```\n{}\n```\n", error.display_detailed());

        let _ = writeln!(out, "---\n");
    }

    out
}

fn render_docs() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Puzzle Errors\n");
    let _ = writeln!(out, "Errors raised before any word is placed (bad configuration or empty input), the internal replay check, and the CLI's report when every word was skipped.\n");
    out.push_str(&error_sections(&all_puzzle_error_variants()));

    let _ = writeln!(out, "## Words That Could Not Be Placed\n");
    let _ = writeln!(out, "A word that finds no crossing is *not* an error. Generation continues and the word is listed as skipped:\n");
    let _ = writeln!(out, "```\n⚠️  Could not place DINGO: no valid crossing with the placed words\n```\n");

    let _ = writeln!(out, "## Error Display Formats\n");
    let _ = writeln!(out, "### Simple Format");
    let _ = writeln!(out, "```\nError: <message>\n```\n");
    let _ = writeln!(out, "### Detailed Format (via `display_detailed()`)");
    let _ = writeln!(out, "```\n<message> (<code>)\n<help text if available>\n```");

    out
}

fn main() {
    print!("{}", render_docs());
}
