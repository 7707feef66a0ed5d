//! Error types for puzzle configuration and verification, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (P001-P005) for documentation lookup:
//!
//! - P001: `InvalidGridSize` (Grid size outside the supported range)
//! - P002: `TooManyWords` (Word list exceeds the configured cap)
//! - P003: `NoWords` (Nothing usable to place)
//! - P004: `ReplayMismatch` (Recorded placements do not reproduce the grid)
//! - P005: `NothingPlaced` (Every word was skipped)
//!
//! Words that cannot be placed are *not* errors. They are reported per word
//! through [`crate::placement::SkipReason`] and generation carries on. Only a
//! front end that has nothing to print turns an all-skipped result into
//! `NothingPlaced`.
//!
//! # Examples
//!
//! ```
//! use assignmate::errors::PuzzleError;
//! use assignmate::placement::PuzzleConfig;
//!
//! let config = PuzzleConfig { grid_size: 1, ..PuzzleConfig::default() };
//! match config.validate() {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!         assert!(matches!(e, PuzzleError::InvalidGridSize { .. }));
//!     }
//!     Ok(()) => unreachable!(),
//! }
//! ```

use std::io;

/// Custom error type for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("grid size {size} is outside the supported range {min}..={max}")]
    InvalidGridSize { size: usize, min: usize, max: usize },

    #[error("{count} words supplied but at most {max} can be placed in one puzzle")]
    TooManyWords { count: usize, max: usize },

    #[error("no words to place")]
    NoWords,

    #[error("replaying the recorded placements disagrees with the grid at ({row}, {col})")]
    ReplayMismatch { row: usize, col: usize },

    #[error("none of the {skipped} words could be placed")]
    NothingPlaced { skipped: usize },
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::InvalidGridSize { .. } => "P001",
            PuzzleError::TooManyWords { .. } => "P002",
            PuzzleError::NoWords => "P003",
            PuzzleError::ReplayMismatch { .. } => "P004",
            PuzzleError::NothingPlaced { .. } => "P005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::InvalidGridSize { .. } => "Grid size outside the supported range",
            PuzzleError::TooManyWords { .. } => "Word list exceeds the configured cap",
            PuzzleError::NoWords => "Nothing usable to place",
            PuzzleError::ReplayMismatch { .. } => "Recorded placements do not reproduce the grid",
            PuzzleError::NothingPlaced { .. } => "Every word was skipped",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::InvalidGridSize { .. } => "The square grid must be at least 2 cells wide so a two-letter word fits, and is capped so the candidate search stays small.",
            PuzzleError::TooManyWords { .. } => "The crossing search compares every letter of the new word with every placed letter, so the number of words in one puzzle is capped.",
            PuzzleError::NoWords => "The word list was empty, or every entry was shorter than two letters after removing whitespace.",
            PuzzleError::ReplayMismatch { .. } => "A placed word was written over a different letter, or the grid holds a letter no placement accounts for. This is an internal error in the placement engine.",
            PuzzleError::NothingPlaced { .. } => "Each word was skipped: the first one did not fit at the centre of the grid, and no later word found a valid crossing before all of them were tried.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::InvalidGridSize { .. } => Some("Pick a grid size between 2 and 128 (the default is 32)"),
            PuzzleError::TooManyWords { .. } => Some("Split the word list into several worksheets"),
            PuzzleError::NoWords => Some("Example: 'tucan;A bird with a big beak' 'dingo;A wild dog'"),
            PuzzleError::ReplayMismatch { .. } => Some("This is an internal error. Please report it along with the word list and seed."),
            PuzzleError::NothingPlaced { .. } => Some("Use a larger grid (--size) or shorter words"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<PuzzleError> {
        vec![
            PuzzleError::InvalidGridSize { size: 1, min: 2, max: 128 },
            PuzzleError::TooManyWords { count: 100, max: 64 },
            PuzzleError::NoWords,
            PuzzleError::ReplayMismatch { row: 3, col: 4 },
            PuzzleError::NothingPlaced { skipped: 2 },
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = PuzzleError::NoWords;
        assert_eq!(err.code(), "P003");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("P003"));
        assert!(detailed.contains("Example"));
    }

    /// Test that all `PuzzleError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            let code = err.code();
            assert!(code.starts_with('P'), "Error code '{}' should start with 'P'", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 5);
    }

    /// Test that all error codes follow the format P0XX
    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (P0XX)", code);
            assert!(code.starts_with("P0"));
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_help_adds_information() {
        for err in all_variants() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
            assert!(!err.description().is_empty());
            assert!(!err.details().is_empty());
        }
    }

    #[test]
    fn test_grid_size_message_includes_values() {
        let err = PuzzleError::InvalidGridSize { size: 500, min: 2, max: 128 };
        let detailed = err.display_detailed();
        assert!(detailed.contains("500"));
        assert!(detailed.contains("128"));
        assert!(detailed.contains("P001"));
    }

    #[test]
    fn test_nothing_placed_differs_from_no_words() {
        let err = PuzzleError::NothingPlaced { skipped: 2 };
        assert_eq!(err.code(), "P005");
        assert_eq!(err.to_string(), "none of the 2 words could be placed");
        assert_ne!(err.details(), PuzzleError::NoWords.details());
    }

    #[test]
    fn test_into_io_error() {
        let io_err: io::Error = PuzzleError::NoWords.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(io_err.to_string(), "no words to place");
    }
}
