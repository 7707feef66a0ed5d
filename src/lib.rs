//! AssignMate's crossword engine.
//!
//! Takes a list of `{ word, clue }` pairs and lays the words out on a square grid
//! so that they cross at shared letters, the way the worksheet generator prints
//! its crossword and word-search pages. See [`placement::generate`].

// Reusable library API, shared by the CLI and WASM builds
pub mod crossword;
pub mod errors;
pub mod grid;
pub mod log;
pub mod placement;
pub mod word;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crossword::Crossword;
pub use errors::PuzzleError;
pub use placement::{generate, PuzzleConfig};
pub use word::WordClue;

/// Version string shown by the front ends: package version plus the git commit
/// captured by `build.rs`.
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");
