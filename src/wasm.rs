use crate::crossword::{Crossword, NumberedClue, PlacedWord, UnplacedWord};
use crate::errors::PuzzleError;
use crate::grid::Bounds;
use crate::log::init_logger;
use crate::placement::{generate, PuzzleConfig, DEFAULT_MAX_WORDS};
use crate::word::WordClue;
use crate::word_list::WordList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "P001", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<PuzzleError> for WasmError {
    fn from(e: PuzzleError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(code: &str, what: &str, e: serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// Initialize logging and the panic hook.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized ({})", crate::VERSION);
}

/// Largest seed a JS number holds exactly (`Number.MAX_SAFE_INTEGER`).
/// `serde_wasm_bindgen` refuses to serialize a larger `u64`.
const MAX_JS_SEED: u64 = (1 << 53) - 1;

/// The caller's seed if it is usable, otherwise a fresh one. Either way the
/// result fits in [`MAX_JS_SEED`] so it can be handed back to the page.
fn resolve_seed(seed: Option<f64>) -> u64 {
    match seed {
        Some(s) if s.is_finite() && s >= 0.0 => (s as u64).min(MAX_JS_SEED),
        _ => rand::thread_rng().gen_range(0..=MAX_JS_SEED),
    }
}

/// Everything the worksheet page needs to draw one puzzle.
#[derive(serde::Serialize)]
struct WasmCrossword {
    /// Cropped rows with letters shown (answer key).
    rows_revealed: Vec<String>,
    /// Cropped rows with letters hidden (student sheet).
    rows_hidden: Vec<String>,
    bounds: Option<Bounds>,
    grid_size: usize,
    /// Seed that reproduces this exact layout.
    seed: u64,
    placed: Vec<PlacedWord>,
    unplaced: Vec<UnplacedWord>,
    clues: Vec<NumberedClue>,
}

impl WasmCrossword {
    fn new(crossword: &Crossword, grid_size: usize, seed: u64) -> Self {
        WasmCrossword {
            rows_revealed: crossword.rows(true),
            rows_hidden: crossword.rows(false),
            bounds: crossword.bounds(),
            grid_size,
            seed,
            placed: crossword.placed().to_vec(),
            unplaced: crossword.unplaced().to_vec(),
            clues: crossword.clue_numbers(),
        }
    }
}

/// JS entry: (entries: {word, clue}[], grid_size: number, seed?: number)
///
/// Without a seed a random one is drawn; it is returned in the result so the
/// page can regenerate the same layout.
#[wasm_bindgen]
pub fn generate_crossword_wasm(
    entries: JsValue,
    grid_size: usize,
    seed: Option<f64>,
) -> Result<JsValue, JsValue> {
    let pairs: Vec<WordClue> = serde_wasm_bindgen::from_value(entries).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("entries must be {{word, clue}}[]: {e}"),
        description: "Invalid word list format".to_string(),
        details: "The entries parameter must be a JavaScript array of objects with a `word` string and an optional `clue` string.".to_string(),
        help: Some("Example: [{word: 'tucan', clue: 'Bird with a huge beak'}, {word: 'dingo'}]".to_string()),
    })?;

    let seed = resolve_seed(seed);
    let config = PuzzleConfig { grid_size, max_words: DEFAULT_MAX_WORDS };
    let mut rng = StdRng::seed_from_u64(seed);

    let crossword = generate(&pairs, &config, &mut rng).map_err(WasmError::from)?;

    to_value(&WasmCrossword::new(&crossword, grid_size, seed))
        .map_err(|e| serialization_error("WASM002", "crossword", e))
}

/// Parse a newline-separated `word;clue` list into `{word, clue}[]`.
///
/// # Errors
/// Returns a `JsValue` error if the result cannot be serialized.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text);
    to_value(&word_list.entries).map_err(|e| serialization_error("WASM003", "word list", e))
}

/// Generate a debug report for troubleshooting.
///
/// Users can copy/paste it when reporting a layout problem; with the seed and
/// the word count the layout can be reproduced.
#[wasm_bindgen]
pub fn get_debug_info(
    error_message: &str,
    word_count: usize,
    grid_size: usize,
    seed: Option<f64>,
) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails (infallible operation)
    let _ = writeln!(&mut report, "=== ASSIGNMATE DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {}", crate::VERSION);
    let _ = writeln!(&mut report, "Commit: {}", env!("GIT_HASH_FULL"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Word Count: {}", word_count);
    let _ = writeln!(&mut report, "Grid Size: {}", grid_size);
    match seed {
        Some(s) => {
            let _ = writeln!(&mut report, "Seed: {}", s as u64);
        }
        None => {
            let _ = writeln!(&mut report, "Seed: none");
        }
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_get_debug_info_structure() {
        let report = get_debug_info("grid size 1 is outside the supported range", 12, 1, Some(42.0));

        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=== ASSIGNMATE DEBUG REPORT ===");
        assert_eq!(lines[1], format!("Version: {}", crate::VERSION));
        assert!(lines[2].starts_with("Commit: "));
        assert!(lines[3].starts_with("Generated: "));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "## Error");
        assert_eq!(lines[6], "grid size 1 is outside the supported range");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "## Input");
        assert_eq!(lines[9], "Word Count: 12");
        assert_eq!(lines[10], "Grid Size: 1");
        assert_eq!(lines[11], "Seed: 42");
        assert_eq!(lines.last(), Some(&"=== END DEBUG REPORT ==="));
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_get_debug_info_without_seed() {
        let report = get_debug_info("error", 0, 32, None);
        assert!(report.lines().any(|l| l == "Seed: none"));
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_wasm_error_from_puzzle_error() {
        let e = WasmError::from(PuzzleError::TooManyWords { count: 80, max: 64 });
        assert_eq!(e.code, "P002");
        assert!(e.message.contains("80"));
        assert!(e.help.is_some());
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_wasm_crossword_shape() {
        let pairs = vec![WordClue::new("tucan", "Bird"), WordClue::new("dingo", "Dog")];
        let mut rng = StdRng::seed_from_u64(3);
        let crossword = generate(&pairs, &PuzzleConfig::default(), &mut rng).unwrap();
        let shaped = WasmCrossword::new(&crossword, 32, 3);
        assert_eq!(shaped.rows_revealed.len(), 5);
        assert_eq!(shaped.rows_hidden[4], "_ _ _ _ _");
        assert_eq!(shaped.clues.len(), 2);
        assert_eq!(shaped.seed, 3);
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_resolve_seed_stays_js_safe() {
        assert_eq!(resolve_seed(Some(42.0)), 42);
        assert_eq!(resolve_seed(Some(1e300)), MAX_JS_SEED);
        for _ in 0..100 {
            assert!(resolve_seed(None) <= MAX_JS_SEED);
            assert!(resolve_seed(Some(f64::NAN)) <= MAX_JS_SEED);
        }
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_generate_without_seed_serializes() {
        let pairs = vec![WordClue::new("tucan", "Bird"), WordClue::new("dingo", "Dog")];
        let entries = to_value(&pairs).unwrap();
        for _ in 0..20 {
            let result = generate_crossword_wasm(entries.clone(), 32, None).unwrap();
            let seed = js_sys::Reflect::get(&result, &JsValue::from_str("seed")).unwrap();
            let seed = seed.as_f64().unwrap();
            assert!(seed >= 0.0 && seed <= MAX_JS_SEED as f64);
        }
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_direction_serializes_as_code() {
        use crate::grid::Direction;
        assert_eq!(to_value(&Direction::Down).unwrap().as_f64(), Some(0.0));
        assert_eq!(to_value(&Direction::Across).unwrap().as_f64(), Some(1.0));
    }
}
