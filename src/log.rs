#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Setting this variable (to anything) turns on debug logging in the CLI tools.
pub const DEBUG_ENV_VAR: &str = "ASSIGNMATE_DEBUG";

/// Whether the user asked for debug output through [`DEBUG_ENV_VAR`].
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}

/// Initialize logging for the placement engine and its front ends.
///
/// # Behavior
/// - **Native (CLI):** `Debug` when `debug_enabled`, else `Info`; `RUST_LOG`
///   overrides both. Calling it twice is harmless.
/// - **WASM:** logs to the browser console at `Debug` or `Info`.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        if let Err(e) = console_log::init_with_level(level) {
            // keep the module usable without logs rather than panicking
            let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
            web_sys::console::error_1(&msg.into());
            return;
        }
        log::info!("WASM logger initialized at {level:?} level");
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}
